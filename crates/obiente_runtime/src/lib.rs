//! Obiente runtime theming
//!
//! The client-side half of the theme system: a [`ThemeSession`] owns the
//! user's [`ThemePreferences`], resolves them through a shared
//! [`obiente_theme::ThemeRegistry`], and applies the result to a document
//! behind the [`DocumentHandle`] seam — only the attributes, classes, and
//! inline variables that actually changed are touched.
//!
//! The same resolution runs server-side through [`ssr::resolve_from_cookie`]
//! so server-rendered markup and the first client paint agree.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use obiente_runtime::{MemoryStore, ThemeSession};
//! use obiente_theme::ThemeRegistry;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(ThemeRegistry::with_builtin());
//! let mut session = ThemeSession::new(registry, document, MemoryStore::default());
//! session.initialize();
//! session.set_color("catppuccin-mocha")?;
//! ```

pub mod cookie;
pub mod document;
pub mod preferences;
pub mod props;
pub mod session;
pub mod ssr;
pub mod store;

// Re-export commonly used types
pub use cookie::{cookie_value, preferences_cookie};
pub use document::DocumentHandle;
pub use preferences::{ThemePreferences, DEFAULT_BASE_ID, DEFAULT_COLOR_ID, STORAGE_KEY};
pub use props::{html_props, HtmlProps};
pub use session::{SubscriptionId, ThemeChange, ThemeSession};
pub use ssr::{resolve_from_cookie, resolve_preferences, SsrTheme};
pub use store::{MemoryStore, PreferenceStore};
