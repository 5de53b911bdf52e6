//! Obiente Theme System
//!
//! Layered design tokens resolved into CSS custom properties.
//!
//! # Overview
//!
//! Themes come in three independent layers:
//! - **Base themes**: numeric multipliers for spacing, sizing, radius,
//!   typography, and elevation
//! - **Color themes**: a semantic color palette with a light/dark variant
//!   and an optional family grouping
//! - **Flair themes**: stackable, priority-ordered CSS-variable overrides
//!
//! A [`ThemeRegistry`] holds the catalog, and [`resolver::resolve`] merges
//! one base, one color, and any number of flair themes into a single
//! [`ResolvedTheme`] whose variable map is a pure function of its inputs.
//!
//! # Quick Start
//!
//! ```rust
//! use obiente_theme::{resolver, ThemeRegistry};
//!
//! let registry = ThemeRegistry::with_builtin();
//! let resolved = resolver::resolve(&registry, "default", "catppuccin-latte", &[])?;
//!
//! assert_eq!(resolved.css_variables["--oi-background"], "#eff1f5");
//! # Ok::<(), obiente_theme::ThemeError>(())
//! ```
//!
//! # Layer precedence
//!
//! Variables merge in a fixed order: base, then color, then flair. Later
//! layers win on key collision, and within the flair layer a higher
//! `priority` wins regardless of the order the flair ids were requested in.

pub mod error;
pub mod registry;
pub mod resolver;
pub mod themes;
pub mod types;

// Re-export commonly used types
pub use error::ThemeError;
pub use registry::{ThemeRegistry, RESERVED_IDS};
pub use resolver::{ResolvedTheme, VariableMap};
pub use types::*;
