//! Server-side resolution
//!
//! Runs the same resolver over a request's cookie so server-rendered
//! markup carries the exact attributes the client session would apply —
//! no flash of a mismatched theme before hydration.

use obiente_theme::{resolver, ResolvedTheme, ThemeRegistry};

use crate::cookie::cookie_value;
use crate::preferences::{ThemePreferences, DEFAULT_BASE_ID, DEFAULT_COLOR_ID, STORAGE_KEY};
use crate::props::{html_props, HtmlProps};

/// Server-side view of a request's theme.
#[derive(Clone, Debug)]
pub struct SsrTheme {
    pub preferences: ThemePreferences,
    pub resolved: Option<ResolvedTheme>,
    pub html_props: HtmlProps,
}

/// Resolve the theme for a request from its `Cookie` header.
///
/// A missing cookie, malformed value, or unresolvable stored ids all fall
/// back to the default theme; the caller always gets usable props unless
/// the registry itself cannot resolve the defaults.
pub fn resolve_from_cookie(registry: &ThemeRegistry, cookie_header: Option<&str>) -> SsrTheme {
    let preferences = cookie_header
        .and_then(|header| cookie_value(header, STORAGE_KEY))
        .map(|raw| ThemePreferences::parse(&raw))
        .unwrap_or_default();
    resolve_preferences(registry, preferences)
}

/// Resolve already-loaded preferences into the SSR shape.
pub fn resolve_preferences(registry: &ThemeRegistry, preferences: ThemePreferences) -> SsrTheme {
    let base = preferences.base.as_deref().unwrap_or(DEFAULT_BASE_ID);
    let color = preferences.color.as_deref().unwrap_or(DEFAULT_COLOR_ID);

    match resolver::resolve(registry, base, color, &preferences.flair) {
        Ok(resolved) => SsrTheme {
            html_props: html_props(&resolved),
            resolved: Some(resolved),
            preferences,
        },
        Err(err) => {
            tracing::warn!(%err, "request preferences do not resolve, reverting to defaults");
            let defaults = ThemePreferences::default();
            if preferences != defaults {
                return resolve_preferences(registry, defaults);
            }
            SsrTheme {
                preferences,
                resolved: None,
                html_props: HtmlProps::new(),
            }
        }
    }
}
