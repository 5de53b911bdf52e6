//! Cookie encoding for theme preferences
//!
//! The cookie mirrors the storage value so the server can resolve the
//! theme before any client script runs.

use crate::preferences::STORAGE_KEY;

/// One year, the preference retention window.
pub const COOKIE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

/// Render the `Set-Cookie` value persisting serialized preferences.
pub fn preferences_cookie(serialized: &str) -> String {
    format!(
        "{STORAGE_KEY}={}; Path=/; Max-Age={COOKIE_MAX_AGE_SECS}; SameSite=Lax",
        urlencoding::encode(serialized)
    )
}

/// Extract a named cookie's decoded value from a `Cookie` request header.
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    for part in header.split(';') {
        let part = part.trim();
        let Some(rest) = part.strip_prefix(name) else {
            continue;
        };
        let Some(raw) = rest.strip_prefix('=') else {
            continue;
        };
        return Some(match urlencoding::decode(raw) {
            Ok(decoded) => decoded.into_owned(),
            Err(err) => {
                tracing::warn!(%err, "cookie value is not valid UTF-8 after decoding");
                raw.to_string()
            }
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::ThemePreferences;

    #[test]
    fn cookie_round_trips_through_a_header() {
        let serialized = ThemePreferences::default().serialize();
        let cookie = preferences_cookie(&serialized);
        assert!(cookie.starts_with("oi-theme-prefs="));
        assert!(cookie.ends_with("; Path=/; Max-Age=31536000; SameSite=Lax"));

        let pair = cookie.split(';').next().unwrap();
        let header = format!("session=abc; {pair}; other=1");
        assert_eq!(cookie_value(&header, STORAGE_KEY).unwrap(), serialized);
    }

    #[test]
    fn prefix_named_cookies_do_not_match() {
        let header = "oi-theme-prefs-backup=x; oi-theme-prefs=y";
        assert_eq!(cookie_value(header, STORAGE_KEY).unwrap(), "y");
        assert!(cookie_value("other=1", STORAGE_KEY).is_none());
    }
}
