use thiserror::Error;

use crate::types::ThemeKind;

#[derive(Debug, Error)]
pub enum ThemeError {
    /// Registration-time id collision, including the reserved-word set.
    #[error("theme id \"{0}\" is already registered or reserved")]
    DuplicateId(String),

    /// A mandatory base or color theme id did not resolve.
    #[error("no {kind} theme registered under id \"{id}\"")]
    UnresolvedTheme { kind: ThemeKind, id: String },
}
