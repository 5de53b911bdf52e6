//! Preference persistence seam

/// Where serialized preferences live between sessions (localStorage in a
/// browser, a file or table elsewhere).
///
/// Persistence is fire-and-forget: implementations log failures instead of
/// surfacing them, so a full or unavailable store never blocks theme
/// application.
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, serialized: &str);
}

/// In-memory store for tests and server-side sessions.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    pub fn with_value(serialized: impl Into<String>) -> Self {
        Self {
            value: Some(serialized.into()),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, serialized: &str) {
        self.value = Some(serialized.to_string());
    }
}
