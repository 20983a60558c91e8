//! Theme persistence collaborator
//!
//! Persistence lives outside this repository; the toggle control only
//! consumes this interface.

use crate::preference::ThemePreference;

/// External store for the theme preference
pub trait ThemeStore {
    /// Read the persisted preference, if any
    fn load(&self) -> Option<ThemePreference>;

    /// Persist a new preference
    fn save(&mut self, preference: ThemePreference);
}

/// Store used by tests and headless runs
#[derive(Debug, Default)]
pub struct InMemoryStore {
    stored: Option<ThemePreference>,
}

impl InMemoryStore {
    pub fn with_preference(preference: ThemePreference) -> Self {
        Self {
            stored: Some(preference),
        }
    }
}

impl ThemeStore for InMemoryStore {
    fn load(&self) -> Option<ThemePreference> {
        self.stored
    }

    fn save(&mut self, preference: ThemePreference) {
        self.stored = Some(preference);
    }
}
