//! Theme state and toggle semantics

use crate::preference::{ColorScheme, ThemePreference};
use crate::store::ThemeStore;
use crate::tokens::ColorTokens;

/// Current theme preference plus the store it persists through
pub struct ThemeState<S: ThemeStore> {
    preference: ThemePreference,
    system_scheme: ColorScheme,
    store: S,
}

impl<S: ThemeStore> ThemeState<S> {
    /// Build from the store's persisted preference (falling back to
    /// `System`) and the detected host scheme
    pub fn new(store: S, system_scheme: ColorScheme) -> Self {
        let preference = store.load().unwrap_or_default();
        Self {
            preference,
            system_scheme,
            store,
        }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// The scheme currently in effect
    pub fn resolved(&self) -> ColorScheme {
        self.preference.resolve(self.system_scheme)
    }

    /// Color tokens for the scheme currently in effect
    pub fn colors(&self) -> ColorTokens {
        match self.resolved() {
            ColorScheme::Light => ColorTokens::light(),
            ColorScheme::Dark => ColorTokens::dark(),
        }
    }

    /// Update the detected host scheme (affects `System` preference only)
    pub fn set_system_scheme(&mut self, scheme: ColorScheme) {
        self.system_scheme = scheme;
    }

    /// Set and persist an explicit preference
    pub fn set_preference(&mut self, preference: ThemePreference) {
        if self.preference != preference {
            tracing::debug!(from = ?self.preference, to = ?preference, "theme preference changed");
            self.preference = preference;
            self.store.save(preference);
        }
    }

    /// Switch to the explicit opposite of the currently resolved scheme
    ///
    /// A `System` preference resolved to dark becomes explicit `Light`;
    /// an explicit `Dark` likewise becomes explicit `Light`.
    pub fn toggle(&mut self) {
        let next = match self.resolved().toggle() {
            ColorScheme::Light => ThemePreference::Light,
            ColorScheme::Dark => ThemePreference::Dark,
        };
        self.set_preference(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    #[test]
    fn test_system_dark_toggles_to_explicit_light() {
        let mut theme = ThemeState::new(InMemoryStore::default(), ColorScheme::Dark);
        assert_eq!(theme.preference(), ThemePreference::System);

        theme.toggle();
        assert_eq!(theme.preference(), ThemePreference::Light);
        assert_eq!(theme.resolved(), ColorScheme::Light);
    }

    #[test]
    fn test_explicit_dark_toggles_to_light() {
        let store = InMemoryStore::with_preference(ThemePreference::Dark);
        let mut theme = ThemeState::new(store, ColorScheme::Light);

        theme.toggle();
        assert_eq!(theme.preference(), ThemePreference::Light);
    }

    #[test]
    fn test_toggle_persists_through_store() {
        let mut theme = ThemeState::new(InMemoryStore::default(), ColorScheme::Light);
        theme.toggle(); // resolved light -> explicit dark
        assert_eq!(theme.store.load(), Some(ThemePreference::Dark));
    }

    #[test]
    fn test_system_scheme_change_tracks_with_system_preference() {
        let mut theme = ThemeState::new(InMemoryStore::default(), ColorScheme::Light);
        assert_eq!(theme.resolved(), ColorScheme::Light);
        theme.set_system_scheme(ColorScheme::Dark);
        assert_eq!(theme.resolved(), ColorScheme::Dark);
    }
}
