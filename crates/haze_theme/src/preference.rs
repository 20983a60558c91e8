//! Theme preference and color scheme types

use serde::{Deserialize, Serialize};

/// A resolved color scheme
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// The user's persisted theme choice
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the host's color scheme
    #[default]
    System,
}

impl ThemePreference {
    /// Resolve against the host scheme
    pub fn resolve(self, system: ColorScheme) -> ColorScheme {
        match self {
            Self::Light => ColorScheme::Light,
            Self::Dark => ColorScheme::Dark,
            Self::System => system,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_explicit_ignores_system() {
        assert_eq!(
            ThemePreference::Light.resolve(ColorScheme::Dark),
            ColorScheme::Light
        );
        assert_eq!(
            ThemePreference::Dark.resolve(ColorScheme::Light),
            ColorScheme::Dark
        );
    }

    #[test]
    fn test_resolve_system_follows_host() {
        assert_eq!(
            ThemePreference::System.resolve(ColorScheme::Dark),
            ColorScheme::Dark
        );
        assert_eq!(
            ThemePreference::System.resolve(ColorScheme::Light),
            ColorScheme::Light
        );
    }

    #[test]
    fn test_string_round_trip() {
        for pref in [
            ThemePreference::Light,
            ThemePreference::Dark,
            ThemePreference::System,
        ] {
            assert_eq!(ThemePreference::from_str(pref.as_str()), Some(pref));
        }
        assert_eq!(ThemePreference::from_str("sepia"), None);
    }
}
