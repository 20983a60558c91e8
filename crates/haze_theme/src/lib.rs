//! Haze Theme System
//!
//! A tri-state theme preference (light / dark / system) resolved against
//! the host's color scheme, persisted through an external store
//! collaborator, plus the semantic color tokens for each scheme.
//!
//! # Quick Start
//!
//! ```rust
//! use haze_theme::{ColorScheme, InMemoryStore, ThemeState};
//!
//! let mut theme = ThemeState::new(InMemoryStore::default(), ColorScheme::Dark);
//! assert_eq!(theme.resolved(), ColorScheme::Dark); // system default
//!
//! theme.toggle();
//! assert_eq!(theme.resolved(), ColorScheme::Light); // now explicit
//! ```

pub mod preference;
pub mod state;
pub mod store;
pub mod tokens;

pub use preference::{ColorScheme, ThemePreference};
pub use state::ThemeState;
pub use store::{InMemoryStore, ThemeStore};
pub use tokens::ColorTokens;
