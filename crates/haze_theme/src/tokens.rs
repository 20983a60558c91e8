//! Semantic color tokens
//!
//! A small palette per scheme. Visual tokens only: changes trigger repaint,
//! never layout.

use haze_core::Color;

/// Semantic colors for one scheme
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorTokens {
    pub background: Color,
    pub surface: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub accent: Color,
    pub border: Color,
    /// Particle/shape tint for ambient effects
    pub effect_tint: Color,
}

impl ColorTokens {
    pub fn light() -> Self {
        Self {
            background: Color::from_hex(0xf8f7f4),
            surface: Color::from_hex(0xffffff),
            text_primary: Color::from_hex(0x1a1a2e),
            text_secondary: Color::from_hex(0x5a5a72),
            accent: Color::from_hex(0x6c5ce7),
            border: Color::from_hex(0xe2e0da),
            effect_tint: Color::from_hex(0x6c5ce7).with_alpha(0.35),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::from_hex(0x0f0f1a),
            surface: Color::from_hex(0x1a1a2e),
            text_primary: Color::from_hex(0xf0eff4),
            text_secondary: Color::from_hex(0x9a99ad),
            accent: Color::from_hex(0xa29bfe),
            border: Color::from_hex(0x2c2c44),
            effect_tint: Color::from_hex(0xa29bfe).with_alpha(0.35),
        }
    }

    /// Interpolate between two token sets, for animated scheme transitions
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            background: self.background.lerp(other.background, t),
            surface: self.surface.lerp(other.surface, t),
            text_primary: self.text_primary.lerp(other.text_primary, t),
            text_secondary: self.text_secondary.lerp(other.text_secondary, t),
            accent: self.accent.lerp(other.accent, t),
            border: self.border.lerp(other.border, t),
            effect_tint: self.effect_tint.lerp(other.effect_tint, t),
        }
    }
}
