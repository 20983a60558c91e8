//! Haze Composite Effects
//!
//! The decorative layer of the portfolio runtime. Each effect assembles
//! stage nodes, tweens, event handlers, and scroll triggers into one visual
//! behavior, and owns every transient handle it creates through an
//! [`EffectArena`] so deactivation releases the lot in one pass.
//!
//! Effects:
//!
//! - [`AmbientBackground`] — drifting background particles and shapes
//! - [`CursorTrail`] — dots smoothed toward the pointer with per-dot lag
//! - [`HoverBurst`] — one-shot radial particle bursts on hover
//! - [`SectionReveal`] — scroll-triggered slide and fade for a section
//! - [`SmokeTransition`] — staged veil cover and dispersal between pages

pub mod ambient;
pub mod arena;
pub mod burst;
pub mod context;
pub mod effect;
pub mod reveal;
pub mod smoke;
pub mod trail;

pub use ambient::{AmbientBackground, AmbientConfig};
pub use arena::EffectArena;
pub use burst::{HoverBurst, HoverBurstConfig};
pub use context::EffectContext;
pub use effect::Effect;
pub use reveal::{SectionReveal, SectionRevealConfig};
pub use smoke::{SmokePhase, SmokeTransition, SmokeTransitionConfig};
pub use trail::{CursorTrail, CursorTrailConfig};
