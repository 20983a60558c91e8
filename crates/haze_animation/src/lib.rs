//! Haze Animation System
//!
//! Time-based property interpolation for the stage tree.
//!
//! # Features
//!
//! - **Easing curves**: standard polynomial/sine/expo curves, overshoot,
//!   and CSS-style cubic bezier
//! - **Tweens**: from→to interpolation with delay, repeat, and yoyo
//! - **Timelines**: compose tweens at relative offsets, with stagger helpers
//! - **Scheduler**: owns every live tween until it is explicitly killed

pub mod easing;
pub mod scheduler;
pub mod timeline;
pub mod tween;

pub use easing::Easing;
pub use scheduler::{TweenId, TweenScheduler};
pub use timeline::{Stagger, StaggerDirection, Timeline, TimelineEntryId};
pub use tween::{Repeat, Tween, TweenProps};
