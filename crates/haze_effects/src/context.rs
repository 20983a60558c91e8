//! Shared mutable context passed to effects

use haze_animation::TweenScheduler;
use haze_core::{EventDispatcher, Point, Size, Stage};
use haze_scroll::ScrollDispatcher;

/// Everything an effect may touch while mounting, ticking, or unmounting
///
/// The context borrows the app's singletons for the duration of one call so
/// effects never hold references across frames.
pub struct EffectContext<'a> {
    pub stage: &'a mut Stage,
    pub scheduler: &'a mut TweenScheduler,
    pub events: &'a mut EventDispatcher,
    pub scroll: &'a mut ScrollDispatcher,
    /// Logical viewport size in CSS pixels
    pub viewport: Size,
    /// Last known pointer position in viewport coordinates
    pub pointer: Point,
}
