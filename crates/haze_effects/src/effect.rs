//! The effect lifecycle trait

use crate::context::EffectContext;

/// A composite visual behavior with a two-state lifecycle
///
/// An effect is either mounted or not. `mount` on a mounted effect and
/// `unmount` on an unmounted one are no-ops, so hosts can call both
/// unconditionally during page swaps.
pub trait Effect {
    /// Activate the effect, creating its transient resources
    ///
    /// An effect whose target container or element is missing from the
    /// stage logs at debug and stays unmounted.
    fn mount(&mut self, cx: &mut EffectContext<'_>);

    /// Deactivate the effect, releasing every resource it created
    fn unmount(&mut self, cx: &mut EffectContext<'_>);

    /// Advance per-frame state and apply animated properties to nodes
    fn tick(&mut self, cx: &mut EffectContext<'_>, dt_ms: f32);

    fn is_mounted(&self) -> bool;
}
