//! Per-effect resource arena

use crate::context::EffectContext;
use haze_animation::TweenId;
use haze_core::{HandlerId, NodeId};
use haze_scroll::{TriggerId, ViewportObserver};
use smallvec::SmallVec;

/// The transient handles one effect activation owns
///
/// Every node, tween, handler, and trigger an effect creates goes through
/// the arena, and [`release`](EffectArena::release) tears all of them down
/// in one pass. An arena that is dropped without being released leaks its
/// handles into the app's singletons, hence `#[must_use]`.
#[must_use]
#[derive(Default)]
pub struct EffectArena {
    nodes: SmallVec<[NodeId; 16]>,
    tweens: SmallVec<[TweenId; 16]>,
    handlers: SmallVec<[HandlerId; 2]>,
    triggers: SmallVec<[TriggerId; 2]>,
}

impl EffectArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track_node(&mut self, id: NodeId) -> NodeId {
        self.nodes.push(id);
        id
    }

    pub fn track_tween(&mut self, id: TweenId) -> TweenId {
        self.tweens.push(id);
        id
    }

    pub fn track_handler(&mut self, id: HandlerId) -> HandlerId {
        self.handlers.push(id);
        id
    }

    pub fn track_trigger(&mut self, id: TriggerId) -> TriggerId {
        self.triggers.push(id);
        id
    }

    /// Stop tracking a tween the effect has already cleaned up itself
    pub fn forget_tween(&mut self, id: TweenId) {
        self.tweens.retain(|t| *t != id);
    }

    /// Stop tracking a node the effect has already cleaned up itself
    pub fn forget_node(&mut self, id: NodeId) {
        self.nodes.retain(|n| *n != id);
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
            && self.tweens.is_empty()
            && self.handlers.is_empty()
            && self.triggers.is_empty()
    }

    /// Release every tracked handle
    ///
    /// Tweens are killed before nodes are removed so nothing samples a
    /// vanished target mid-teardown. Already-released handles are no-ops
    /// in their owning registries.
    pub fn release(&mut self, cx: &mut EffectContext<'_>) {
        for id in self.triggers.drain(..) {
            cx.scroll.unregister(id);
        }
        for id in self.handlers.drain(..) {
            cx.events.off(id);
        }
        for id in self.tweens.drain(..) {
            cx.scheduler.kill(id);
        }
        for id in self.nodes.drain(..) {
            cx.stage.remove(id);
        }
    }
}
