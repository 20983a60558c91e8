//! Scroll dispatcher: the concrete viewport observer
//!
//! Crossing detection is edge-triggered per `update` call: a trigger fires
//! when its element's top edge enters the zone below the configured
//! viewport threshold, and re-arms (for `EveryCrossing`) only after the
//! element leaves that zone again. A single deep scroll therefore fires a
//! trigger at most once.

use crate::trigger::{FirePolicy, TriggerId};
use haze_core::{NodeId, Stage};
use slotmap::SlotMap;

/// The viewport-observation capability
///
/// `threshold` is a fraction of the viewport height: a trigger whose
/// element's top edge rises above `viewport_height * threshold` (in
/// viewport coordinates) is considered crossed.
pub trait ViewportObserver {
    fn register(
        &mut self,
        element: NodeId,
        threshold: f32,
        policy: FirePolicy,
        callback: Box<dyn FnMut()>,
    ) -> TriggerId;

    fn unregister(&mut self, id: TriggerId);
}

struct Registration {
    element: NodeId,
    threshold: f32,
    policy: FirePolicy,
    callback: Box<dyn FnMut()>,
    /// Ready to fire on the next entry into the zone
    armed: bool,
    has_fired: bool,
}

/// Evaluates trigger crossings against the current scroll offset
pub struct ScrollDispatcher {
    registrations: SlotMap<TriggerId, Registration>,
    viewport_height: f32,
    scroll_y: f32,
}

impl ScrollDispatcher {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            registrations: SlotMap::with_key(),
            viewport_height,
            scroll_y: 0.0,
        }
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height;
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    /// Live registration count, for teardown assertions
    pub fn registration_count(&self) -> usize {
        self.registrations.len()
    }

    /// Apply a new scroll offset and fire any qualifying triggers
    ///
    /// Registrations whose element has left the stage are skipped.
    pub fn update(&mut self, scroll_y: f32, stage: &Stage) {
        self.scroll_y = scroll_y;
        let zone_line = self.viewport_height.max(0.0);

        for reg in self.registrations.values_mut() {
            let Some(node) = stage.get(reg.element) else {
                tracing::debug!(element = ?reg.element, "trigger element missing, skipping");
                continue;
            };
            let viewport_top = node.position.y - scroll_y;
            let in_zone = viewport_top <= zone_line * reg.threshold;

            if in_zone {
                if reg.armed {
                    reg.armed = false;
                    reg.has_fired = true;
                    (reg.callback)();
                }
            } else {
                // Leaving the zone re-arms replayable triggers only.
                match reg.policy {
                    FirePolicy::Once => {
                        if !reg.has_fired {
                            reg.armed = true;
                        }
                    }
                    FirePolicy::EveryCrossing => reg.armed = true,
                }
            }
        }
    }
}

impl ViewportObserver for ScrollDispatcher {
    fn register(
        &mut self,
        element: NodeId,
        threshold: f32,
        policy: FirePolicy,
        callback: Box<dyn FnMut()>,
    ) -> TriggerId {
        self.registrations.insert(Registration {
            element,
            threshold: threshold.clamp(0.0, 1.0),
            policy,
            callback,
            armed: true,
            has_fired: false,
        })
    }

    fn unregister(&mut self, id: TriggerId) {
        if self.registrations.remove(id).is_none() {
            tracing::trace!(?id, "unregister of unknown trigger ignored");
        }
    }
}
