//! Trigger registrations and fire policies

use slotmap::new_key_type;

new_key_type! {
    /// Key for a scroll trigger registration
    pub struct TriggerId;
}

/// How often a trigger fires once its element crosses the threshold
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FirePolicy {
    /// Fire on the first qualifying crossing, never again
    #[default]
    Once,
    /// Re-arm whenever the element leaves the trigger zone
    EveryCrossing,
}
