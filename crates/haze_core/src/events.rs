//! Event dispatch
//!
//! Pointer, scroll, and lifecycle events flow through a single dispatcher.
//! Every registration returns a [`HandlerId`] so the owning component can
//! remove exactly the listeners it added when it deactivates.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_MOVE: EventType = 1;
    pub const POINTER_ENTER: EventType = 2;
    pub const POINTER_LEAVE: EventType = 3;
    pub const SCROLL: EventType = 10;
    pub const RESIZE: EventType = 20;

    // Component lifecycle events
    pub const MOUNT: EventType = 30;
    pub const UNMOUNT: EventType = 31;
}

/// An event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub data: EventData,
    /// Logical milliseconds since app start
    pub timestamp_ms: u64,
}

impl Event {
    pub fn new(event_type: EventType, data: EventData, timestamp_ms: u64) -> Self {
        Self {
            event_type,
            data,
            timestamp_ms,
        }
    }

    pub fn pointer_move(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self::new(
            event_types::POINTER_MOVE,
            EventData::Pointer { x, y },
            timestamp_ms,
        )
    }

    pub fn scroll(offset_y: f32, timestamp_ms: u64) -> Self {
        Self::new(event_types::SCROLL, EventData::Scroll { offset_y }, timestamp_ms)
    }
}

/// Event-specific data
#[derive(Clone, Debug)]
pub enum EventData {
    Pointer { x: f32, y: f32 },
    Scroll { offset_y: f32 },
    Resize { width: f32, height: f32 },
    None,
}

new_key_type! {
    /// Key for a registered event handler
    pub struct HandlerId;
}

type Handler = Box<dyn FnMut(&Event)>;

struct HandlerEntry {
    event_type: EventType,
    handler: Handler,
}

/// Dispatches events to registered handlers
#[derive(Default)]
pub struct EventDispatcher {
    handlers: SlotMap<HandlerId, HandlerEntry>,
    by_type: FxHashMap<EventType, Vec<HandlerId>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an event type
    pub fn on<F>(&mut self, event_type: EventType, handler: F) -> HandlerId
    where
        F: FnMut(&Event) + 'static,
    {
        let id = self.handlers.insert(HandlerEntry {
            event_type,
            handler: Box::new(handler),
        });
        self.by_type.entry(event_type).or_default().push(id);
        id
    }

    /// Remove a handler registration
    ///
    /// Removing an unknown handler is a no-op.
    pub fn off(&mut self, id: HandlerId) {
        if let Some(entry) = self.handlers.remove(id) {
            if let Some(ids) = self.by_type.get_mut(&entry.event_type) {
                ids.retain(|h| *h != id);
            }
        }
    }

    /// Dispatch an event to every handler registered for its type
    pub fn dispatch(&mut self, event: &Event) {
        let Some(ids) = self.by_type.get(&event.event_type) else {
            return;
        };
        // Handlers may not register/unregister reentrantly (dispatch holds
        // the registry), so a snapshot of ids is safe to walk.
        let ids: Vec<HandlerId> = ids.clone();
        for id in ids {
            if let Some(entry) = self.handlers.get_mut(id) {
                (entry.handler)(event);
            }
        }
    }

    /// Number of live handler registrations
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}
