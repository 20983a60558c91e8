//! Haze Core Runtime
//!
//! Foundational primitives for the Haze portfolio runtime:
//!
//! - **Stage tree**: a retained tree of transient visual nodes, each owned
//!   by whichever effect or page created it
//! - **Geometry**: 2D points, sizes, rects, and vectors
//! - **Color**: linear RGBA with hex parsing and interpolation
//! - **Event dispatch**: pointer/scroll/lifecycle events with removable
//!   handler registrations
//!
//! # Example
//!
//! ```rust
//! use haze_core::{NodeKind, Stage};
//!
//! let mut stage = Stage::new();
//! let section = stage.create_in(stage.root(), NodeKind::Section);
//! let dot = stage.create_in(section, NodeKind::Particle);
//!
//! assert_eq!(stage.child_count(section), 1);
//! stage.remove(section);
//! assert!(!stage.contains(dot));
//! ```

pub mod color;
pub mod events;
pub mod geometry;
pub mod stage;

pub use color::Color;
pub use events::{event_types, Event, EventData, EventDispatcher, EventType, HandlerId};
pub use geometry::{Point, Rect, Size, Vec2};
pub use stage::{NodeId, NodeKind, Stage, StageNode};
