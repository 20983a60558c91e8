//! Haze Scroll Triggers
//!
//! Viewport-intersection callbacks for scroll-driven effects. A trigger is
//! a (element, threshold, fire policy, callback) registration; the concrete
//! [`ScrollDispatcher`] evaluates crossings whenever the scroll offset
//! changes. Any host intersection facility can stand in by implementing
//! [`ViewportObserver`].

pub mod dispatcher;
pub mod trigger;

pub use dispatcher::{ScrollDispatcher, ViewportObserver};
pub use trigger::{FirePolicy, TriggerId};
