//! Timeline orchestration
//!
//! A timeline composes tweens at relative offsets so one clock drives a
//! whole choreography, and provides stagger helpers for animating runs of
//! sibling elements with per-index delays.

use crate::tween::{Tween, TweenProps};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct TimelineEntryId;
}

struct TimelineEntry {
    /// Offset in milliseconds from timeline start
    offset_ms: u32,
    tween: Tween,
    started: bool,
}

/// An ordered composition of tweens, optionally overlapping via offsets
pub struct Timeline {
    entries: SlotMap<TimelineEntryId, TimelineEntry>,
    current_time: f32,
    duration_ms: u32,
    playing: bool,
    /// -1 for infinite
    repeat: i32,
    current_loop: i32,
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
            current_time: 0.0,
            duration_ms: 0,
            playing: false,
            repeat: 1,
            current_loop: 0,
        }
    }

    /// Add a tween starting at the given offset from timeline start
    pub fn add(&mut self, offset_ms: u32, tween: Tween) -> TimelineEntryId {
        let end = offset_ms + tween.delay_ms() + tween.duration_ms();
        self.duration_ms = self.duration_ms.max(end);
        self.entries.insert(TimelineEntry {
            offset_ms,
            tween,
            started: false,
        })
    }

    /// Set loop count (-1 for infinite)
    pub fn set_repeat(&mut self, count: i32) {
        self.repeat = count;
    }

    pub fn start(&mut self) {
        self.current_time = 0.0;
        self.current_loop = 0;
        self.playing = true;
        for entry in self.entries.values_mut() {
            entry.started = false;
            entry.tween.stop();
        }
    }

    pub fn stop(&mut self) {
        self.playing = false;
        for entry in self.entries.values_mut() {
            entry.tween.stop();
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn total_duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Progress through one loop (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 0.0;
        }
        (self.current_time / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Advance the timeline, starting and ticking entries as their
    /// offsets are crossed
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }
        let previous = self.current_time;
        self.current_time += dt_ms;

        for entry in self.entries.values_mut() {
            let offset = entry.offset_ms as f32;
            if !entry.started && self.current_time >= offset {
                entry.tween.start();
                entry.started = true;
                // Consume however much of this frame lies past the offset.
                let overshoot = self.current_time - offset.max(previous);
                entry.tween.tick(overshoot);
            } else if entry.started {
                entry.tween.tick(dt_ms);
            }
        }

        if self.current_time >= self.duration_ms as f32 {
            if self.repeat == -1 || self.current_loop < self.repeat - 1 {
                self.current_time = 0.0;
                self.current_loop += 1;
                for entry in self.entries.values_mut() {
                    entry.started = false;
                    entry.tween.stop();
                }
            } else {
                self.current_time = self.duration_ms as f32;
                self.playing = false;
            }
        }
    }

    /// Sample the current properties of an entry
    pub fn sample(&self, id: TimelineEntryId) -> Option<TweenProps> {
        self.entries.get(id).map(|entry| entry.tween.sample())
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Direction for stagger delays
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StaggerDirection {
    /// First to last
    #[default]
    Forward,
    /// Last to first
    Reverse,
    /// Center outward
    FromCenter,
}

/// Per-index delay computation for staggered groups
#[derive(Clone, Copy, Debug)]
pub struct Stagger {
    /// Delay between consecutive items (ms)
    pub step_ms: u32,
    pub direction: StaggerDirection,
    /// Optional cap on the effective index, so long runs of items share
    /// the limit delay instead of stretching indefinitely
    pub limit: Option<usize>,
}

impl Stagger {
    pub fn new(step_ms: u32) -> Self {
        Self {
            step_ms,
            direction: StaggerDirection::Forward,
            limit: None,
        }
    }

    pub fn reverse(mut self) -> Self {
        self.direction = StaggerDirection::Reverse;
        self
    }

    pub fn from_center(mut self) -> Self {
        self.direction = StaggerDirection::FromCenter;
        self
    }

    /// Cap the effective index at `n`
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Delay for the item at `index` out of `total`
    pub fn delay_for(&self, index: usize, total: usize) -> u32 {
        let effective = match self.direction {
            StaggerDirection::Forward => index,
            StaggerDirection::Reverse => total.saturating_sub(1).saturating_sub(index),
            StaggerDirection::FromCenter => {
                let center = total / 2;
                index.abs_diff(center)
            }
        };
        let capped = match self.limit {
            Some(limit) => effective.min(limit),
            None => effective,
        };
        self.step_ms * capped as u32
    }
}
