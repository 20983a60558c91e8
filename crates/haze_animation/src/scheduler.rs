//! Tween scheduler
//!
//! Owns every live tween and advances them each frame. The scheduler keeps
//! a handle alive until it is explicitly killed, so components must release
//! the tweens they create when they deactivate.

use crate::tween::{Tween, TweenProps};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Key for a scheduled tween
    pub struct TweenId;
}

/// The scheduler that ticks all active tweens
#[derive(Default)]
pub struct TweenScheduler {
    tweens: SlotMap<TweenId, Tween>,
}

impl TweenScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tween and start it immediately
    pub fn add(&mut self, mut tween: Tween) -> TweenId {
        tween.start();
        self.tweens.insert(tween)
    }

    /// Register a tween without starting it
    pub fn add_paused(&mut self, tween: Tween) -> TweenId {
        self.tweens.insert(tween)
    }

    pub fn get(&self, id: TweenId) -> Option<&Tween> {
        self.tweens.get(id)
    }

    pub fn get_mut(&mut self, id: TweenId) -> Option<&mut Tween> {
        self.tweens.get_mut(id)
    }

    /// Sample a tween's current properties
    pub fn sample(&self, id: TweenId) -> Option<TweenProps> {
        self.tweens.get(id).map(Tween::sample)
    }

    /// Stop and remove a tween
    ///
    /// Killing an unknown id is a no-op.
    pub fn kill(&mut self, id: TweenId) {
        if self.tweens.remove(id).is_none() {
            tracing::trace!(?id, "kill of unknown tween ignored");
        }
    }

    /// Remove every tween
    pub fn kill_all(&mut self) {
        self.tweens.clear();
    }

    /// Advance all tweens by delta time
    pub fn tick(&mut self, dt_ms: f32) {
        for tween in self.tweens.values_mut() {
            tween.tick(dt_ms);
        }
    }

    /// Number of tweens the scheduler currently retains
    pub fn active_count(&self) -> usize {
        self.tweens.len()
    }

    /// True when no retained tween is still playing
    pub fn is_idle(&self) -> bool {
        self.tweens.values().all(|t| !t.is_playing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tween::TweenProps;

    #[test]
    fn test_add_starts_and_tick_advances() {
        let mut scheduler = TweenScheduler::new();
        let id = scheduler.add(Tween::new(
            TweenProps::opacity(0.0),
            TweenProps::opacity(1.0),
            100,
        ));

        scheduler.tick(50.0);
        let opacity = scheduler.sample(id).map(|p| p.resolved_opacity());
        assert!(opacity.is_some_and(|o| o > 0.0 && o < 1.0));
    }

    #[test]
    fn test_kill_releases_handle() {
        let mut scheduler = TweenScheduler::new();
        let id = scheduler.add(Tween::new(
            TweenProps::opacity(0.0),
            TweenProps::opacity(1.0),
            100,
        ));
        assert_eq!(scheduler.active_count(), 1);

        scheduler.kill(id);
        assert_eq!(scheduler.active_count(), 0);
        assert!(scheduler.sample(id).is_none());
        // Killing twice must not disturb anything.
        scheduler.kill(id);
    }

    #[test]
    fn test_finished_tweens_are_retained_until_killed() {
        let mut scheduler = TweenScheduler::new();
        scheduler.add(Tween::new(
            TweenProps::opacity(0.0),
            TweenProps::opacity(1.0),
            50,
        ));
        scheduler.tick(100.0);

        assert!(scheduler.is_idle());
        assert_eq!(scheduler.active_count(), 1);
    }
}
