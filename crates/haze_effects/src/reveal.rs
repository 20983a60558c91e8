//! Section reveal
//!
//! Hides a section node at mount (translated down, transparent) and plays
//! a slide-and-fade tween when the section crosses the viewport threshold.
//! `Once` reveals stay revealed; the replayable variant re-hides and plays
//! again on every qualifying crossing.
//!
//! The section node belongs to the page, not the effect, so unmounting
//! restores its resting position and opacity instead of removing it.

use crate::arena::EffectArena;
use crate::context::EffectContext;
use crate::effect::Effect;
use haze_animation::{Easing, Tween, TweenId, TweenProps};
use haze_core::{NodeId, Point};
use haze_scroll::{FirePolicy, ViewportObserver};
use std::cell::Cell;
use std::rc::Rc;

/// Tuning for reveals; all values are presentational defaults
#[derive(Clone, Debug)]
pub struct SectionRevealConfig {
    /// Viewport-height fraction the section top must rise above
    pub threshold: f32,
    pub policy: FirePolicy,
    /// Slide-in distance, px
    pub distance_px: f32,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Default for SectionRevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.8,
            policy: FirePolicy::Once,
            distance_px: 40.0,
            duration_ms: 600,
            easing: Easing::EaseOutCubic,
        }
    }
}

/// Scroll-triggered slide and fade for one section
pub struct SectionReveal {
    section: NodeId,
    config: SectionRevealConfig,
    arena: EffectArena,
    base: Point,
    /// Incremented by the trigger callback, consumed in tick
    fires: Rc<Cell<u32>>,
    consumed: u32,
    current: Option<TweenId>,
    mounted: bool,
}

impl SectionReveal {
    pub fn new(section: NodeId, config: SectionRevealConfig) -> Self {
        Self {
            section,
            config,
            arena: EffectArena::new(),
            base: Point::ZERO,
            fires: Rc::new(Cell::new(0)),
            consumed: 0,
            current: None,
            mounted: false,
        }
    }

    fn hidden_props(&self) -> TweenProps {
        TweenProps::translate(0.0, self.config.distance_px).with_opacity(0.0)
    }

    fn apply(&self, cx: &mut EffectContext<'_>, props: TweenProps) {
        let (dx, dy) = props.resolved_translate();
        if let Some(node) = cx.stage.get_mut(self.section) {
            node.position = Point::new(self.base.x + dx, self.base.y + dy);
            node.opacity = props.resolved_opacity();
        }
    }

    fn play(&mut self, cx: &mut EffectContext<'_>) {
        if let Some(previous) = self.current.take() {
            cx.scheduler.kill(previous);
            self.arena.forget_tween(previous);
        }
        let tween = Tween::new(
            self.hidden_props(),
            TweenProps::translate(0.0, 0.0).with_opacity(1.0),
            self.config.duration_ms,
        )
        .easing(self.config.easing);
        let id = self.arena.track_tween(cx.scheduler.add(tween));
        self.current = Some(id);
    }
}

impl Effect for SectionReveal {
    fn mount(&mut self, cx: &mut EffectContext<'_>) {
        if self.mounted {
            return;
        }
        let Some(node) = cx.stage.get(self.section) else {
            tracing::debug!(section = ?self.section, "reveal section missing, skipping mount");
            return;
        };
        self.base = node.position;
        self.fires.set(0);
        self.consumed = 0;
        self.apply(cx, self.hidden_props());

        let fires = self.fires.clone();
        let trigger = cx.scroll.register(
            self.section,
            self.config.threshold,
            self.config.policy,
            Box::new(move || fires.set(fires.get() + 1)),
        );
        self.arena.track_trigger(trigger);
        self.mounted = true;
    }

    fn unmount(&mut self, cx: &mut EffectContext<'_>) {
        if !self.mounted {
            return;
        }
        self.arena.release(cx);
        self.current = None;
        // Leave the page-owned node at rest, fully visible.
        if let Some(node) = cx.stage.get_mut(self.section) {
            node.position = self.base;
            node.opacity = 1.0;
        }
        self.mounted = false;
    }

    fn tick(&mut self, cx: &mut EffectContext<'_>, _dt_ms: f32) {
        if !self.mounted {
            return;
        }
        while self.consumed < self.fires.get() {
            self.consumed += 1;
            self.play(cx);
        }
        if let Some(id) = self.current {
            if let Some(props) = cx.scheduler.sample(id) {
                self.apply(cx, props);
            }
        }
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }
}
