//! Smoke transition
//!
//! A staged cover used between page swaps. Veil puffs scale in over the
//! content (Obscure), scatter outward (Disperse), thin to nothing (Fade),
//! and the incoming content's opacity rises back up (Reveal). All four
//! phases are sequenced on a single timeline; veils are rebuilt per play
//! and removed when the timeline completes.

use crate::arena::EffectArena;
use crate::context::EffectContext;
use crate::effect::Effect;
use haze_animation::{Easing, Timeline, TimelineEntryId, Tween, TweenProps};
use haze_core::{Color, NodeId, NodeKind, Point, Size};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Tuning for the transition; all values are presentational defaults
#[derive(Clone, Debug)]
pub struct SmokeTransitionConfig {
    pub veil_count: usize,
    pub obscure_ms: u32,
    pub disperse_ms: u32,
    pub fade_ms: u32,
    pub reveal_ms: u32,
    /// Veil puff diameter range, px
    pub veil_size: (f32, f32),
    /// Scatter travel distance range, px
    pub scatter: (f32, f32),
    /// Random per-veil start delay cap, ms
    pub delay_jitter_ms: u32,
    pub tint: Color,
    pub seed: u64,
}

impl Default for SmokeTransitionConfig {
    fn default() -> Self {
        Self {
            veil_count: 16,
            obscure_ms: 400,
            disperse_ms: 500,
            fade_ms: 300,
            reveal_ms: 400,
            veil_size: (80.0, 180.0),
            scatter: (120.0, 320.0),
            delay_jitter_ms: 120,
            tint: Color::from_hex(0x1f2937),
            seed: 0,
        }
    }
}

/// Which stage of the cover is active
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SmokePhase {
    Idle,
    Obscure,
    Disperse,
    Fade,
    Reveal,
}

struct VeilLink {
    node: NodeId,
    base: Point,
    grow: TimelineEntryId,
    scatter: TimelineEntryId,
    thin: TimelineEntryId,
}

/// Staged veil cover over a content node
pub struct SmokeTransition {
    content: NodeId,
    config: SmokeTransitionConfig,
    arena: EffectArena,
    veils: Vec<VeilLink>,
    timeline: Timeline,
    hide_entry: Option<TimelineEntryId>,
    reveal_entry: Option<TimelineEntryId>,
    elapsed_ms: f32,
    rng: StdRng,
    mounted: bool,
}

impl SmokeTransition {
    pub fn new(content: NodeId, config: SmokeTransitionConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            content,
            config,
            arena: EffectArena::new(),
            veils: Vec::new(),
            timeline: Timeline::new(),
            hide_entry: None,
            reveal_entry: None,
            elapsed_ms: 0.0,
            rng,
            mounted: false,
        }
    }

    /// Start the cover, rebuilding veils and the phase timeline
    pub fn play(&mut self, cx: &mut EffectContext<'_>) {
        if !self.mounted {
            return;
        }
        self.clear_veils(cx);

        let cfg = self.config.clone();
        let mut timeline = Timeline::new();
        let disperse_at = cfg.obscure_ms;
        let fade_at = cfg.obscure_ms + cfg.disperse_ms;
        let reveal_at = fade_at + cfg.fade_ms;

        let center = Point::new(cx.viewport.width / 2.0, cx.viewport.height / 2.0);
        let spread_x = cx.viewport.width / 2.0;
        let spread_y = cx.viewport.height / 2.0;

        for _ in 0..cfg.veil_count {
            let node = self
                .arena
                .track_node(cx.stage.create_in(cx.stage.root(), NodeKind::Veil));
            let extent = self.rng.gen_range(cfg.veil_size.0..=cfg.veil_size.1);
            let base = Point::new(
                center.x + self.rng.gen_range(-spread_x..=spread_x),
                center.y + self.rng.gen_range(-spread_y..=spread_y),
            );
            if let Some(n) = cx.stage.get_mut(node) {
                n.position = base;
                n.size = Size::new(extent, extent);
                n.opacity = 0.0;
                n.color = cfg.tint;
            }

            let delay = self.rng.gen_range(0..=cfg.delay_jitter_ms);
            let grow = timeline.add(
                0,
                Tween::new(
                    TweenProps::scale(0.2).with_opacity(0.0),
                    TweenProps::scale(1.0).with_opacity(0.85),
                    cfg.obscure_ms,
                )
                .delay(delay)
                .easing(Easing::EaseOutCubic),
            );

            let angle = self.rng.gen_range(0.0..std::f32::consts::TAU);
            let distance = self.rng.gen_range(cfg.scatter.0..=cfg.scatter.1);
            let scatter = timeline.add(
                disperse_at,
                Tween::new(
                    TweenProps::translate(0.0, 0.0),
                    TweenProps::translate(angle.cos() * distance, angle.sin() * distance),
                    cfg.disperse_ms,
                )
                .easing(Easing::EaseInOutSine),
            );

            let thin = timeline.add(
                fade_at,
                Tween::new(
                    TweenProps::opacity(0.85),
                    TweenProps::opacity(0.0),
                    cfg.fade_ms,
                )
                .easing(Easing::EaseOutQuad),
            );

            self.veils.push(VeilLink {
                node,
                base,
                grow,
                scatter,
                thin,
            });
        }

        self.hide_entry = Some(timeline.add(
            0,
            Tween::new(
                TweenProps::opacity(1.0),
                TweenProps::opacity(0.0),
                cfg.obscure_ms,
            )
            .easing(Easing::EaseInQuad),
        ));
        self.reveal_entry = Some(timeline.add(
            reveal_at,
            Tween::new(
                TweenProps::opacity(0.0),
                TweenProps::opacity(1.0),
                cfg.reveal_ms,
            )
            .easing(Easing::EaseOutQuad),
        ));

        timeline.start();
        self.timeline = timeline;
        self.elapsed_ms = 0.0;
    }

    pub fn is_playing(&self) -> bool {
        self.timeline.is_playing()
    }

    /// The phase the cover is currently in
    pub fn phase(&self) -> SmokePhase {
        if !self.timeline.is_playing() {
            return SmokePhase::Idle;
        }
        let cfg = &self.config;
        let t = self.elapsed_ms;
        if t < cfg.obscure_ms as f32 {
            SmokePhase::Obscure
        } else if t < (cfg.obscure_ms + cfg.disperse_ms) as f32 {
            SmokePhase::Disperse
        } else if t < (cfg.obscure_ms + cfg.disperse_ms + cfg.fade_ms) as f32 {
            SmokePhase::Fade
        } else {
            SmokePhase::Reveal
        }
    }

    fn clear_veils(&mut self, cx: &mut EffectContext<'_>) {
        for link in self.veils.drain(..) {
            cx.stage.remove(link.node);
            self.arena.forget_node(link.node);
        }
        self.timeline.stop();
        self.hide_entry = None;
        self.reveal_entry = None;
    }
}

impl Effect for SmokeTransition {
    fn mount(&mut self, cx: &mut EffectContext<'_>) {
        if self.mounted {
            return;
        }
        if !cx.stage.contains(self.content) {
            tracing::debug!(content = ?self.content, "smoke content missing, skipping mount");
            return;
        }
        self.mounted = true;
    }

    fn unmount(&mut self, cx: &mut EffectContext<'_>) {
        if !self.mounted {
            return;
        }
        self.clear_veils(cx);
        self.arena.release(cx);
        if let Some(node) = cx.stage.get_mut(self.content) {
            node.opacity = 1.0;
        }
        self.mounted = false;
    }

    fn tick(&mut self, cx: &mut EffectContext<'_>, dt_ms: f32) {
        if !self.mounted {
            return;
        }
        let was_playing = self.timeline.is_playing();
        if !was_playing {
            return;
        }
        self.timeline.tick(dt_ms);
        self.elapsed_ms += dt_ms;

        for link in &self.veils {
            let grow = self.timeline.sample(link.grow).unwrap_or_default();
            let scatter = self.timeline.sample(link.scatter).unwrap_or_default();
            let thin = self.timeline.sample(link.thin).unwrap_or_default();
            let (dx, dy) = scatter.resolved_translate();
            if let Some(node) = cx.stage.get_mut(link.node) {
                node.position = Point::new(link.base.x + dx, link.base.y + dy);
                let (sx, _) = grow.resolved_scale();
                node.scale = haze_core::Vec2::new(sx, sx);
                // Growth raises opacity to its peak, thinning lowers it
                // from that peak; the lesser of the two is always current.
                node.opacity = grow.resolved_opacity().min(thin.resolved_opacity());
            }
        }

        let content_opacity = match (self.hide_entry, self.reveal_entry) {
            (Some(hide), Some(reveal)) => {
                let hidden = self
                    .timeline
                    .sample(hide)
                    .map(|p| p.resolved_opacity())
                    .unwrap_or(1.0);
                let revealed = self
                    .timeline
                    .sample(reveal)
                    .map(|p| p.resolved_opacity())
                    .unwrap_or(0.0);
                hidden.max(revealed)
            }
            _ => 1.0,
        };
        if let Some(node) = cx.stage.get_mut(self.content) {
            node.opacity = content_opacity;
        }

        if !self.timeline.is_playing() {
            self.clear_veils(cx);
            if let Some(node) = cx.stage.get_mut(self.content) {
                node.opacity = 1.0;
            }
        }
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haze_animation::TweenScheduler;
    use haze_core::{EventDispatcher, Stage};
    use haze_scroll::ScrollDispatcher;

    fn harness() -> (Stage, TweenScheduler, EventDispatcher, ScrollDispatcher) {
        (
            Stage::new(),
            TweenScheduler::new(),
            EventDispatcher::new(),
            ScrollDispatcher::new(600.0),
        )
    }

    fn cx<'a>(
        stage: &'a mut Stage,
        scheduler: &'a mut TweenScheduler,
        events: &'a mut EventDispatcher,
        scroll: &'a mut ScrollDispatcher,
    ) -> EffectContext<'a> {
        EffectContext {
            stage,
            scheduler,
            events,
            scroll,
            viewport: Size::new(800.0, 600.0),
            pointer: Point::ZERO,
        }
    }

    fn content(stage: &mut Stage) -> NodeId {
        let root = stage.root();
        stage.create_in(root, NodeKind::Section)
    }

    #[test]
    fn test_play_builds_veils_and_runs_phases() {
        let (mut stage, mut scheduler, mut events, mut scroll) = harness();
        let target = content(&mut stage);
        let mut smoke = SmokeTransition::new(target, SmokeTransitionConfig::default());
        smoke.mount(&mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll));
        smoke.play(&mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll));

        assert_eq!(stage.count_kind(NodeKind::Veil), 16);
        smoke.tick(
            &mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll),
            100.0,
        );
        assert_eq!(smoke.phase(), SmokePhase::Obscure);

        smoke.tick(
            &mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll),
            500.0,
        );
        assert_eq!(smoke.phase(), SmokePhase::Disperse);

        smoke.tick(
            &mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll),
            400.0,
        );
        assert_eq!(smoke.phase(), SmokePhase::Fade);
    }

    #[test]
    fn test_content_hides_then_returns() {
        let (mut stage, mut scheduler, mut events, mut scroll) = harness();
        let target = content(&mut stage);
        let mut smoke = SmokeTransition::new(target, SmokeTransitionConfig::default());
        smoke.mount(&mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll));
        smoke.play(&mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll));

        smoke.tick(
            &mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll),
            500.0,
        );
        let hidden = stage.get(target).map(|n| n.opacity);
        assert!(hidden.is_some_and(|o| o < 0.05));

        // Run well past the full timeline.
        smoke.tick(
            &mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll),
            3000.0,
        );
        let restored = stage.get(target).map(|n| n.opacity);
        assert!(restored.is_some_and(|o| (o - 1.0).abs() < 0.01));
    }

    #[test]
    fn test_content_stays_hidden_until_reveal_phase() {
        let (mut stage, mut scheduler, mut events, mut scroll) = harness();
        let target = content(&mut stage);
        let mut smoke = SmokeTransition::new(target, SmokeTransitionConfig::default());
        smoke.mount(&mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll));
        smoke.play(&mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll));

        // Mid-Fade (obscure 400 + disperse 500 + 200 of fade 300): the
        // content has not begun to return yet.
        smoke.tick(
            &mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll),
            1100.0,
        );
        assert_eq!(smoke.phase(), SmokePhase::Fade);
        let opacity = stage.get(target).map(|n| n.opacity);
        assert!(opacity.is_some_and(|o| o < 0.05));

        // Mid-Reveal: the content is on its way back up.
        smoke.tick(
            &mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll),
            300.0,
        );
        assert_eq!(smoke.phase(), SmokePhase::Reveal);
        let opacity = stage.get(target).map(|n| n.opacity);
        assert!(opacity.is_some_and(|o| o > 0.05 && o < 1.0));
    }

    #[test]
    fn test_completion_removes_all_veils() {
        let (mut stage, mut scheduler, mut events, mut scroll) = harness();
        let target = content(&mut stage);
        let mut smoke = SmokeTransition::new(target, SmokeTransitionConfig::default());
        smoke.mount(&mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll));
        smoke.play(&mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll));

        smoke.tick(
            &mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll),
            10_000.0,
        );
        assert_eq!(stage.count_kind(NodeKind::Veil), 0);
        assert!(!smoke.is_playing());
    }

    #[test]
    fn test_unmount_mid_play_restores_content() {
        let (mut stage, mut scheduler, mut events, mut scroll) = harness();
        let target = content(&mut stage);
        let mut smoke = SmokeTransition::new(target, SmokeTransitionConfig::default());
        smoke.mount(&mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll));
        smoke.play(&mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll));
        smoke.tick(
            &mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll),
            300.0,
        );

        smoke.unmount(&mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll));
        assert_eq!(stage.count_kind(NodeKind::Veil), 0);
        let opacity = stage.get(target).map(|n| n.opacity);
        assert!(opacity.is_some_and(|o| (o - 1.0).abs() < 0.01));
    }

    #[test]
    fn test_replay_rebuilds_fresh_veils() {
        let (mut stage, mut scheduler, mut events, mut scroll) = harness();
        let target = content(&mut stage);
        let mut smoke = SmokeTransition::new(target, SmokeTransitionConfig::default());
        smoke.mount(&mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll));

        smoke.play(&mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll));
        smoke.play(&mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll));
        assert_eq!(stage.count_kind(NodeKind::Veil), 16);
    }
}
