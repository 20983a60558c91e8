//! Ambient background field
//!
//! A fixed population of particles and polygon shapes drifting under a
//! container node. Each element gets a randomized position, size, and
//! opacity from the configured ranges, and an infinite yoyo drift tween.
//! Randomness is seeded per instance so headless runs reproduce exactly.

use crate::arena::EffectArena;
use crate::context::EffectContext;
use crate::effect::Effect;
use haze_animation::{Easing, Tween, TweenId, TweenProps};
use haze_core::{Color, NodeId, NodeKind, Point, Size};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Tuning for the ambient field; all values are presentational defaults
#[derive(Clone, Debug)]
pub struct AmbientConfig {
    pub particle_count: usize,
    pub shape_count: usize,
    /// Particle diameter range, px
    pub particle_size: (f32, f32),
    /// Shape extent range, px
    pub shape_size: (f32, f32),
    pub opacity_range: (f32, f32),
    /// Drift amplitude range, px
    pub drift_range: (f32, f32),
    /// Drift half-cycle duration range, ms
    pub drift_duration: (u32, u32),
    pub tint: Color,
    pub seed: u64,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            particle_count: 24,
            shape_count: 6,
            particle_size: (2.0, 6.0),
            shape_size: (16.0, 48.0),
            opacity_range: (0.15, 0.5),
            drift_range: (10.0, 40.0),
            drift_duration: (4000, 9000),
            tint: Color::from_hex(0x8b5cf6),
            seed: 0,
        }
    }
}

struct DriftLink {
    node: NodeId,
    tween: TweenId,
    base: Point,
}

/// Drifting background particles and shapes, mount-scoped
pub struct AmbientBackground {
    container: NodeId,
    config: AmbientConfig,
    arena: EffectArena,
    links: Vec<DriftLink>,
    mounted: bool,
}

impl AmbientBackground {
    pub fn new(container: NodeId, config: AmbientConfig) -> Self {
        Self {
            container,
            config,
            arena: EffectArena::new(),
            links: Vec::new(),
            mounted: false,
        }
    }

    fn spawn(
        &mut self,
        cx: &mut EffectContext<'_>,
        rng: &mut StdRng,
        kind: NodeKind,
        size_range: (f32, f32),
    ) {
        let viewport = cx.viewport;
        let node = self.arena.track_node(cx.stage.create_in(self.container, kind));
        let extent = rng.gen_range(size_range.0..=size_range.1);
        let base = Point::new(
            rng.gen_range(0.0..viewport.width.max(1.0)),
            rng.gen_range(0.0..viewport.height.max(1.0)),
        );
        let opacity = rng.gen_range(self.config.opacity_range.0..=self.config.opacity_range.1);
        if let Some(n) = cx.stage.get_mut(node) {
            n.position = base;
            n.size = Size::new(extent, extent);
            n.opacity = opacity;
            n.color = self.config.tint;
            if kind == NodeKind::Shape {
                n.rotation = rng.gen_range(0.0..360.0);
            }
        }

        let amplitude = rng.gen_range(self.config.drift_range.0..=self.config.drift_range.1);
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let duration = rng.gen_range(self.config.drift_duration.0..=self.config.drift_duration.1);
        let drift = Tween::new(
            TweenProps::translate(0.0, 0.0),
            TweenProps::translate(amplitude * angle.cos(), amplitude * angle.sin()),
            duration,
        )
        .easing(Easing::EaseInOutSine)
        .pingpong();
        let tween = self.arena.track_tween(cx.scheduler.add(drift));

        self.links.push(DriftLink { node, tween, base });
    }
}

impl Effect for AmbientBackground {
    fn mount(&mut self, cx: &mut EffectContext<'_>) {
        if self.mounted {
            return;
        }
        if !cx.stage.contains(self.container) {
            tracing::debug!(container = ?self.container, "ambient container missing, skipping mount");
            return;
        }
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        for _ in 0..self.config.particle_count {
            let size = self.config.particle_size;
            self.spawn(cx, &mut rng, NodeKind::Particle, size);
        }
        for _ in 0..self.config.shape_count {
            let size = self.config.shape_size;
            self.spawn(cx, &mut rng, NodeKind::Shape, size);
        }
        self.mounted = true;
        tracing::debug!(
            particles = self.config.particle_count,
            shapes = self.config.shape_count,
            "ambient background mounted"
        );
    }

    fn unmount(&mut self, cx: &mut EffectContext<'_>) {
        if !self.mounted {
            return;
        }
        self.arena.release(cx);
        self.links.clear();
        self.mounted = false;
    }

    fn tick(&mut self, cx: &mut EffectContext<'_>, _dt_ms: f32) {
        if !self.mounted {
            return;
        }
        for link in &self.links {
            let Some(props) = cx.scheduler.sample(link.tween) else {
                continue;
            };
            let (dx, dy) = props.resolved_translate();
            if let Some(node) = cx.stage.get_mut(link.node) {
                node.position = Point::new(link.base.x + dx, link.base.y + dy);
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

    #[test]
    fn test_mount_creates_exact_population() {
        let (mut stage, mut scheduler, mut events, mut scroll) = harness();
        let container = stage.create_in(stage.root(), haze_core::NodeKind::Container);
        let config = AmbientConfig {
            particle_count: 10,
            shape_count: 3,
            ..Default::default()
        };
        let mut ambient = AmbientBackground::new(container, config);

        ambient.mount(&mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll));
        assert_eq!(stage.child_count(container), 13);
        assert_eq!(scheduler.active_count(), 13);
    }

    #[test]
    fn test_second_mount_is_noop() {
        let (mut stage, mut scheduler, mut events, mut scroll) = harness();
        let container = stage.create_in(stage.root(), haze_core::NodeKind::Container);
        let mut ambient = AmbientBackground::new(container, AmbientConfig::default());

        ambient.mount(&mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll));
        let count = stage.child_count(container);
        ambient.mount(&mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll));
        assert_eq!(stage.child_count(container), count);
    }

    #[test]
    fn test_missing_container_skips_mount() {
        let (mut stage, mut scheduler, mut events, mut scroll) = harness();
        let container = stage.create(haze_core::NodeKind::Container);
        stage.remove(container);
        let mut ambient = AmbientBackground::new(container, AmbientConfig::default());

        ambient.mount(&mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll));
        assert!(!ambient.is_mounted());
        assert_eq!(scheduler.active_count(), 0);
    }

    #[test]
    fn test_tick_moves_nodes_from_base() {
        let (mut stage, mut scheduler, mut events, mut scroll) = harness();
        let container = stage.create_in(stage.root(), haze_core::NodeKind::Container);
        let config = AmbientConfig {
            particle_count: 4,
            shape_count: 0,
            ..Default::default()
        };
        let mut ambient = AmbientBackground::new(container, config);
        ambient.mount(&mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll));

        let before: Vec<Point> = stage
            .children(container)
            .iter()
            .filter_map(|id| stage.get(*id).map(|n| n.position))
            .collect();

        scheduler.tick(2000.0);
        ambient.tick(
            &mut cx(&mut stage, &mut scheduler, &mut events, &mut scroll),
            2000.0,
        );

        let after: Vec<Point> = stage
            .children(container)
            .iter()
            .filter_map(|id| stage.get(*id).map(|n| n.position))
            .collect();
        assert!(before.iter().zip(&after).any(|(a, b)| a != b));
    }
}
