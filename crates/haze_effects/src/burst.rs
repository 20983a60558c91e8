//! Hover burst
//!
//! A one-shot radial particle burst at a point. The effect listens for
//! pointer enter on its mount scope and spawns a batch per event; batches
//! auto-clean after a fixed lifetime, and overlapping batches each clean
//! up independently.

use crate::arena::EffectArena;
use crate::context::EffectContext;
use crate::effect::Effect;
use haze_animation::{Easing, Tween, TweenId, TweenProps};
use haze_core::{event_types, Color, EventData, NodeId, NodeKind, Point, Size};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::rc::Rc;

/// Tuning for bursts; all values are presentational defaults
#[derive(Clone, Debug)]
pub struct HoverBurstConfig {
    pub particles_per_burst: usize,
    /// Radial travel distance range, px
    pub radius: (f32, f32),
    /// Particle diameter range, px
    pub particle_size: (f32, f32),
    /// Batch lifetime; equals the flight tween duration
    pub duration_ms: u32,
    pub tint: Color,
    pub seed: u64,
}

impl Default for HoverBurstConfig {
    fn default() -> Self {
        Self {
            particles_per_burst: 12,
            radius: (40.0, 90.0),
            particle_size: (3.0, 7.0),
            duration_ms: 600,
            tint: Color::from_hex(0xf59e0b),
            seed: 0,
        }
    }
}

struct BurstLink {
    node: NodeId,
    tween: TweenId,
    origin: Point,
}

struct Batch {
    links: Vec<BurstLink>,
    age_ms: f32,
}

/// Pointer-enter radial bursts, event-scoped
pub struct HoverBurst {
    container: NodeId,
    config: HoverBurstConfig,
    arena: EffectArena,
    batches: Vec<Batch>,
    /// Burst origins queued by the pointer enter handler
    pending: Rc<RefCell<Vec<Point>>>,
    rng: StdRng,
    mounted: bool,
}

impl HoverBurst {
    pub fn new(container: NodeId, config: HoverBurstConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            container,
            config,
            arena: EffectArena::new(),
            batches: Vec::new(),
            pending: Rc::new(RefCell::new(Vec::new())),
            rng,
            mounted: false,
        }
    }

    /// Spawn a burst batch at an origin immediately
    pub fn burst(&mut self, cx: &mut EffectContext<'_>, origin: Point) {
        if !self.mounted {
            return;
        }
        let mut links = Vec::with_capacity(self.config.particles_per_burst);
        let count = self.config.particles_per_burst.max(1);
        for i in 0..count {
            let node = self
                .arena
                .track_node(cx.stage.create_in(self.container, NodeKind::Particle));
            let extent = self
                .rng
                .gen_range(self.config.particle_size.0..=self.config.particle_size.1);
            if let Some(n) = cx.stage.get_mut(node) {
                n.position = origin;
                n.size = Size::new(extent, extent);
                n.color = self.config.tint;
            }

            let jitter = self.rng.gen_range(-0.2..0.2f32);
            let angle = std::f32::consts::TAU * (i as f32 / count as f32) + jitter;
            let distance = self.rng.gen_range(self.config.radius.0..=self.config.radius.1);
            let flight = Tween::new(
                TweenProps::translate(0.0, 0.0).with_opacity(1.0),
                TweenProps::translate(angle.cos() * distance, angle.sin() * distance)
                    .with_opacity(0.0),
                self.config.duration_ms,
            )
            .easing(Easing::EaseOutCubic);
            let tween = self.arena.track_tween(cx.scheduler.add(flight));

            links.push(BurstLink {
                node,
                tween,
                origin,
            });
        }
        self.batches.push(Batch { links, age_ms: 0.0 });
    }

    fn clean_batch(arena: &mut EffectArena, cx: &mut EffectContext<'_>, batch: Batch) {
        for link in batch.links {
            cx.scheduler.kill(link.tween);
            arena.forget_tween(link.tween);
            cx.stage.remove(link.node);
            arena.forget_node(link.node);
        }
    }

    /// Live batch count, for teardown assertions
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }
}

impl Effect for HoverBurst {
    fn mount(&mut self, cx: &mut EffectContext<'_>) {
        if self.mounted {
            return;
        }
        if !cx.stage.contains(self.container) {
            tracing::debug!(container = ?self.container, "burst container missing, skipping mount");
            return;
        }
        let pending = self.pending.clone();
        let handler = cx.events.on(event_types::POINTER_ENTER, move |event| {
            if let EventData::Pointer { x, y } = event.data {
                pending.borrow_mut().push(Point::new(x, y));
            }
        });
        self.arena.track_handler(handler);
        self.mounted = true;
    }

    fn unmount(&mut self, cx: &mut EffectContext<'_>) {
        if !self.mounted {
            return;
        }
        self.arena.release(cx);
        self.batches.clear();
        self.pending.borrow_mut().clear();
        self.mounted = false;
    }

    fn tick(&mut self, cx: &mut EffectContext<'_>, dt_ms: f32) {
        if !self.mounted {
            return;
        }
        let queued: Vec<Point> = self.pending.borrow_mut().drain(..).collect();
        for origin in queued {
            self.burst(cx, origin);
        }

        let lifetime = self.config.duration_ms as f32;
        for batch in &mut self.batches {
            batch.age_ms += dt_ms;
            for link in &batch.links {
                let Some(props) = cx.scheduler.sample(link.tween) else {
                    continue;
                };
                let (dx, dy) = props.resolved_translate();
                if let Some(node) = cx.stage.get_mut(link.node) {
                    node.position = Point::new(link.origin.x + dx, link.origin.y + dy);
                    node.opacity = props.resolved_opacity();
                }
            }
        }

        let mut index = 0;
        while index < self.batches.len() {
            if self.batches[index].age_ms >= lifetime {
                let batch = self.batches.swap_remove(index);
                Self::clean_batch(&mut self.arena, cx, batch);
            } else {
                index += 1;
            }
        }
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }
}
