//! Cursor trail
//!
//! A short chain of dots smoothed toward the pointer. The head dot chases
//! the pointer and each following dot chases its predecessor, with lag
//! growing down the chain. The pointer position arrives through a pointer
//! move listener that the effect removes again on unmount.

use crate::arena::EffectArena;
use crate::context::EffectContext;
use crate::effect::Effect;
use haze_core::{event_types, Color, EventData, NodeId, NodeKind, Point, Size};
use std::cell::Cell;
use std::rc::Rc;

/// Tuning for the trail; all values are presentational defaults
#[derive(Clone, Debug)]
pub struct CursorTrailConfig {
    pub dot_count: usize,
    /// Head dot diameter, px; later dots shrink
    pub dot_size: f32,
    /// Smoothing factor of the head dot per 16 ms frame (0 to 1)
    pub lag: f32,
    /// Multiplier applied to the factor for each further dot
    pub lag_falloff: f32,
    pub tint: Color,
}

impl Default for CursorTrailConfig {
    fn default() -> Self {
        Self {
            dot_count: 8,
            dot_size: 10.0,
            lag: 0.35,
            lag_falloff: 0.85,
            tint: Color::from_hex(0x8b5cf6),
        }
    }
}

/// Pointer-chasing dot chain, pointer-event-scoped
pub struct CursorTrail {
    container: NodeId,
    config: CursorTrailConfig,
    arena: EffectArena,
    dots: Vec<NodeId>,
    /// Written by the pointer move handler, read each tick
    target: Rc<Cell<Point>>,
    mounted: bool,
}

impl CursorTrail {
    pub fn new(container: NodeId, config: CursorTrailConfig) -> Self {
        Self {
            container,
            config,
            arena: EffectArena::new(),
            dots: Vec::new(),
            target: Rc::new(Cell::new(Point::ZERO)),
            mounted: false,
        }
    }
}

impl Effect for CursorTrail {
    fn mount(&mut self, cx: &mut EffectContext<'_>) {
        if self.mounted {
            return;
        }
        if !cx.stage.contains(self.container) {
            tracing::debug!(container = ?self.container, "trail container missing, skipping mount");
            return;
        }
        self.target.set(cx.pointer);

        for i in 0..self.config.dot_count {
            let dot = self
                .arena
                .track_node(cx.stage.create_in(self.container, NodeKind::TrailDot));
            let taper = 1.0 - i as f32 / self.config.dot_count.max(1) as f32;
            if let Some(node) = cx.stage.get_mut(dot) {
                node.position = cx.pointer;
                let extent = self.config.dot_size * taper.max(0.2);
                node.size = Size::new(extent, extent);
                node.opacity = 0.7 * taper;
                node.color = self.config.tint;
            }
            self.dots.push(dot);
        }

        let target = self.target.clone();
        let handler = cx.events.on(event_types::POINTER_MOVE, move |event| {
            if let EventData::Pointer { x, y } = event.data {
                target.set(Point::new(x, y));
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
        self.dots.clear();
        self.mounted = false;
    }

    fn tick(&mut self, cx: &mut EffectContext<'_>, dt_ms: f32) {
        if !self.mounted {
            return;
        }
        // Frame-rate independent smoothing: the configured factor is the
        // per-16ms blend, raised to the actual frame ratio.
        let frames = (dt_ms / 16.0).max(0.0);
        let mut chase = self.target.get();
        let mut factor = self.config.lag;
        for dot in &self.dots {
            let blend = 1.0 - (1.0 - factor.clamp(0.0, 1.0)).powf(frames);
            if let Some(node) = cx.stage.get_mut(*dot) {
                node.position = node.position.lerp(chase, blend);
                chase = node.position;
            }
            factor *= self.config.lag_falloff;
        }
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }
}
