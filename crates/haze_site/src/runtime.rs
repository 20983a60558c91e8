//! Deterministic headless frame loop

use anyhow::{bail, Result};

/// Configuration for a headless run
#[derive(Debug, Clone, Copy)]
pub struct HeadlessRunConfig {
    /// Logical viewport width
    pub width: u32,
    /// Logical viewport height
    pub height: u32,
    /// Number of frames to execute
    pub max_frames: u32,
    /// Logical milliseconds between frames
    pub tick_ms: u64,
}

impl Default for HeadlessRunConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            max_frames: 120,
            tick_ms: 16,
        }
    }
}

/// Frame context passed to the per-frame callback
#[derive(Debug, Clone, Copy)]
pub struct HeadlessContext {
    pub frame_index: u32,
    pub width: u32,
    pub height: u32,
    pub elapsed_ms: u64,
}

/// Fixed-budget frame driver for demos and diagnostics
pub struct HeadlessRuntime;

impl HeadlessRuntime {
    /// Run a fixed frame budget, invoking the callback once per frame
    pub fn run<F>(cfg: HeadlessRunConfig, mut on_frame: F) -> Result<()>
    where
        F: FnMut(&HeadlessContext),
    {
        if cfg.width == 0 || cfg.height == 0 {
            bail!("headless dimensions must be non-zero");
        }
        if cfg.max_frames == 0 {
            bail!("headless max_frames must be > 0");
        }
        if cfg.tick_ms == 0 {
            bail!("headless tick_ms must be > 0");
        }

        for frame in 0..cfg.max_frames {
            let elapsed_ms = cfg.tick_ms.saturating_mul(frame as u64);
            on_frame(&HeadlessContext {
                frame_index: frame,
                width: cfg.width,
                height: cfg.height,
                elapsed_ms,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_exact_frame_count() {
        let mut frames = Vec::new();
        let cfg = HeadlessRunConfig {
            max_frames: 5,
            tick_ms: 16,
            ..Default::default()
        };
        HeadlessRuntime::run(cfg, |cx| frames.push((cx.frame_index, cx.elapsed_ms))).unwrap();
        assert_eq!(frames.len(), 5);
        assert_eq!(frames[4], (4, 64));
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let cfg = HeadlessRunConfig {
            width: 0,
            ..Default::default()
        };
        assert!(HeadlessRuntime::run(cfg, |_| {}).is_err());
    }

    #[test]
    fn test_rejects_zero_frames() {
        let cfg = HeadlessRunConfig {
            max_frames: 0,
            ..Default::default()
        };
        assert!(HeadlessRuntime::run(cfg, |_| {}).is_err());
    }
}
