//! Tweens: time-bounded property interpolation
//!
//! A [`Tween`] interpolates a set of visual properties from a start value
//! to an end value over a duration, under an easing curve, optionally
//! delayed, repeated, and reversed on alternate iterations (yoyo).

use crate::easing::Easing;

/// Animatable visual properties
///
/// Unset fields are left untouched on the target node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TweenProps {
    pub opacity: Option<f32>,
    pub scale_x: Option<f32>,
    pub scale_y: Option<f32>,
    pub translate_x: Option<f32>,
    pub translate_y: Option<f32>,
    pub rotation: Option<f32>,
}

impl TweenProps {
    /// Properties with only opacity set
    pub fn opacity(value: f32) -> Self {
        Self {
            opacity: Some(value),
            ..Default::default()
        }
    }

    /// Properties with uniform scale
    pub fn scale(value: f32) -> Self {
        Self {
            scale_x: Some(value),
            scale_y: Some(value),
            ..Default::default()
        }
    }

    /// Properties with translation
    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            translate_x: Some(x),
            translate_y: Some(y),
            ..Default::default()
        }
    }

    pub fn with_opacity(mut self, value: f32) -> Self {
        self.opacity = Some(value);
        self
    }

    pub fn with_scale(mut self, value: f32) -> Self {
        self.scale_x = Some(value);
        self.scale_y = Some(value);
        self
    }

    pub fn with_translate(mut self, x: f32, y: f32) -> Self {
        self.translate_x = Some(x);
        self.translate_y = Some(y);
        self
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = Some(degrees);
        self
    }

    /// Interpolate between two property sets
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            opacity: lerp_opt(self.opacity, other.opacity, t),
            scale_x: lerp_opt(self.scale_x, other.scale_x, t),
            scale_y: lerp_opt(self.scale_y, other.scale_y, t),
            translate_x: lerp_opt(self.translate_x, other.translate_x, t),
            translate_y: lerp_opt(self.translate_y, other.translate_y, t),
            rotation: lerp_opt(self.rotation, other.rotation, t),
        }
    }

    pub fn resolved_opacity(&self) -> f32 {
        self.opacity.unwrap_or(1.0)
    }

    pub fn resolved_scale(&self) -> (f32, f32) {
        (self.scale_x.unwrap_or(1.0), self.scale_y.unwrap_or(1.0))
    }

    pub fn resolved_translate(&self) -> (f32, f32) {
        (
            self.translate_x.unwrap_or(0.0),
            self.translate_y.unwrap_or(0.0),
        )
    }

    pub fn resolved_rotation(&self) -> f32 {
        self.rotation.unwrap_or(0.0)
    }
}

fn lerp_opt(a: Option<f32>, b: Option<f32>, t: f32) -> Option<f32> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a + (b - a) * t),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// Repeat policy for a tween
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Repeat {
    /// Play the given number of iterations (1 = play once)
    #[default]
    Once,
    Count(u32),
    Infinite,
}

/// A from→to interpolation over time
#[derive(Clone, Debug)]
pub struct Tween {
    from: TweenProps,
    to: TweenProps,
    duration_ms: u32,
    delay_ms: u32,
    easing: Easing,
    repeat: Repeat,
    yoyo: bool,

    /// Negative during the delay period
    current_time: f32,
    iteration: u32,
    reversed: bool,
    playing: bool,
}

impl Tween {
    pub fn new(from: TweenProps, to: TweenProps, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(1),
            delay_ms: 0,
            easing: Easing::default(),
            repeat: Repeat::Once,
            yoyo: false,
            current_time: 0.0,
            iteration: 0,
            reversed: false,
            playing: false,
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Reverse direction on alternate iterations
    pub fn yoyo(mut self) -> Self {
        self.yoyo = true;
        self
    }

    /// An infinitely repeating there-and-back tween
    pub fn pingpong(self) -> Self {
        self.repeat(Repeat::Infinite).yoyo()
    }

    pub fn start(&mut self) {
        self.current_time = -(self.delay_ms as f32);
        self.iteration = 0;
        self.reversed = false;
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Progress through the current iteration (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.current_time < 0.0 {
            return 0.0;
        }
        (self.current_time / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    fn iterations_remaining_after(&self, done: u32) -> bool {
        match self.repeat {
            Repeat::Once => done < 1,
            Repeat::Count(n) => done < n,
            Repeat::Infinite => true,
        }
    }

    /// Advance by delta time in milliseconds
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }
        self.current_time += dt_ms;

        while self.current_time >= self.duration_ms as f32 {
            let done = self.iteration + 1;
            if self.iterations_remaining_after(done) {
                self.current_time -= self.duration_ms as f32;
                self.iteration = done;
                if self.yoyo {
                    self.reversed = !self.reversed;
                }
            } else {
                // Settle on the final endpoint; reversed stays as-is so a
                // yoyo with an even count ends back at the start value.
                self.current_time = self.duration_ms as f32;
                self.playing = false;
                break;
            }
        }
    }

    /// Sample the current interpolated properties
    ///
    /// During the delay period this holds the start value.
    pub fn sample(&self) -> TweenProps {
        if self.current_time < 0.0 {
            return self.from;
        }
        let mut progress = self.progress();
        if self.reversed {
            progress = 1.0 - progress;
        }
        let eased = self.easing.apply(progress);
        self.from.lerp(&self.to, eased)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_runs_from_to() {
        let mut tween = Tween::new(TweenProps::opacity(0.0), TweenProps::opacity(1.0), 300);
        tween.start();

        assert!((tween.sample().resolved_opacity() - 0.0).abs() < 0.01);
        tween.tick(150.0);
        let mid = tween.sample().resolved_opacity();
        assert!(mid > 0.0 && mid < 1.0);
        tween.tick(150.0);
        assert!((tween.sample().resolved_opacity() - 1.0).abs() < 0.01);
        assert!(!tween.is_playing());
    }

    #[test]
    fn test_delay_holds_start_value() {
        let mut tween = Tween::new(TweenProps::opacity(0.2), TweenProps::opacity(0.9), 100)
            .delay(200);
        tween.start();
        tween.tick(100.0);
        assert!((tween.sample().resolved_opacity() - 0.2).abs() < 0.01);
        tween.tick(150.0); // 50ms into the active window
        assert!(tween.sample().resolved_opacity() > 0.2);
    }

    #[test]
    fn test_yoyo_reverses_alternate_iterations() {
        let mut tween = Tween::new(
            TweenProps::translate(0.0, 0.0),
            TweenProps::translate(10.0, 0.0),
            100,
        )
        .repeat(Repeat::Infinite)
        .yoyo();
        tween.start();

        tween.tick(100.0); // start of second (reversed) iteration
        tween.tick(50.0);
        let (tx, _) = tween.sample().resolved_translate();
        // Reversed halfway point equals the forward halfway point, but
        // approaching the start; a further tick must decrease it.
        tween.tick(25.0);
        let (tx2, _) = tween.sample().resolved_translate();
        assert!(tx2 < tx, "reversed iteration should move back toward start");
    }

    #[test]
    fn test_finite_yoyo_settles_at_start_value() {
        let mut tween = Tween::new(TweenProps::scale(1.0), TweenProps::scale(2.0), 100)
            .repeat(Repeat::Count(2))
            .yoyo();
        tween.start();
        tween.tick(500.0);

        assert!(!tween.is_playing());
        let (sx, _) = tween.sample().resolved_scale();
        assert!((sx - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_infinite_tween_never_stops() {
        let mut tween = Tween::new(TweenProps::opacity(0.1), TweenProps::opacity(0.5), 50)
            .pingpong();
        tween.start();
        for _ in 0..100 {
            tween.tick(16.0);
        }
        assert!(tween.is_playing());
    }

    #[test]
    fn test_unset_fields_stay_unset() {
        let mut tween = Tween::new(TweenProps::opacity(0.0), TweenProps::opacity(1.0), 100);
        tween.start();
        tween.tick(50.0);
        let props = tween.sample();
        assert!(props.scale_x.is_none());
        assert!(props.translate_x.is_none());
        assert!(props.rotation.is_none());
    }
}
