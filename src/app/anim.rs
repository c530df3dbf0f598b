//! Progress bar animation
//!
//! An `AnimatedGauge` eases its displayed value from wherever it
//! currently is toward a target over a fixed duration. It is driven by
//! tick events from the main loop and knows nothing about rendering, so
//! it can be unit tested on its own. Retargeting while an animation is
//! in flight restarts the easing from the currently displayed value;
//! there are no completion callbacks and no cancellation.

use std::time::Duration;

/// Fixed animation duration, matching the one-second ease of the
/// original progress bar
const ANIMATION_DURATION: Duration = Duration::from_millis(1000);

/// Interpolation state machine for one progress gauge
#[derive(Debug, Clone)]
pub struct AnimatedGauge {
    start: f64,
    target: f64,
    elapsed: Duration,
    duration: Duration,
}

impl AnimatedGauge {
    /// Create a gauge already settled at the given value
    pub fn new(initial: f64) -> Self {
        Self {
            start: initial,
            target: initial,
            elapsed: ANIMATION_DURATION,
            duration: ANIMATION_DURATION,
        }
    }

    /// The value the gauge is easing toward
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Begin easing toward a new target from the currently displayed
    /// value. A target equal to the current one does not restart the
    /// animation.
    pub fn set_target(&mut self, target: f64) {
        if (target - self.target).abs() < f64::EPSILON {
            return;
        }
        self.start = self.value();
        self.target = target;
        self.elapsed = Duration::ZERO;
    }

    /// Advance the animation clock
    pub fn tick(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    /// Whether the gauge has reached its target
    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Currently displayed value
    pub fn value(&self) -> f64 {
        if self.is_settled() {
            return self.target;
        }
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.start + (self.target - self.start) * ease_in_out(t)
    }
}

impl Default for AnimatedGauge {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Cubic ease-in-out over t in [0, 1]
fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
