//! Animation timing.
//!
//! Animations are plain CSS keyframes declared in the global stylesheet.
//! The values here pick the keyframes, duration, delay and repeat count for
//! one element and render them as an inline `animation` declaration.

use std::time::Duration;

/// CSS timing function
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Repeat {
    #[default]
    Once,
    Forever,
}

impl Repeat {
    pub fn css(&self) -> &'static str {
        match self {
            Repeat::Once => "1",
            Repeat::Forever => "infinite",
        }
    }
}

/// Timing for a single keyframe animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Motion {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
    pub repeat: Repeat,
}

impl Motion {
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            easing: Easing::EaseOut,
            repeat: Repeat::Once,
        }
    }

    pub const fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub const fn forever(mut self) -> Self {
        self.repeat = Repeat::Forever;
        self
    }

    /// `animation` shorthand running `keyframes` with this timing.
    ///
    /// Fill mode is always `both` so delayed entrances hold their first frame.
    pub fn css(&self, keyframes: &str) -> String {
        format!(
            "animation: {} {}ms {} {}ms {} both;",
            keyframes,
            self.duration.as_millis(),
            self.easing.css(),
            self.delay.as_millis(),
            self.repeat.css()
        )
    }
}

/// Delay for the `index`-th element of a cascade.
pub fn stagger(step: Duration, index: usize) -> Duration {
    step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

/// An endless float-and-tilt loop.
///
/// All drift loops share the `drift` keyframes; each element supplies its
/// own peak offset and tilt through CSS variables, so two badges with
/// different periods or delays fall out of phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriftLoop {
    /// Vertical offset at the midpoint of the loop, negative is up
    pub lift_px: i32,
    /// Rotation at the midpoint of the loop
    pub tilt_deg: i32,
    pub motion: Motion,
}

impl DriftLoop {
    pub const KEYFRAMES: &'static str = "drift";

    pub const fn new(lift_px: i32, tilt_deg: i32, period: Duration) -> Self {
        Self {
            lift_px,
            tilt_deg,
            motion: Motion::new(period).with_easing(Easing::EaseInOut).forever(),
        }
    }

    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.motion = self.motion.with_delay(delay);
        self
    }

    pub fn style(&self) -> String {
        format!(
            "--drift-lift: {}px; --drift-tilt: {}deg; {}",
            self.lift_px,
            self.tilt_deg,
            self.motion.css(Self::KEYFRAMES)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_shorthand() {
        let ring = Motion::millis(20_000).with_easing(Easing::Linear).forever();
        assert_eq!(ring.css("spin"), "animation: spin 20000ms linear 0ms infinite both;");

        let bar = Motion::millis(2_000).with_delay(Duration::from_secs(1));
        assert_eq!(bar.css("fill"), "animation: fill 2000ms ease-out 1000ms 1 both;");
    }

    #[test]
    fn defaults() {
        let m = Motion::millis(300);
        assert_eq!(m.delay, Duration::ZERO);
        assert_eq!(m.easing, Easing::EaseOut);
        assert_eq!(m.repeat, Repeat::Once);
    }

    #[test]
    fn stagger_is_linear_in_index() {
        let step = Duration::from_millis(200);
        assert_eq!(stagger(step, 0), Duration::ZERO);
        assert_eq!(stagger(step, 3), Duration::from_millis(600));
    }

    #[test]
    fn drift_style_carries_offsets() {
        let badge = DriftLoop::new(20, -5, Duration::from_secs(5)).with_delay(Duration::from_secs(1));
        assert_eq!(
            badge.style(),
            "--drift-lift: 20px; --drift-tilt: -5deg; animation: drift 5000ms ease-in-out 1000ms infinite both;"
        );
    }
}
