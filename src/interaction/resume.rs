//! Eased ramp of auto-rotation speed from zero back to the baseline.

use std::time::Duration;

use crate::camera::OrbitControls;
use crate::util::easing::EasingFunction;

/// Outcome of one ramp step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RampStep {
    /// Progress below 1; step again next frame.
    Running,
    /// Speed has reached the baseline exactly.
    Finished,
}

/// Time-based auto-rotation ramp.
#[derive(Debug, Clone)]
pub struct ResumeRamp {
    started_at: Duration,
    duration: Duration,
    target_speed: f32,
    easing: EasingFunction,
}

impl ResumeRamp {
    /// Ramp starting at `started_at` that reaches `target_speed` after
    /// `duration`.
    #[must_use]
    pub fn new(
        started_at: Duration,
        duration: Duration,
        target_speed: f32,
        easing: EasingFunction,
    ) -> Self {
        Self {
            started_at,
            duration,
            target_speed,
            easing,
        }
    }

    /// Linear progress in `[0, 1]` at `now`.
    #[must_use]
    pub fn progress(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Auto-rotation speed the ramp prescribes at `now`.
    #[must_use]
    pub fn speed_at(&self, now: Duration) -> f32 {
        self.target_speed * self.easing.evaluate(self.progress(now))
    }

    /// Write the ramp's speed for `now` into the controls and step them.
    pub fn apply<C: OrbitControls>(
        &self,
        controls: &mut C,
        now: Duration,
    ) -> RampStep {
        let progress = self.progress(now);
        controls.set_auto_rotate(true);
        controls.set_auto_rotate_speed(
            self.target_speed * self.easing.evaluate(progress),
        );
        controls.update();

        if progress < 1.0 {
            RampStep::Running
        } else {
            RampStep::Finished
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::stabilizer::tests::ScriptedControls;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn ramp(target: f32) -> ResumeRamp {
        ResumeRamp::new(ms(200), ms(1000), target, EasingFunction::CubicInOut)
    }

    #[test]
    fn midpoint_is_half_speed() {
        assert_eq!(ramp(1.0).speed_at(ms(700)), 0.5);
        assert_eq!(ramp(0.5).speed_at(ms(700)), 0.25);
    }

    #[test]
    fn starts_from_zero_and_ends_exactly_on_target() {
        let r = ramp(0.8);
        assert_eq!(r.speed_at(ms(200)), 0.0);
        assert_eq!(r.speed_at(ms(1200)), 0.8);
        assert_eq!(r.speed_at(ms(5000)), 0.8);
    }

    #[test]
    fn time_before_start_clamps_to_zero() {
        assert_eq!(ramp(1.0).progress(ms(0)), 0.0);
    }

    #[test]
    fn apply_enables_auto_rotate_and_steps() {
        let mut controls = ScriptedControls::new(&[]);
        controls.auto_rotate = false;
        controls.speed = 0.0;

        let r = ramp(1.0);
        assert_eq!(r.apply(&mut controls, ms(450)), RampStep::Running);
        assert!(controls.auto_rotate);
        assert!(controls.speed > 0.0 && controls.speed < 0.5);
        assert_eq!(controls.updates, 1);

        assert_eq!(r.apply(&mut controls, ms(1200)), RampStep::Finished);
        assert_eq!(controls.speed, 1.0);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let r = ResumeRamp::new(ms(0), ms(0), 2.0, EasingFunction::Linear);
        let mut controls = ScriptedControls::new(&[]);
        assert_eq!(r.apply(&mut controls, ms(0)), RampStep::Finished);
        assert_eq!(controls.speed, 2.0);
    }
}
