use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

/// Hover transition timings and tolerances.
///
/// Durations are stored as whole milliseconds so presets stay readable;
/// use the accessor methods to get [`Duration`]s.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Interaction", inline)]
#[serde(default)]
pub struct InteractionOptions {
    /// Damping applied while a point is hovered, for a crisper stop.
    #[schemars(title = "Hover Damping", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub hover_damping: f32,
    /// Delay between leaving a point and the start of the resume ramp.
    #[schemars(title = "Settle Delay (ms)", range(min = 0, max = 2000))]
    pub settle_delay_ms: u64,
    /// Length of the resume ramp from zero back to the baseline speed.
    #[schemars(title = "Resume Duration (ms)", range(min = 0, max = 5000))]
    pub resume_duration_ms: u64,
    /// Curve used by the resume ramp.
    #[schemars(skip)]
    pub resume_easing: EasingFunction,
    /// Per-frame angle change (radians) under which the camera counts as
    /// stopped.
    #[schemars(skip)]
    pub stabilize_tolerance: f32,
    /// How long pointer control stays disabled once the camera has stopped.
    #[schemars(skip)]
    pub lock_cooldown_ms: u64,
    /// Upper bound on stabilizer polls before locking regardless.
    #[schemars(skip)]
    pub max_stabilize_polls: u32,
    /// Delay before a hovered point's detail panel appears.
    #[schemars(title = "Show Delay (ms)", range(min = 0, max = 1000))]
    pub show_delay_ms: u64,
    /// Delay before the detail panel hides after leaving a point.
    #[schemars(title = "Hide Delay (ms)", range(min = 0, max = 1000))]
    pub hide_delay_ms: u64,
    /// Screen-space hover radius around a point, in physical pixels.
    #[schemars(title = "Pick Radius (px)", range(min = 1.0, max = 64.0), extend("step" = 1.0))]
    pub pick_radius_px: f32,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            hover_damping: 0.05,
            settle_delay_ms: 200,
            resume_duration_ms: 1000,
            resume_easing: EasingFunction::CubicInOut,
            stabilize_tolerance: 1e-5,
            lock_cooldown_ms: 50,
            max_stabilize_polls: 600,
            show_delay_ms: 150,
            hide_delay_ms: 250,
            pick_radius_px: 12.0,
        }
    }
}

impl InteractionOptions {
    /// Delay before the resume ramp starts.
    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Resume ramp duration.
    #[must_use]
    pub fn resume_duration(&self) -> Duration {
        Duration::from_millis(self.resume_duration_ms)
    }

    /// Pointer-control cooldown after the camera locks.
    #[must_use]
    pub fn lock_cooldown(&self) -> Duration {
        Duration::from_millis(self.lock_cooldown_ms)
    }

    /// Tooltip show delay.
    #[must_use]
    pub fn show_delay(&self) -> Duration {
        Duration::from_millis(self.show_delay_ms)
    }

    /// Tooltip hide delay.
    #[must_use]
    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }
}
