//! Detects when residual spin has died out after auto-rotation stops.

use crate::camera::OrbitControls;

/// Outcome of one stabilizer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StabilizeStep {
    /// Still turning; sample again next frame.
    Moving,
    /// Angle change fell within tolerance.
    Settled,
    /// Poll cap reached before settling.
    GaveUp,
}

/// Per-frame rotation sampler.
///
/// Each [`poll`](Self::poll) forces one control update and compares the
/// rotation angle against the previous sample. The camera counts as
/// stopped once consecutive samples differ by no more than the tolerance.
#[derive(Debug, Clone)]
pub struct Stabilizer {
    last_angle: Option<f32>,
    polls: u32,
    tolerance: f32,
    /// 0 disables the cap.
    max_polls: u32,
}

impl Stabilizer {
    /// New sampler with no previous angle.
    #[must_use]
    pub fn new(tolerance: f32, max_polls: u32) -> Self {
        Self {
            last_angle: None,
            polls: 0,
            tolerance,
            max_polls,
        }
    }

    /// Step the controls once and classify the motion.
    pub fn poll<C: OrbitControls>(&mut self, controls: &mut C) -> StabilizeStep {
        controls.update();
        let angle = controls.rotation_angle();
        self.polls += 1;

        if self
            .last_angle
            .is_some_and(|last| (angle - last).abs() <= self.tolerance)
        {
            return StabilizeStep::Settled;
        }
        self.last_angle = Some(angle);

        if self.max_polls > 0 && self.polls >= self.max_polls {
            StabilizeStep::GaveUp
        } else {
            StabilizeStep::Moving
        }
    }

    /// Last sampled rotation angle.
    #[must_use]
    pub fn last_angle(&self) -> Option<f32> {
        self.last_angle
    }

    /// Number of samples taken so far.
    #[must_use]
    pub fn polls(&self) -> u32 {
        self.polls
    }
}
