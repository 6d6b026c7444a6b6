//! Shared utilities: easing curves for camera ramps and host frame pacing.

pub mod easing;
pub mod frame_timing;
