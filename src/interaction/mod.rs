//! Hover interaction: camera freeze/resume transitions and debounced
//! detail-panel visibility.

/// Transition controller and per-camera phase machine.
pub mod controller;
/// Debounced show/hide of the hovered point's detail panel.
pub mod debounce;
/// Eased auto-rotation resume ramp.
pub mod resume;
/// Frame-callback and timer scheduling with explicit handles.
pub mod scheduler;
/// Hover input and presentation output types.
pub mod signal;
/// Rotation-stopped detection.
pub mod stabilizer;

pub use controller::{Baseline, PhaseKind, TransitionController, TransitionState};
pub use scheduler::{FrameHandle, FrameScheduler, Scheduler, Task, TimerHandle};
pub use signal::{CursorHint, HoverDisplayState, HoverSignal, InteractionEvent};
