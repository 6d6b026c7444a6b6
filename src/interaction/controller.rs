//! Hover-driven camera transitions.
//!
//! The [`TransitionController`] is the single owner of every frame loop and
//! timer that touches the camera. Each camera runs one phase machine:
//!
//! ```text
//! Enter:  Idle ─▶ Stabilizing ─▶ Locked
//! Leave:  Idle ─▶ PendingResume ─▶ Resuming ─▶ Idle
//! ```
//!
//! Every hover signal first cancels whatever the current phase has
//! scheduled, so a stale loop can never write to the camera after it has
//! been superseded. Because the phase is a single enum, at most one of the
//! stabilization and resume loops exists at any time.

use std::time::Duration;

use super::debounce::HoverDebouncer;
use super::resume::{RampStep, ResumeRamp};
use super::scheduler::{FrameHandle, Scheduler, Task, TimerHandle};
use super::signal::{
    CursorHint, HoverDisplayState, HoverSignal, InteractionEvent,
};
use super::stabilizer::{StabilizeStep, Stabilizer};
use crate::camera::OrbitControls;
use crate::options::InteractionOptions;
use crate::points::PointCatalog;

/// Camera settings captured before the first hover changed anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    /// Auto-rotation speed to ramp back to.
    pub rotation_speed: f32,
    /// Damping factor to restore on leave.
    pub damping_factor: f32,
}

impl Baseline {
    fn capture<C: OrbitControls>(controls: &C) -> Self {
        Self {
            rotation_speed: controls.auto_rotate_speed(),
            damping_factor: controls.damping_factor(),
        }
    }

    /// Put the controls where a finished resume would leave them.
    fn restore<C: OrbitControls>(self, controls: &mut C) {
        controls.set_enabled(true);
        controls.set_auto_rotate(true);
        controls.set_auto_rotate_speed(self.rotation_speed);
        controls.set_damping_factor(self.damping_factor);
    }
}

/// Observable name of the current camera phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    /// Nothing scheduled; the camera runs on its own.
    Idle,
    /// Polling each frame for the spin to die out.
    Stabilizing,
    /// Camera held still while a point is hovered.
    Locked,
    /// Waiting out the settle delay after a leave.
    PendingResume,
    /// Ramping auto-rotation back up.
    Resuming,
}

#[derive(Debug)]
enum CameraPhase {
    Idle,
    Stabilizing {
        frame: FrameHandle,
        stabilizer: Stabilizer,
    },
    Locked {
        /// Pointer control comes back when this fires.
        cooldown: Option<TimerHandle>,
    },
    PendingResume {
        timer: TimerHandle,
    },
    Resuming {
        frame: FrameHandle,
        ramp: ResumeRamp,
    },
}

/// Transient per-camera transition state.
#[derive(Debug)]
pub struct TransitionState {
    baseline: Option<Baseline>,
    phase: CameraPhase,
}

impl Default for TransitionState {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionState {
    /// Fresh state: no baseline, nothing scheduled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            baseline: None,
            phase: CameraPhase::Idle,
        }
    }

    /// Settings captured on the first hover signal.
    #[must_use]
    pub fn baseline(&self) -> Option<Baseline> {
        self.baseline
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> PhaseKind {
        match self.phase {
            CameraPhase::Idle => PhaseKind::Idle,
            CameraPhase::Stabilizing { .. } => PhaseKind::Stabilizing,
            CameraPhase::Locked { .. } => PhaseKind::Locked,
            CameraPhase::PendingResume { .. } => PhaseKind::PendingResume,
            CameraPhase::Resuming { .. } => PhaseKind::Resuming,
        }
    }

    /// In-flight stabilization frame, if any.
    #[must_use]
    pub fn pending_stabilization(&self) -> Option<FrameHandle> {
        match self.phase {
            CameraPhase::Stabilizing { frame, .. } => Some(frame),
            _ => None,
        }
    }

    /// In-flight resume frame, if any.
    #[must_use]
    pub fn pending_resume(&self) -> Option<FrameHandle> {
        match self.phase {
            CameraPhase::Resuming { frame, .. } => Some(frame),
            _ => None,
        }
    }

    /// Armed settle-delay timer, if any.
    #[must_use]
    pub fn scheduled_resume_timer(&self) -> Option<TimerHandle> {
        match self.phase {
            CameraPhase::PendingResume { timer } => Some(timer),
            _ => None,
        }
    }

    /// Last angle seen by the stabilizer, while it runs.
    #[must_use]
    pub fn last_sampled_angle(&self) -> Option<f32> {
        match &self.phase {
            CameraPhase::Stabilizing { stabilizer, .. } => {
                stabilizer.last_angle()
            }
            _ => None,
        }
    }

    /// Cancel whatever the current phase has scheduled and return to idle.
    fn cancel_pending<S: Scheduler>(&mut self, scheduler: &mut S) {
        match std::mem::replace(&mut self.phase, CameraPhase::Idle) {
            CameraPhase::Stabilizing { frame, .. }
            | CameraPhase::Resuming { frame, .. } => {
                scheduler.cancel_frame(frame);
            }
            CameraPhase::PendingResume { timer }
            | CameraPhase::Locked {
                cooldown: Some(timer),
            } => scheduler.cancel_timer(timer),
            CameraPhase::Idle | CameraPhase::Locked { cooldown: None } => {}
        }
    }
}

/// Orchestrates hover transitions for one camera.
///
/// # Usage
///
/// ```ignore
/// let mut controller = TransitionController::new(
///     options.interaction.clone(),
///     PointCatalog::sample_cities(),
///     FrameScheduler::new(),
/// );
/// controller.attach_camera(GlobeCamera::new(&options.camera, aspect));
///
/// // Per pointer move:
/// if let Some(signal) = picker.cursor_moved(cursor, camera, viewport) {
///     controller.on_hover_signal(signal);
/// }
/// // Per render tick:
/// controller.advance(frame_timing.now());
/// for event in controller.drain_events() { /* update the panel */ }
///
/// // On teardown:
/// let _ = controller.dispose();
/// ```
pub struct TransitionController<C: OrbitControls, S: Scheduler> {
    camera: Option<C>,
    scheduler: S,
    state: TransitionState,
    debouncer: HoverDebouncer,
    catalog: PointCatalog,
    options: InteractionOptions,
    cursor: CursorHint,
    events: Vec<InteractionEvent>,
}

impl<C: OrbitControls, S: Scheduler> TransitionController<C, S> {
    /// Controller with no camera attached yet.
    #[must_use]
    pub fn new(
        options: InteractionOptions,
        catalog: PointCatalog,
        scheduler: S,
    ) -> Self {
        Self {
            camera: None,
            scheduler,
            state: TransitionState::new(),
            debouncer: HoverDebouncer::new(
                options.show_delay(),
                options.hide_delay(),
            ),
            catalog,
            options,
            cursor: CursorHint::Default,
            events: Vec::new(),
        }
    }

    /// Hand the controller the camera it drives. Signals that arrive
    /// before this are ignored.
    pub fn attach_camera(&mut self, camera: C) {
        self.camera = Some(camera);
    }

    /// Apply a hover change.
    pub fn on_hover_signal(&mut self, signal: HoverSignal) {
        let Some(camera) = self.camera.as_mut() else {
            log::debug!("hover signal {signal:?} before camera attached");
            return;
        };
        if let HoverSignal::Enter(point) = signal {
            if !self.catalog.contains(point) {
                log::warn!("ignoring hover on unknown point {point:?}");
                return;
            }
        }

        let baseline = *self
            .state
            .baseline
            .get_or_insert_with(|| Baseline::capture(&*camera));
        let was_idle = self.state.phase() == PhaseKind::Idle;
        self.state.cancel_pending(&mut self.scheduler);

        match signal {
            HoverSignal::Enter(point) => {
                camera.set_auto_rotate(false);
                camera.set_auto_rotate_speed(0.0);
                camera.set_damping_factor(self.options.hover_damping);

                let frame = self.scheduler.request_frame(Task::StabilizePoll);
                self.state.phase = CameraPhase::Stabilizing {
                    frame,
                    stabilizer: Stabilizer::new(
                        self.options.stabilize_tolerance,
                        self.options.max_stabilize_polls,
                    ),
                };
                log::debug!("enter {point:?}: stabilizing");

                self.debouncer.on_enter(point, &mut self.scheduler);
                self.set_cursor(CursorHint::Pointer);
            }
            HoverSignal::Leave => {
                // An idle camera is already spinning at its baseline.
                if !was_idle {
                    camera.set_enabled(true);
                    camera.set_damping_factor(baseline.damping_factor);

                    let timer = self.scheduler.set_timer(
                        Task::StartResume,
                        self.options.settle_delay(),
                    );
                    self.state.phase = CameraPhase::PendingResume { timer };
                    log::debug!("leave: resume pending");
                }

                self.debouncer.on_leave(&mut self.scheduler);
                self.set_cursor(CursorHint::Default);
            }
        }
    }

    /// Run everything due at `now`. Call once per render tick.
    pub fn advance(&mut self, now: Duration) {
        self.scheduler.begin_tick(now);
        while let Some(task) = self.scheduler.next_due() {
            self.run_task(task);
        }
    }

    /// Cancel every pending frame loop and timer and detach the camera.
    /// Later signals and ticks are no-ops until a camera is attached again.
    ///
    /// A camera taken mid-transition is handed back at its baseline
    /// settings: enabled, auto-rotating at the captured speed and damping.
    /// An idle camera is returned untouched.
    pub fn dispose(&mut self) -> Option<C> {
        let interrupted = self.state.phase() != PhaseKind::Idle;
        self.state.cancel_pending(&mut self.scheduler);
        self.debouncer.cancel(&mut self.scheduler);

        let mut camera = self.camera.take();
        if let (Some(camera), Some(baseline), true) =
            (camera.as_mut(), self.state.baseline, interrupted)
        {
            baseline.restore(camera);
        }
        log::debug!("transition controller disposed");
        camera
    }

    /// Take the presentation events produced so far.
    pub fn drain_events(&mut self) -> Vec<InteractionEvent> {
        std::mem::take(&mut self.events)
    }

    /// The attached camera.
    #[must_use]
    pub fn camera(&self) -> Option<&C> {
        self.camera.as_ref()
    }

    /// Mutable access to the attached camera (drag, resize).
    pub fn camera_mut(&mut self) -> Option<&mut C> {
        self.camera.as_mut()
    }

    /// Transition state for inspection.
    #[must_use]
    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    /// Settled detail-panel visibility.
    #[must_use]
    pub fn display_state(&self) -> HoverDisplayState {
        self.debouncer.display_state()
    }

    /// Current cursor hint.
    #[must_use]
    pub fn cursor(&self) -> CursorHint {
        self.cursor
    }

    /// The points this controller accepts hovers for.
    #[must_use]
    pub fn catalog(&self) -> &PointCatalog {
        &self.catalog
    }

    /// The scheduler driving this controller.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::StabilizePoll => self.poll_stabilizer(),
            Task::ReleaseLock => self.release_lock(),
            Task::StartResume => self.start_resume(),
            Task::ResumeFrame => self.step_resume(),
            Task::ShowPoint(point) => {
                if self.debouncer.show(point) {
                    self.events
                        .push(InteractionEvent::DisplayChanged(Some(point)));
                }
            }
            Task::HidePoint => {
                if self.debouncer.hide() {
                    self.events.push(InteractionEvent::DisplayChanged(None));
                }
            }
        }
    }

    fn poll_stabilizer(&mut self) {
        let Some(camera) = self.camera.as_mut() else {
            return;
        };
        let CameraPhase::Stabilizing { frame, stabilizer } =
            &mut self.state.phase
        else {
            return;
        };

        match stabilizer.poll(camera) {
            StabilizeStep::Moving => {
                *frame = self.scheduler.request_frame(Task::StabilizePoll);
            }
            step => {
                if step == StabilizeStep::GaveUp {
                    log::warn!(
                        "camera still turning after {} polls; locking anyway",
                        stabilizer.polls()
                    );
                }
                camera.set_enabled(false);
                let cooldown = self
                    .scheduler
                    .set_timer(Task::ReleaseLock, self.options.lock_cooldown());
                self.state.phase = CameraPhase::Locked {
                    cooldown: Some(cooldown),
                };
                log::debug!("camera stopped: locked");
            }
        }
    }

    fn release_lock(&mut self) {
        let Some(camera) = self.camera.as_mut() else {
            return;
        };
        if let CameraPhase::Locked { cooldown } = &mut self.state.phase {
            *cooldown = None;
            camera.set_enabled(true);
            camera.set_auto_rotate(false);
        }
    }

    fn start_resume(&mut self) {
        let Some(baseline) = self.state.baseline else {
            return;
        };
        if !matches!(self.state.phase, CameraPhase::PendingResume { .. }) {
            return;
        }

        let ramp = ResumeRamp::new(
            self.scheduler.now(),
            self.options.resume_duration(),
            baseline.rotation_speed,
            self.options.resume_easing,
        );
        let frame = self.scheduler.request_frame(Task::ResumeFrame);
        self.state.phase = CameraPhase::Resuming { frame, ramp };
        log::debug!("resuming auto-rotate");
    }

    fn step_resume(&mut self) {
        let Some(camera) = self.camera.as_mut() else {
            return;
        };
        let now = self.scheduler.now();
        let CameraPhase::Resuming { frame, ramp } = &mut self.state.phase
        else {
            return;
        };

        match ramp.apply(camera, now) {
            RampStep::Running => {
                *frame = self.scheduler.request_frame(Task::ResumeFrame);
            }
            RampStep::Finished => {
                self.state.phase = CameraPhase::Idle;
                log::debug!("auto-rotate restored");
            }
        }
    }

    fn set_cursor(&mut self, cursor: CursorHint) {
        if self.cursor != cursor {
            self.cursor = cursor;
            self.events.push(InteractionEvent::CursorChanged(cursor));
        }
    }
}
