//! Frame-callback and delay-timer scheduling with explicit handles.
//!
//! Callbacks are plain [`Task`] values. The host drives time: once per
//! render tick it calls [`Scheduler::begin_tick`] and then drains
//! [`Scheduler::next_due`] until it returns `None`, running each task as it
//! comes out. Because tasks are handed out one at a time, a task cancelled
//! while the tick is being drained never fires, even if it was already due.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::points::PointId;

/// Handle to a pending frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// Handle to a pending delay timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Work scheduled by the transition controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// One rotation-stabilizer sample.
    StabilizePoll,
    /// End of the post-lock cooldown: hand control back to the pointer.
    ReleaseLock,
    /// Settle delay elapsed: begin the resume ramp.
    StartResume,
    /// One resume-ramp step.
    ResumeFrame,
    /// Debounced: show this point's detail panel.
    ShowPoint(PointId),
    /// Debounced: hide the detail panel.
    HidePoint,
}

/// The two scheduling primitives the controller runs on, plus the host-side
/// tick interface.
pub trait Scheduler {
    /// Timestamp of the tick being processed.
    fn now(&self) -> Duration;
    /// Run `task` on the next frame.
    fn request_frame(&mut self, task: Task) -> FrameHandle;
    /// Drop a pending frame callback. Unknown handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
    /// Run `task` once `delay` has elapsed.
    fn set_timer(&mut self, task: Task, delay: Duration) -> TimerHandle;
    /// Drop a pending timer. Unknown handles are ignored.
    fn cancel_timer(&mut self, handle: TimerHandle);
    /// Start a render tick at `now`.
    fn begin_tick(&mut self, now: Duration);
    /// Pop the next task due in the current tick: expired timers first (by
    /// deadline), then frame callbacks requested before the tick began.
    fn next_due(&mut self) -> Option<Task>;
}

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    deadline: Duration,
    task: Task,
}

/// Deterministic [`Scheduler`] on a host-supplied clock.
///
/// Keeps every registration in one place so tests (and teardown) can
/// count what is still live.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    now: Duration,
    next_id: u64,
    /// Frames with an id below this were requested before the current tick.
    frame_cutoff: u64,
    frames: BTreeMap<u64, Task>,
    timers: BTreeMap<u64, PendingTimer>,
}

impl FrameScheduler {
    /// Empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frame callbacks still pending.
    #[must_use]
    pub fn live_frames(&self) -> usize {
        self.frames.len()
    }

    /// Number of timers still pending.
    #[must_use]
    pub fn live_timers(&self) -> usize {
        self.timers.len()
    }

    /// Total pending registrations.
    #[must_use]
    pub fn live_registrations(&self) -> usize {
        self.live_frames() + self.live_timers()
    }

    /// Whether `handle` is still waiting to run.
    #[must_use]
    pub fn is_frame_pending(&self, handle: FrameHandle) -> bool {
        self.frames.contains_key(&handle.0)
    }

    /// Whether `handle` is still waiting to fire.
    #[must_use]
    pub fn is_timer_pending(&self, handle: TimerHandle) -> bool {
        self.timers.contains_key(&handle.0)
    }

    /// Tasks of all pending timers, earliest deadline first.
    #[must_use]
    pub fn pending_timer_tasks(&self) -> Vec<Task> {
        let mut timers: Vec<_> = self.timers.iter().collect();
        timers.sort_by_key(|(id, t)| (t.deadline, **id));
        timers.into_iter().map(|(_, t)| t.task).collect()
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Scheduler for FrameScheduler {
    fn now(&self) -> Duration {
        self.now
    }

    fn request_frame(&mut self, task: Task) -> FrameHandle {
        let id = self.allocate_id();
        let _ = self.frames.insert(id, task);
        FrameHandle(id)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let _ = self.frames.remove(&handle.0);
    }

    fn set_timer(&mut self, task: Task, delay: Duration) -> TimerHandle {
        let id = self.allocate_id();
        let deadline = self.now + delay;
        let _ = self.timers.insert(id, PendingTimer { deadline, task });
        TimerHandle(id)
    }

    fn cancel_timer(&mut self, handle: TimerHandle) {
        let _ = self.timers.remove(&handle.0);
    }

    fn begin_tick(&mut self, now: Duration) {
        // The clock never runs backwards.
        self.now = self.now.max(now);
        self.frame_cutoff = self.next_id;
    }

    fn next_due(&mut self) -> Option<Task> {
        let due_timer = self
            .timers
            .iter()
            .filter(|(_, t)| t.deadline <= self.now)
            .min_by_key(|(id, t)| (t.deadline, **id))
            .map(|(id, _)| *id);
        if let Some(id) = due_timer {
            return self.timers.remove(&id).map(|t| t.task);
        }

        let due_frame = self
            .frames
            .first_key_value()
            .map(|(id, _)| *id)
            .filter(|id| *id < self.frame_cutoff)?;
        self.frames.remove(&due_frame)
    }
}
