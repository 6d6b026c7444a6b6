//! Debounced detail-panel visibility.
//!
//! Raw hover signals churn when the pointer grazes a point's edge. The
//! debouncer turns them into delayed show/hide actions, keeping at most one
//! pending at a time, so only the newest request can ever take effect.

use std::time::Duration;

use super::scheduler::{Scheduler, Task, TimerHandle};
use super::signal::HoverDisplayState;
use crate::points::PointId;

/// Coalesces enter/leave churn into one stable visible point.
#[derive(Debug)]
pub struct HoverDebouncer {
    /// Point most recently asked to show (cleared by a leave).
    requested: Option<PointId>,
    pending: Option<TimerHandle>,
    display: HoverDisplayState,
    show_delay: Duration,
    hide_delay: Duration,
}

impl HoverDebouncer {
    /// Debouncer with the given show/hide delays.
    #[must_use]
    pub fn new(show_delay: Duration, hide_delay: Duration) -> Self {
        Self {
            requested: None,
            pending: None,
            display: HoverDisplayState::default(),
            show_delay,
            hide_delay,
        }
    }

    /// Pointer entered `point`. Re-entering the already requested point
    /// keeps the pending action as is.
    pub fn on_enter<S: Scheduler>(&mut self, point: PointId, scheduler: &mut S) {
        if self.requested == Some(point) {
            return;
        }
        self.requested = Some(point);
        self.cancel(scheduler);
        self.pending =
            Some(scheduler.set_timer(Task::ShowPoint(point), self.show_delay));
    }

    /// Pointer left every point.
    pub fn on_leave<S: Scheduler>(&mut self, scheduler: &mut S) {
        self.requested = None;
        self.cancel(scheduler);
        self.pending = Some(scheduler.set_timer(Task::HidePoint, self.hide_delay));
    }

    /// A scheduled show fired. Returns `true` if the visible point changed.
    pub fn show(&mut self, point: PointId) -> bool {
        self.pending = None;
        self.set_shown(Some(point))
    }

    /// A scheduled hide fired. Returns `true` if something was visible.
    pub fn hide(&mut self) -> bool {
        self.pending = None;
        self.requested = None;
        self.set_shown(None)
    }

    /// Drop the pending action, if any.
    pub fn cancel<S: Scheduler>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_timer(handle);
        }
    }

    /// Settled visibility.
    #[must_use]
    pub fn display_state(&self) -> HoverDisplayState {
        self.display
    }

    fn set_shown(&mut self, shown: Option<PointId>) -> bool {
        if self.display.currently_shown == shown {
            return false;
        }
        self.display.currently_shown = shown;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::scheduler::FrameScheduler;

    const A: PointId = PointId(0);
    const B: PointId = PointId(1);

    fn debouncer() -> HoverDebouncer {
        HoverDebouncer::new(Duration::from_millis(150), Duration::from_millis(250))
    }

    /// Advance to `now_ms`, fire due actions, and return the visibility
    /// changes they produced.
    fn run(
        d: &mut HoverDebouncer,
        s: &mut FrameScheduler,
        now_ms: u64,
    ) -> Vec<Option<PointId>> {
        s.begin_tick(Duration::from_millis(now_ms));
        let mut changes = Vec::new();
        while let Some(task) = s.next_due() {
            let changed = match task {
                Task::ShowPoint(p) => d.show(p).then_some(Some(p)),
                Task::HidePoint => d.hide().then_some(None),
                _ => None,
            };
            changes.extend(changed);
        }
        changes
    }

    #[test]
    fn show_waits_for_the_delay() {
        let (mut d, mut s) = (debouncer(), FrameScheduler::new());
        d.on_enter(A, &mut s);
        assert!(run(&mut d, &mut s, 149).is_empty());
        assert_eq!(d.display_state().currently_shown, None);
        assert_eq!(run(&mut d, &mut s, 150), vec![Some(A)]);
        assert_eq!(d.display_state().currently_shown, Some(A));
    }

    #[test]
    fn burst_resolves_to_a_single_show() {
        let (mut d, mut s) = (debouncer(), FrameScheduler::new());
        d.on_enter(A, &mut s);
        d.on_leave(&mut s);
        d.on_enter(A, &mut s);
        d.on_leave(&mut s);
        d.on_enter(A, &mut s);
        assert_eq!(s.live_timers(), 1);

        let mut changes = Vec::new();
        for t in (0..=1000).step_by(16) {
            changes.extend(run(&mut d, &mut s, t));
        }
        assert_eq!(changes, vec![Some(A)]);
    }

    #[test]
    fn leave_hides_after_its_delay() {
        let (mut d, mut s) = (debouncer(), FrameScheduler::new());
        d.on_enter(A, &mut s);
        let _ = run(&mut d, &mut s, 150);
        d.on_leave(&mut s);
        assert!(run(&mut d, &mut s, 399).is_empty());
        assert_eq!(run(&mut d, &mut s, 400), vec![None]);
    }

    #[test]
    fn switching_points_supersedes_the_pending_show() {
        let (mut d, mut s) = (debouncer(), FrameScheduler::new());
        d.on_enter(A, &mut s);
        let _ = run(&mut d, &mut s, 100);
        d.on_enter(B, &mut s);
        assert!(run(&mut d, &mut s, 200).is_empty());
        assert_eq!(run(&mut d, &mut s, 250), vec![Some(B)]);
    }

    #[test]
    fn reentering_the_requested_point_keeps_its_timer() {
        let (mut d, mut s) = (debouncer(), FrameScheduler::new());
        d.on_enter(A, &mut s);
        let _ = run(&mut d, &mut s, 100);
        d.on_enter(A, &mut s);
        assert_eq!(run(&mut d, &mut s, 150), vec![Some(A)]);
    }

    #[test]
    fn quick_return_keeps_the_panel_without_flicker() {
        let (mut d, mut s) = (debouncer(), FrameScheduler::new());
        d.on_enter(A, &mut s);
        let _ = run(&mut d, &mut s, 150);
        d.on_leave(&mut s);
        let _ = run(&mut d, &mut s, 200);
        d.on_enter(A, &mut s);
        let mut changes = Vec::new();
        for t in (216..=1000).step_by(16) {
            changes.extend(run(&mut d, &mut s, t));
        }
        assert!(changes.is_empty());
        assert_eq!(d.display_state().currently_shown, Some(A));
    }

    #[test]
    fn cancel_drops_the_pending_action() {
        let (mut d, mut s) = (debouncer(), FrameScheduler::new());
        d.on_enter(A, &mut s);
        d.cancel(&mut s);
        assert_eq!(s.live_registrations(), 0);
    }
}
