//! Hover input and presentation output types.

use crate::points::PointId;

/// Pointer hover change reported by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverSignal {
    /// The pointer is over this point.
    Enter(PointId),
    /// The pointer is no longer over any point.
    Leave,
}

/// Cursor style the presentation layer should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    /// Regular arrow.
    #[default]
    Default,
    /// Hand cursor over an interactive point.
    Pointer,
}

/// Which point's detail panel is visible, as settled by the debouncer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverDisplayState {
    /// The point currently shown, if any.
    pub currently_shown: Option<PointId>,
}

/// Change the presentation layer should apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionEvent {
    /// Show the detail panel for a point, or hide it (`None`).
    DisplayChanged(Option<PointId>),
    /// Switch the cursor style.
    CursorChanged(CursorHint),
}
