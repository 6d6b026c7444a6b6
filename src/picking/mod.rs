//! Pointer hit testing against point markers.
//!
//! Turns raw cursor positions into [`HoverSignal`](crate::interaction::HoverSignal)s
//! for the transition controller.

mod hover;

pub use hover::{HoverPicker, DEFAULT_POINT_ALTITUDE};
