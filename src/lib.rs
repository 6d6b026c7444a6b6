// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive globe camera: hover-driven auto-rotation freeze and eased
//! resume.
//!
//! When the pointer rests on a point of interest, the globe's idle spin is
//! brought to a halt, the camera waits until it has actually stopped moving,
//! and then locks so the point stays under the cursor. When the pointer
//! leaves, rotation ramps back to its original speed instead of snapping.
//!
//! # Key entry points
//!
//! - [`interaction::TransitionController`] - the hover transition state
//!   machine
//! - [`picking::HoverPicker`] - turns cursor positions into hover signals
//! - [`camera::GlobeCamera`] - orbit camera with auto-rotation and damping
//! - [`points::PointCatalog`] - the points of interest on the globe
//! - [`options::Options`] - runtime configuration (camera, interaction)
//!
//! # Architecture
//!
//! Nothing in the crate owns a clock or a thread. The host drives time by
//! calling [`interaction::TransitionController::advance`] once per rendered
//! frame; frame callbacks and delay timers are plain values queued in a
//! [`interaction::Scheduler`], so the whole transition can be replayed
//! deterministically in tests. The host keeps stepping its camera every
//! frame as usual; the controller only adjusts the camera's settings and
//! samples it while a transition runs.

pub mod camera;
pub mod error;
pub mod interaction;
pub mod options;
pub mod picking;
pub mod points;
pub mod util;
