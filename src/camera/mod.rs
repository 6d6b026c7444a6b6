//! Camera system for viewing the globe.
//!
//! Provides an orbit camera with auto-rotation and damped inertia, plus the
//! [`controls::OrbitControls`] seam that hover transitions drive.

/// Orbit camera implementing [`controls::OrbitControls`].
pub mod controller;
/// The camera-control surface mutated by hover transitions.
pub mod controls;
/// Core camera struct and projection helpers.
pub mod core;

pub use controller::GlobeCamera;
pub use controls::OrbitControls;
