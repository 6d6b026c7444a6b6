/// The slice of an orbit camera that hover transitions drive.
///
/// Implemented by [`GlobeCamera`](super::controller::GlobeCamera); hosts
/// that own their camera elsewhere implement it on their own handle.
/// The transition controller only ever mutates these fields.
pub trait OrbitControls {
    /// Whether ambient auto-rotation is on.
    fn auto_rotate(&self) -> bool;
    /// Turn ambient auto-rotation on or off.
    fn set_auto_rotate(&mut self, on: bool);
    /// Current auto-rotation speed.
    fn auto_rotate_speed(&self) -> f32;
    /// Set the auto-rotation speed.
    fn set_auto_rotate_speed(&mut self, speed: f32);
    /// Per-update decay applied to residual angular velocity.
    fn damping_factor(&self) -> f32;
    /// Set the damping factor.
    fn set_damping_factor(&mut self, damping: f32);
    /// Whether pointer-driven control is enabled (`false` = locked).
    fn enabled(&self) -> bool;
    /// Enable or lock pointer-driven control.
    fn set_enabled(&mut self, enabled: bool);
    /// Advance the controls by one step (auto-rotate, damping).
    fn update(&mut self);
    /// Current rotation angle around the vertical axis, in radians.
    fn rotation_angle(&self) -> f32;
}
