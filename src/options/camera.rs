use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, orbit-control, and initial-view parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Globe radius in world units.
    #[schemars(skip)]
    pub globe_radius: f32,
    /// Pointer-drag rotation sensitivity (radians per pixel).
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.02), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Whether the globe spins on its own when idle.
    #[schemars(title = "Auto Rotate")]
    pub auto_rotate: bool,
    /// Auto-rotation speed (1.0 = one turn per minute at 60 fps).
    #[schemars(title = "Auto Rotate Speed", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub auto_rotate_speed: f32,
    /// Fraction of the pending angular delta applied (and removed) per update.
    #[schemars(title = "Damping", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub damping_factor: f32,
    /// Initial view latitude in degrees.
    #[schemars(skip)]
    pub initial_lat: f32,
    /// Initial view longitude in degrees.
    #[schemars(skip)]
    pub initial_lng: f32,
    /// Initial camera altitude in globe radii above the surface.
    #[schemars(skip)]
    pub initial_altitude: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 1.0,
            zfar: 2000.0,
            globe_radius: 100.0,
            rotate_speed: 0.005,
            auto_rotate: true,
            auto_rotate_speed: 1.0,
            damping_factor: 0.1,
            initial_lat: 25.0,
            initial_lng: 0.0,
            initial_altitude: 1.5,
        }
    }
}
