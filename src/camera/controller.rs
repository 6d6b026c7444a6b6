use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use super::controls::OrbitControls;
use super::core::Camera;
use crate::options::CameraOptions;

/// Keeps the polar angle off the poles so the view never flips.
const POLAR_EPSILON: f32 = 1e-4;

/// Orbit camera circling the globe center with auto-rotate and damped
/// inertia.
///
/// Rotation input (pointer drag, auto-rotate) accumulates into a pending
/// angular delta. Each [`update`](OrbitControls::update) applies
/// `delta * damping` and keeps `delta * (1 - damping)` for the next step,
/// so motion eases out geometrically once input stops.
pub struct GlobeCamera {
    azimuth: f32,
    polar: f32,
    distance: f32,
    /// Pending (azimuth, polar) delta not yet applied.
    pending: Vec2,

    /// Projection state rebuilt from the orbit after each change.
    pub camera: Camera,

    globe_radius: f32,
    rotate_speed: f32,
    enabled: bool,
    auto_rotate: bool,
    auto_rotate_speed: f32,
    damping_factor: f32,
}

impl GlobeCamera {
    /// Create a camera looking at the options' initial point of view.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        let camera = Camera {
            eye: Vec3::Z,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };

        let mut globe_camera = Self {
            azimuth: 0.0,
            polar: PI / 2.0,
            distance: options.globe_radius,
            pending: Vec2::ZERO,
            camera,
            globe_radius: options.globe_radius,
            rotate_speed: options.rotate_speed,
            enabled: true,
            auto_rotate: options.auto_rotate,
            auto_rotate_speed: options.auto_rotate_speed,
            damping_factor: options.damping_factor,
        };
        globe_camera.point_of_view(
            options.initial_lat,
            options.initial_lng,
            options.initial_altitude,
        );
        globe_camera
    }

    /// Jump to look at `lat`/`lng` from `altitude` globe radii above the
    /// surface. Clears any residual motion.
    pub fn point_of_view(&mut self, lat: f32, lng: f32, altitude: f32) {
        self.azimuth = lng.to_radians();
        self.polar = (90.0 - lat)
            .to_radians()
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        self.distance = self.globe_radius * (1.0 + altitude);
        self.pending = Vec2::ZERO;
        self.update_camera_pos();
    }

    /// Queue a pointer-drag rotation (pixels). Ignored while locked.
    pub fn rotate(&mut self, delta: Vec2) {
        if !self.enabled {
            return;
        }
        self.pending -= delta * self.rotate_speed;
    }

    /// Update the viewport aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    /// Residual angular velocity still waiting to be applied.
    #[must_use]
    pub fn pending_rotation(&self) -> Vec2 {
        self.pending
    }

    /// Globe radius this camera orbits.
    #[must_use]
    pub fn globe_radius(&self) -> f32 {
        self.globe_radius
    }

    /// Azimuth step added per update at the current auto-rotate speed
    /// (speed 1.0 is one turn per minute at 60 fps).
    fn auto_rotation_step(&self) -> f32 {
        TAU / 60.0 / 60.0 * self.auto_rotate_speed
    }

    fn update_camera_pos(&mut self) {
        let sin_polar = self.polar.sin();
        let offset = Vec3::new(
            sin_polar * self.azimuth.sin(),
            self.polar.cos(),
            sin_polar * self.azimuth.cos(),
        ) * self.distance;

        self.camera.eye = self.camera.target + offset;
        self.camera.up = Vec3::Y;
    }
}

impl OrbitControls for GlobeCamera {
    fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    fn set_auto_rotate(&mut self, on: bool) {
        self.auto_rotate = on;
    }

    fn auto_rotate_speed(&self) -> f32 {
        self.auto_rotate_speed
    }

    fn set_auto_rotate_speed(&mut self, speed: f32) {
        self.auto_rotate_speed = speed;
    }

    fn damping_factor(&self) -> f32 {
        self.damping_factor
    }

    fn set_damping_factor(&mut self, damping: f32) {
        self.damping_factor = damping;
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn update(&mut self) {
        if self.auto_rotate {
            self.pending.x += self.auto_rotation_step();
        }

        // No damping means apply everything at once.
        let damping = if self.damping_factor > 0.0 {
            self.damping_factor.min(1.0)
        } else {
            1.0
        };

        self.azimuth = (self.azimuth + self.pending.x * damping) % TAU;
        self.polar = (self.polar + self.pending.y * damping)
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        self.pending *= 1.0 - damping;

        self.update_camera_pos();
    }

    fn rotation_angle(&self) -> f32 {
        self.azimuth
    }
}
