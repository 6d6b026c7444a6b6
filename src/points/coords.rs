//! Geographic → world-space conversion on the globe.

use glam::Vec3;

/// Whether `lat`/`lng` (degrees) name a real place: finite, latitude in
/// `[-90, 90]`, longitude in `[-180, 180]`.
#[must_use]
pub fn is_valid_coordinate(lat: f64, lng: f64) -> bool {
    lat.is_finite()
        && lng.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lng)
}

/// World position of a geographic coordinate.
///
/// Y is up, the prime meridian faces +Z, and `altitude` is measured in
/// globe radii above the surface (0 = on the surface).
#[must_use]
pub fn polar_to_cartesian(lat: f64, lng: f64, radius: f32, altitude: f32) -> Vec3 {
    let phi = (90.0 - lat).to_radians();
    let theta = (90.0 - lng).to_radians();
    let r = f64::from(radius * (1.0 + altitude));

    Vec3::new(
        (r * phi.sin() * theta.cos()) as f32,
        (r * phi.cos()) as f32,
        (r * phi.sin() * theta.sin()) as f32,
    )
}
