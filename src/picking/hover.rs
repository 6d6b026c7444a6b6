use glam::{Vec2, Vec3};

use crate::camera::core::Camera;
use crate::interaction::HoverSignal;
use crate::points::coords::polar_to_cartesian;
use crate::points::{PointCatalog, PointId};

/// Altitude (in globe radii) at which point markers float.
pub const DEFAULT_POINT_ALTITUDE: f32 = 0.1;

/// Screen-space hit testing of point markers.
///
/// Reports a [`HoverSignal`] only when the hovered point changes, the way a
/// scene's hover callback fires on target change rather than on every
/// pointer move.
pub struct HoverPicker {
    /// World position of every marker, in catalog order.
    markers: Vec<(PointId, Vec3)>,
    pick_radius_px: f32,
    hovered: Option<PointId>,
}

impl HoverPicker {
    /// Place a marker for every catalog point at `altitude` above a globe
    /// of `globe_radius`.
    #[must_use]
    pub fn new(
        catalog: &PointCatalog,
        globe_radius: f32,
        altitude: f32,
        pick_radius_px: f32,
    ) -> Self {
        let markers = catalog
            .iter()
            .map(|(id, p)| {
                (id, polar_to_cartesian(p.lat, p.lng, globe_radius, altitude))
            })
            .collect();
        Self {
            markers,
            pick_radius_px,
            hovered: None,
        }
    }

    /// Point currently under the cursor.
    #[must_use]
    pub fn hovered(&self) -> Option<PointId> {
        self.hovered
    }

    /// World position of a marker.
    #[must_use]
    pub fn marker_position(&self, id: PointId) -> Option<Vec3> {
        self.markers
            .iter()
            .find(|(marker, _)| *marker == id)
            .map(|(_, pos)| *pos)
    }

    /// Nearest front-facing marker within the pick radius of `cursor`.
    #[must_use]
    pub fn pick(
        &self,
        cursor: Vec2,
        camera: &Camera,
        viewport: Vec2,
    ) -> Option<PointId> {
        let mut best: Option<(PointId, f32)> = None;
        for &(id, pos) in &self.markers {
            // Markers on the far hemisphere are hidden behind the globe.
            if pos.normalize_or_zero().dot(camera.eye - pos) <= 0.0 {
                continue;
            }
            let Some(screen) = camera.project(pos, viewport) else {
                continue;
            };
            let dist = screen.distance(cursor);
            if dist <= self.pick_radius_px
                && best.is_none_or(|(_, d)| dist < d)
            {
                best = Some((id, dist));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Pointer moved to `cursor` (viewport pixels).
    pub fn cursor_moved(
        &mut self,
        cursor: Vec2,
        camera: &Camera,
        viewport: Vec2,
    ) -> Option<HoverSignal> {
        let hit = self.pick(cursor, camera, viewport);
        self.transition_to(hit)
    }

    /// Pointer left the viewport.
    pub fn cursor_left(&mut self) -> Option<HoverSignal> {
        self.transition_to(None)
    }

    fn transition_to(&mut self, hit: Option<PointId>) -> Option<HoverSignal> {
        if hit == self.hovered {
            return None;
        }
        self.hovered = hit;
        Some(hit.map_or(HoverSignal::Leave, HoverSignal::Enter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::GlobeCamera;
    use crate::options::CameraOptions;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    fn setup() -> (PointCatalog, GlobeCamera, HoverPicker) {
        let catalog = PointCatalog::sample_cities();
        let camera = GlobeCamera::new(&CameraOptions::default(), 800.0 / 600.0);
        let picker =
            HoverPicker::new(&catalog, 100.0, DEFAULT_POINT_ALTITUDE, 12.0);
        (catalog, camera, picker)
    }

    fn screen_of(
        picker: &HoverPicker,
        camera: &GlobeCamera,
        id: PointId,
    ) -> Option<Vec2> {
        camera
            .camera
            .project(picker.marker_position(id)?, VIEWPORT)
    }

    #[test]
    fn cursor_on_marker_enters_once() {
        let (catalog, camera, mut picker) = setup();
        let london = catalog.find_by_label("London").unwrap();
        let screen = screen_of(&picker, &camera, london).unwrap();

        assert_eq!(
            picker.cursor_moved(screen, &camera.camera, VIEWPORT),
            Some(HoverSignal::Enter(london))
        );
        assert_eq!(
            picker.cursor_moved(
                screen + Vec2::new(1.0, 1.0),
                &camera.camera,
                VIEWPORT
            ),
            None
        );
        assert_eq!(picker.hovered(), Some(london));
    }

    #[test]
    fn moving_away_leaves() {
        let (catalog, camera, mut picker) = setup();
        let paris = catalog.find_by_label("Paris").unwrap();
        let screen = screen_of(&picker, &camera, paris).unwrap();
        let _ = picker.cursor_moved(screen, &camera.camera, VIEWPORT);

        assert_eq!(
            picker.cursor_moved(Vec2::ZERO, &camera.camera, VIEWPORT),
            Some(HoverSignal::Leave)
        );
        assert_eq!(picker.cursor_left(), None);
    }

    #[test]
    fn cursor_left_the_viewport() {
        let (catalog, camera, mut picker) = setup();
        let london = catalog.find_by_label("London").unwrap();
        let screen = screen_of(&picker, &camera, london).unwrap();
        let _ = picker.cursor_moved(screen, &camera.camera, VIEWPORT);
        assert_eq!(picker.cursor_left(), Some(HoverSignal::Leave));
        assert_eq!(picker.hovered(), None);
    }

    #[test]
    fn far_side_markers_are_not_pickable() {
        let (catalog, camera, picker) = setup();
        let tokyo = catalog.find_by_label("Tokyo").unwrap();
        if let Some(screen) = screen_of(&picker, &camera, tokyo) {
            assert_ne!(
                picker.pick(screen, &camera.camera, VIEWPORT),
                Some(tokyo)
            );
        }
    }

    #[test]
    fn empty_space_picks_nothing() {
        let (_, camera, picker) = setup();
        assert_eq!(picker.pick(Vec2::ZERO, &camera.camera, VIEWPORT), None);
    }
}
