//! Headless demo: drives a scripted hover session against the sample
//! cities and logs every transition.

use std::path::Path;
use std::time::Duration;

use glam::Vec2;
use terra::camera::{GlobeCamera, OrbitControls};
use terra::interaction::{FrameScheduler, InteractionEvent, TransitionController};
use terra::options::Options;
use terra::picking::{HoverPicker, DEFAULT_POINT_ALTITUDE};
use terra::points::PointCatalog;
use terra::util::frame_timing::FrameTiming;

const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);
const SESSION: Duration = Duration::from_secs(5);
const HOVER_AT: Duration = Duration::from_secs(1);
const LEAVE_AT: Duration = Duration::from_secs(3);

type Controller = TransitionController<GlobeCamera, FrameScheduler>;

/// Scripted pointer: rests on a point, then moves off the globe.
struct ScriptedPointer {
    target: Option<Vec2>,
}

impl ScriptedPointer {
    /// Pointer position for this frame, or `None` once it has left.
    fn position(
        &mut self,
        elapsed: Duration,
        picker: &HoverPicker,
        controller: &Controller,
    ) -> Option<Vec2> {
        if elapsed < HOVER_AT || elapsed >= LEAVE_AT {
            return None;
        }
        if self.target.is_none() {
            self.target = first_visible_point(picker, controller);
        }
        self.target
    }
}

fn first_visible_point(
    picker: &HoverPicker,
    controller: &Controller,
) -> Option<Vec2> {
    let camera = &controller.camera()?.camera;
    controller.catalog().iter().find_map(|(id, point)| {
        let pos = picker.marker_position(id)?;
        let screen = camera.project(pos, VIEWPORT)?;
        (picker.pick(screen, camera, VIEWPORT) == Some(id)).then(|| {
            log::info!("pointer heading for {}", point.label);
            screen
        })
    })
}

fn log_event(controller: &Controller, event: InteractionEvent) {
    match event {
        InteractionEvent::DisplayChanged(Some(id)) => {
            let label = controller
                .catalog()
                .get(id)
                .map_or("?", |p| p.label.as_str());
            log::info!("showing details for {label}");
        }
        InteractionEvent::DisplayChanged(None) => {
            log::info!("details hidden");
        }
        InteractionEvent::CursorChanged(hint) => {
            log::info!("cursor -> {hint:?}");
        }
    }
}

fn load_options() -> Options {
    let Some(arg) = std::env::args().nth(1) else {
        return Options::default();
    };
    match Options::load(Path::new(&arg)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}; falling back to defaults");
            Options::default()
        }
    }
}

fn main() {
    env_logger::init();

    let options = load_options();
    let catalog = PointCatalog::sample_cities();
    let mut picker = HoverPicker::new(
        &catalog,
        options.camera.globe_radius,
        DEFAULT_POINT_ALTITUDE,
        options.interaction.pick_radius_px,
    );
    let camera = GlobeCamera::new(&options.camera, VIEWPORT.x / VIEWPORT.y);
    let mut controller = TransitionController::new(
        options.interaction.clone(),
        catalog,
        FrameScheduler::new(),
    );
    controller.attach_camera(camera);

    run_session(&mut controller, &mut picker);

    if let Some(camera) = controller.dispose() {
        log::info!(
            "session over: rotation {:.3} rad, auto-rotate {}",
            camera.rotation_angle(),
            camera.auto_rotate()
        );
    }
}

fn run_session(controller: &mut Controller, picker: &mut HoverPicker) {
    let mut timing = FrameTiming::new(60);
    let mut pointer = ScriptedPointer { target: None };
    let mut next_report = Duration::from_secs(1);

    loop {
        if !timing.should_render() {
            std::thread::sleep(timing.until_next_frame());
            continue;
        }
        let now = timing.now();
        if now >= SESSION {
            break;
        }

        let signal = match pointer.position(now, picker, controller) {
            Some(cursor) => controller.camera().and_then(|camera| {
                picker.cursor_moved(cursor, &camera.camera, VIEWPORT)
            }),
            None => picker.cursor_left(),
        };
        if let Some(signal) = signal {
            log::debug!("{signal:?} at {now:?}");
            controller.on_hover_signal(signal);
        }

        controller.advance(now);
        // The render loop steps the camera every frame, transition or not.
        if let Some(camera) = controller.camera_mut() {
            camera.update();
        }
        for event in controller.drain_events() {
            log_event(controller, event);
        }

        if now >= next_report {
            next_report += Duration::from_secs(1);
            log::info!(
                "{:.1} fps, phase {:?}",
                timing.fps(),
                controller.state().phase()
            );
        }
        timing.end_frame();
    }
}
