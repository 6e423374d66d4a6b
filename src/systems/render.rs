//! Drawing with Raylib.
//!
//! The scene camera draws the volumetric globes (wire graticule plus habitat
//! marker) in 3D. Labels are projected to the screen afterwards so the text
//! always faces the viewer. Flat sessions draw a map card instead, the
//! browsing state lists the catalog, and the debug overlay shows the live spin
//! and drag phase.
use bevy_ecs::prelude::*;
use glam::Vec2;
use raylib::ffi;
use raylib::prelude::*;
use std::ffi::CString;

use crate::components::dragtracker::{DragPhase, DragTracker};
use crate::components::globe::{Globe, MapCard};
use crate::components::label::Label;
use crate::components::orientation::OrientationState;
use crate::components::subject::Subject;
use crate::components::transform3d::Transform3D;
use crate::composer::decompose;
use crate::resources::camera3d::{SceneCamera, to_vector3};
use crate::resources::catalog::SubjectCatalog;
use crate::resources::debugmode::DebugMode;
use crate::resources::pointer::PointerState;
use crate::resources::session::{SessionState, SessionStates};
use crate::resources::viewerconfig::ViewerConfig;

const BACKGROUND: Color = Color::new(18, 22, 32, 255);
const GRID_COLOR: Color = Color::new(90, 150, 200, 255);
const MARKER_COLOR: Color = Color::new(255, 120, 60, 255);
const CARD_COLOR: Color = Color::new(40, 70, 100, 255);
const GRATICULE_MERIDIANS: usize = 12;
const GRATICULE_PARALLELS: usize = 5;
const GRATICULE_STEPS: usize = 24;

fn text_width(text: &str, font_size: i32) -> i32 {
    match CString::new(text) {
        Ok(c_text) => unsafe { ffi::MeasureText(c_text.as_ptr(), font_size) },
        Err(_) => 0,
    }
}

fn draw_centered_text(d: &mut RaylibDrawHandle, text: &str, center: Vec2, size: i32, color: Color) {
    let width = text_width(text, size);
    d.draw_text(
        text,
        center.x as i32 - width / 2,
        center.y as i32 - size / 2,
        size,
        color,
    );
}

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    camera: Res<SceneCamera>,
    state: Res<SessionState>,
    catalog: Res<SubjectCatalog>,
    pointer: Res<PointerState>,
    config: Res<ViewerConfig>,
    debug: Option<Res<DebugMode>>,
    globes: Query<(&Globe, &Transform3D)>,
    labels: Query<(&Label, &Transform3D)>,
    cards: Query<(&MapCard, &Subject, &Label)>,
    trackers: Query<(&OrientationState, &DragTracker, &Transform3D)>,
) {
    let viewport = Vec2::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
    let mut d = rl.begin_drawing(&th);
    d.clear_background(BACKGROUND);

    {
        let mut d3 = d.begin_mode3D(camera.to_raylib());
        for (globe, transform) in globes.iter() {
            let model = transform.matrix();
            for (a, b) in globe.graticule(GRATICULE_MERIDIANS, GRATICULE_PARALLELS, GRATICULE_STEPS) {
                d3.draw_line3D(
                    to_vector3(model.transform_point3(a)),
                    to_vector3(model.transform_point3(b)),
                    GRID_COLOR,
                );
            }
            let marker = model.transform_point3(globe.marker_point());
            d3.draw_sphere(to_vector3(marker), globe.radius * 0.08, MARKER_COLOR);
        }
    }

    for (label, transform) in labels.iter() {
        if let Some(screen) = camera.world_to_screen(transform.translation, viewport) {
            draw_centered_text(&mut d, &label.content, screen, label.font_size, label.color);
        }
    }

    for (card, subject, label) in cards.iter() {
        let size = Vec2::new(viewport.x * 0.6, viewport.x * 0.3);
        let origin = (viewport - size) * 0.5;
        d.draw_rectangle(
            origin.x as i32,
            origin.y as i32,
            size.x as i32,
            size.y as i32,
            CARD_COLOR,
        );
        d.draw_rectangle_lines(
            origin.x as i32,
            origin.y as i32,
            size.x as i32,
            size.y as i32,
            GRID_COLOR,
        );
        let marker = origin + card.marker * size;
        d.draw_circle(marker.x as i32, marker.y as i32, 8.0, MARKER_COLOR);
        let below = Vec2::new(viewport.x * 0.5, origin.y + size.y + label.font_size as f32);
        draw_centered_text(&mut d, &label.content, below, label.font_size, label.color);
        if !subject.scientific_name.is_empty() {
            let further = below + Vec2::new(0.0, label.font_size as f32);
            draw_centered_text(&mut d, &subject.scientific_name, further, 20, Color::LIGHTGRAY);
        }
    }

    if state.get() == SessionStates::Browsing {
        d.draw_text("Subjects (N/P to open, Esc to quit)", 20, 20, 20, Color::RAYWHITE);
        for (i, subject) in catalog.iter().enumerate() {
            d.draw_text(
                &subject.display_name,
                40,
                60 + 26 * i as i32,
                20,
                Color::LIGHTGRAY,
            );
        }
    }

    if debug.is_some() {
        let fps = d.get_fps();
        let text = format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps);
        d.draw_text(&text, 10, 10, 10, Color::YELLOW);
        let text = format!("Session: {:?}", state.get());
        d.draw_text(&text, 10, 30, 10, Color::YELLOW);
        let tuning = config.orientation_tuning();
        let mut y = 50;
        for (orientation, tracker, transform) in trackers.iter() {
            let phase = match tracker.phase() {
                DragPhase::Idle => "idle".to_string(),
                DragPhase::Dragging { start, .. } => {
                    format!("dragging from ({:.2}, {:.2}, {:.2})", start.x, start.y, start.z)
                }
            };
            let text = format!(
                "Spin: ({:.3}, {:.3}) | Drag: {}",
                orientation.spin_x(),
                orientation.spin_y(),
                phase
            );
            d.draw_text(&text, 10, y, 10, Color::YELLOW);
            let (angle_x, angle_y) = decompose(transform.rotation, &tuning);
            let text = format!("Applied angles: ({:.3}, {:.3})", angle_x, angle_y);
            d.draw_text(&text, 10, y + 15, 10, Color::YELLOW);
            y += 35;
        }
        let grab = match pointer.grab {
            Some(grab) => format!("Grab: {:?}", grab.target),
            None => "Grab: none".to_string(),
        };
        d.draw_text(&grab, 10, y, 10, Color::YELLOW);
    }
}
