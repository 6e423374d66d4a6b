//! Orientation tick integration tests: pointer picking, drag gestures, the
//! composed globe rotation and the label that follows the globe.

use bevy_ecs::prelude::*;
use glam::{Quat, Vec3};
use std::f64::consts::FRAC_PI_2;

use habitatglobe::components::collider::Ray3;
use habitatglobe::components::dragtracker::DragTracker;
use habitatglobe::components::globe::Globe;
use habitatglobe::components::label::Label;
use habitatglobe::components::orientation::OrientationState;
use habitatglobe::components::subject::Subject;
use habitatglobe::components::transform3d::Transform3D;
use habitatglobe::composer::{OrientationTuning, compose};
use habitatglobe::events::drag::DragEvent;
use habitatglobe::events::session::SessionChangedEvent;
use habitatglobe::game;
use habitatglobe::resources::camera3d::SceneCamera;
use habitatglobe::resources::capabilities::ViewStrategy;
use habitatglobe::resources::catalog::SubjectCatalog;
use habitatglobe::resources::pointer::{ButtonState, PointerState};
use habitatglobe::resources::session::{NextSessionState, SessionState, SessionStates};
use habitatglobe::resources::viewerconfig::ViewerConfig;
use habitatglobe::systems::orientation::apply_orientation_system;
use habitatglobe::systems::pointer::pointer_drag_system;
use habitatglobe::systems::stuckto::stuck_to_entity_system;

const EPSILON: f64 = 1e-5;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(subjects: Vec<Subject>) -> World {
    let mut world = World::new();
    world.insert_resource(ViewerConfig::new());
    world.insert_resource(SubjectCatalog::new(subjects));
    world.insert_resource(ViewStrategy::Volumetric);
    world.insert_resource(SceneCamera::default());
    world.insert_resource(PointerState::default());
    world.insert_resource(SessionState::new());
    world.insert_resource(NextSessionState::new());
    game::install(&mut world);
    world
}

fn open_subject(world: &mut World, index: usize) -> Entity {
    world
        .resource_mut::<NextSessionState>()
        .set(SessionStates::Viewing(index));
    world.trigger(SessionChangedEvent {});
    world.flush();
    globe_entity(world)
}

fn globe_entity(world: &mut World) -> Entity {
    let mut q = world.query_filtered::<Entity, With<Globe>>();
    let globes: Vec<Entity> = q.iter(world).collect();
    assert_eq!(globes.len(), 1, "expected exactly one globe");
    globes[0]
}

fn tick(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(pointer_drag_system);
    schedule.add_systems(apply_orientation_system.after(pointer_drag_system));
    schedule.add_systems(stuck_to_entity_system.after(apply_orientation_system));
    schedule.run(world);
}

/// Pointer ray straight into the screen from `(x, y)` in front of the globe.
fn set_pointer(world: &mut World, x: f32, y: f32, button: ButtonState) {
    let mut pointer = world.resource_mut::<PointerState>();
    pointer.primary = button;
    pointer.ray = Ray3::new(Vec3::new(x, y, 1.2), Vec3::NEG_Z);
}

fn pressed() -> ButtonState {
    ButtonState {
        active: true,
        just_pressed: true,
        just_released: false,
    }
}

fn held() -> ButtonState {
    ButtonState {
        active: true,
        just_pressed: false,
        just_released: false,
    }
}

fn released() -> ButtonState {
    ButtonState {
        active: false,
        just_pressed: false,
        just_released: true,
    }
}

fn rotation_of(world: &World, entity: Entity) -> Quat {
    world.get::<Transform3D>(entity).unwrap().rotation
}

#[test]
fn fresh_session_shows_base_orientation() {
    let subject = Subject::new("Okapi", 0.05, -0.45);
    let mut world = make_world(vec![subject]);
    let globe = open_subject(&mut world, 0);

    tick(&mut world);

    let expected = compose(0.05, -0.45, 0.0, 0.0, &OrientationTuning::default());
    assert!(rotation_of(&world, globe).abs_diff_eq(expected, 1e-6));
    let state = world.get::<OrientationState>(globe).unwrap();
    assert_eq!(state.spin(), (0.0, 0.0));
}

#[test]
fn drag_events_drive_spin_and_rotation() {
    let mut world = make_world(vec![Subject::new("Axolotl", 0.3, 1.7)]);
    let globe = open_subject(&mut world, 0);

    world.trigger(DragEvent::started(globe, Vec3::ZERO));
    world.trigger(DragEvent::changed(globe, Vec3::new(0.1, 0.2, 0.0)));
    tick(&mut world);

    let state = *world.get::<OrientationState>(globe).unwrap();
    assert!(approx_eq(state.spin_x(), 1.0));
    assert!(approx_eq(state.spin_y(), 0.5));

    let expected = compose(
        0.3,
        1.7,
        state.spin_x(),
        state.spin_y(),
        &OrientationTuning::default(),
    );
    assert!(rotation_of(&world, globe).abs_diff_eq(expected, 1e-6));
}

#[test]
fn quarter_turn_spin_pitches_the_globe_back() {
    let mut world = make_world(vec![Subject::new("Origin", 0.0, 0.0)]);
    let globe = open_subject(&mut world, 0);

    // A vertical drag of π/10 scene units is a quarter turn at sensitivity 5.
    let distance = (FRAC_PI_2 / 5.0) as f32;
    world.trigger(DragEvent::started(globe, Vec3::ZERO));
    world.trigger(DragEvent::changed(globe, Vec3::new(0.0, distance, 0.0)));
    tick(&mut world);

    let expected = Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2);
    assert!(rotation_of(&world, globe).abs_diff_eq(expected, 1e-5));
}

#[test]
fn pointer_press_on_globe_starts_a_drag() {
    let mut world = make_world(vec![Subject::new("Okapi", 0.0, 0.0)]);
    let globe = open_subject(&mut world, 0);

    set_pointer(&mut world, 0.0, 0.0, pressed());
    tick(&mut world);

    assert!(world.get::<DragTracker>(globe).unwrap().is_dragging());
    let grab = world.resource::<PointerState>().grab.unwrap();
    assert_eq!(grab.target, globe);
    assert!(grab.plane_point.abs_diff_eq(Vec3::new(0.0, 0.0, 0.25), 1e-5));
    assert!(grab.plane_normal.abs_diff_eq(Vec3::Z, 1e-6));
}

#[test]
fn pointer_drag_produces_spin_until_release() {
    let mut world = make_world(vec![Subject::new("Okapi", 0.0, 0.0)]);
    let globe = open_subject(&mut world, 0);

    set_pointer(&mut world, 0.0, 0.0, pressed());
    tick(&mut world);
    set_pointer(&mut world, 0.1, 0.2, held());
    tick(&mut world);

    let state = *world.get::<OrientationState>(globe).unwrap();
    assert!(approx_eq(state.spin_x(), 1.0));
    assert!(approx_eq(state.spin_y(), 0.5));

    set_pointer(&mut world, 0.1, 0.2, released());
    tick(&mut world);
    assert!(!world.get::<DragTracker>(globe).unwrap().is_dragging());
    assert!(world.resource::<PointerState>().grab.is_none());

    // Spin stays where the drag left it.
    let after = *world.get::<OrientationState>(globe).unwrap();
    assert_eq!(after, state);
}

#[test]
fn press_that_misses_the_globe_starts_nothing() {
    let mut world = make_world(vec![Subject::new("Okapi", 0.0, 0.0)]);
    let globe = open_subject(&mut world, 0);

    set_pointer(&mut world, 0.6, 0.0, pressed());
    tick(&mut world);
    set_pointer(&mut world, 0.7, 0.3, held());
    tick(&mut world);

    assert!(!world.get::<DragTracker>(globe).unwrap().is_dragging());
    assert!(world.resource::<PointerState>().grab.is_none());
    assert_eq!(
        world.get::<OrientationState>(globe).unwrap().spin(),
        (0.0, 0.0)
    );
}

#[test]
fn losing_the_button_without_release_cancels() {
    let mut world = make_world(vec![Subject::new("Okapi", 0.0, 0.0)]);
    let globe = open_subject(&mut world, 0);

    set_pointer(&mut world, 0.0, 0.0, pressed());
    tick(&mut world);
    set_pointer(&mut world, 0.0, 0.1, ButtonState::default());
    tick(&mut world);

    assert!(!world.get::<DragTracker>(globe).unwrap().is_dragging());
    assert!(world.resource::<PointerState>().grab.is_none());
}

#[test]
fn non_finite_drag_sample_keeps_previous_spin() {
    let mut world = make_world(vec![Subject::new("Okapi", 0.0, 0.0)]);
    let globe = open_subject(&mut world, 0);

    world.trigger(DragEvent::started(globe, Vec3::ZERO));
    world.trigger(DragEvent::changed(globe, Vec3::new(0.1, 0.1, 0.0)));
    let before = *world.get::<OrientationState>(globe).unwrap();
    world.trigger(DragEvent::changed(globe, Vec3::new(f32::NAN, 0.3, 0.0)));
    tick(&mut world);

    assert_eq!(*world.get::<OrientationState>(globe).unwrap(), before);
    assert!(rotation_of(&world, globe).is_finite());
}

#[test]
fn label_hangs_below_the_globe_and_does_not_spin() {
    let mut world = make_world(vec![Subject::new("Red Panda", 0.4, -1.5)]);
    let globe = open_subject(&mut world, 0);

    world.trigger(DragEvent::started(globe, Vec3::ZERO));
    world.trigger(DragEvent::changed(globe, Vec3::new(0.3, -0.2, 0.0)));
    world.get_mut::<Transform3D>(globe).unwrap().translation = Vec3::new(0.2, 0.1, 0.0);
    tick(&mut world);

    let mut q = world.query::<(&Label, &Transform3D)>();
    let (label, transform) = q.single(&world).unwrap();
    assert_eq!(label.content, "Location of Red Panda");
    assert!(
        transform
            .translation
            .abs_diff_eq(Vec3::new(0.2, -0.2, 0.0), 1e-6)
    );
    assert_eq!(transform.rotation, Quat::IDENTITY);
}

#[test]
fn non_finite_drag_start_does_not_freeze_the_gesture() {
    let mut world = make_world(vec![Subject::new("Okapi", 0.0, 0.0)]);
    let globe = open_subject(&mut world, 0);

    world.trigger(DragEvent::started(globe, Vec3::new(f32::NAN, 0.0, 0.0)));
    assert!(!world.get::<DragTracker>(globe).unwrap().is_dragging());

    world.trigger(DragEvent::changed(globe, Vec3::ZERO));
    world.trigger(DragEvent::changed(globe, Vec3::new(0.1, 0.2, 0.0)));
    tick(&mut world);

    let state = *world.get::<OrientationState>(globe).unwrap();
    assert!(approx_eq(state.spin_x(), 1.0));
    assert!(approx_eq(state.spin_y(), 0.5));
    let expected = compose(0.0, 0.0, 1.0, 0.5, &OrientationTuning::default());
    assert!(rotation_of(&world, globe).abs_diff_eq(expected, 1e-5));
}

#[test]
fn habitat_marker_faces_the_viewer_at_zero_spin() {
    let mut world = make_world(vec![Subject::new("Kakapo", -0.79, -2.93)]);
    let globe = open_subject(&mut world, 0);
    tick(&mut world);

    let marker = world.get::<Globe>(globe).unwrap().marker_point();
    let model = world.get::<Transform3D>(globe).unwrap().matrix();
    let placed = model.transform_point3(marker);
    assert!(placed.abs_diff_eq(Vec3::new(0.0, 0.0, 0.25), 1e-5), "{placed:?}");
}
