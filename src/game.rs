//! Viewer setup and session hooks.
//!
//! [`install`] wires the observers and the session hook systems into a
//! [`World`] that already holds the viewer resources. The hooks themselves
//! spawn and despawn the renderables of a viewing session:
//!
//! - [`enter_viewing`] builds the presentation chosen by the
//!   [`ViewStrategy`]: a draggable globe with a floating label, or a flat map
//!   card with the same label.
//! - [`exit_viewing`] despawns every [`SessionScoped`] entity, which discards
//!   the session's spin and any drag in progress.
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use glam::Vec3;
use log::{info, warn};
use raylib::prelude::Color;

use crate::components::collider::SphereCollider;
use crate::components::dragtracker::DragTracker;
use crate::components::globe::{Globe, MapCard};
use crate::components::label::{LABEL_FONT_SIZE, Label};
use crate::components::orientation::OrientationState;
use crate::components::sessionscoped::SessionScoped;
use crate::components::stuckto::StuckTo;
use crate::components::transform3d::Transform3D;
use crate::composer::{compose, facing_direction};
use crate::events::session::observe_session_change_event;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::capabilities::ViewStrategy;
use crate::resources::catalog::SubjectCatalog;
use crate::resources::session::{NextSessionState, SessionState, SessionStates};
use crate::resources::systemsstore::{SessionHook, SystemsStore};
use crate::resources::viewerconfig::ViewerConfig;
use crate::systems::gesture::drag_observer;
use crate::systems::session::navigation_observer;

/// Register observers and session hooks.
///
/// Expects the viewer resources (config, catalog, strategy, session state,
/// pointer) to be present already.
pub fn install(world: &mut World) {
    let mut systems_store = SystemsStore::new();
    let enter_viewing_id = world.register_system(enter_viewing);
    systems_store.insert(SessionHook::EnterViewing, enter_viewing_id);
    let exit_viewing_id = world.register_system(exit_viewing);
    systems_store.insert(SessionHook::ExitViewing, exit_viewing_id);
    world.insert_resource(systems_store);

    world.spawn(Observer::new(observe_session_change_event));
    world.spawn(Observer::new(drag_observer));
    world.spawn(Observer::new(navigation_observer));
    world.spawn(Observer::new(switch_debug_observer));
    world.flush();
}

/// Spawn the renderables for the subject being viewed.
///
/// Falls back to browsing when the index does not name a catalog entry.
pub fn enter_viewing(
    mut commands: Commands,
    state: Res<SessionState>,
    mut next_state: ResMut<NextSessionState>,
    catalog: Res<SubjectCatalog>,
    strategy: Res<ViewStrategy>,
    config: Res<ViewerConfig>,
) {
    let Some(index) = state.viewing() else {
        warn!("enter_viewing ran outside a viewing session ({:?})", state.get());
        return;
    };
    let Some(subject) = catalog.get(index) else {
        warn!("No subject at index {}, back to browsing", index);
        next_state.set(SessionStates::Browsing);
        return;
    };

    let tuning = config.orientation_tuning();
    let location = facing_direction(subject.base_angle_x, subject.base_angle_y, &tuning);
    let label = Label::new(subject.label_text(), LABEL_FONT_SIZE, Color::RAYWHITE);

    match *strategy {
        ViewStrategy::Volumetric => {
            let rotation = compose(
                subject.base_angle_x,
                subject.base_angle_y,
                0.0,
                0.0,
                &tuning,
            );
            let globe = commands
                .spawn((
                    SessionScoped,
                    subject.clone(),
                    Globe::new(config.globe_radius, location),
                    SphereCollider::new(config.globe_radius),
                    Transform3D::from_translation(Vec3::ZERO).with_rotation(rotation),
                    OrientationState::new(),
                    DragTracker::new(),
                ))
                .id();
            let offset = Vec3::new(0.0, config.label_offset_y, 0.0);
            commands.spawn((
                SessionScoped,
                label,
                StuckTo::new(globe).with_offset(offset),
                Transform3D::from_translation(offset),
            ));
        }
        ViewStrategy::Flat => {
            commands.spawn((
                SessionScoped,
                subject.clone(),
                MapCard::for_location(location),
                label,
            ));
        }
    }
    info!("Viewing {} ({:?} strategy)", subject.display_name, *strategy);
}

/// Despawn everything the current session owns.
pub fn exit_viewing(mut commands: Commands, scoped: Query<Entity, With<SessionScoped>>) {
    let mut count = 0;
    for entity in scoped.iter() {
        commands.entity(entity).despawn();
        count += 1;
    }
    info!("Closed viewing session, despawned {} entities", count);
}
