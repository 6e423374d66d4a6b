//! Pointer picking and drag event emission.
//!
//! Turns the per-frame [`PointerState`] into [`DragEvent`]s targeted at a
//! draggable globe:
//!
//! - On press, the pointer ray is tested against every entity with a
//!   [`SphereCollider`] and a [`DragTracker`]. The nearest hit becomes the grab
//!   target and a drag plane is set up through the hit point, facing back
//!   along the ray. Presses that miss every collider start nothing.
//! - While the button is held, the ray is intersected with that plane and the
//!   scene-space point is reported as a move.
//! - Releasing ends the drag. Losing the button without a release (focus
//!   loss) or losing the target cancels it.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::collider::SphereCollider;
use crate::components::dragtracker::DragTracker;
use crate::components::transform3d::Transform3D;
use crate::events::drag::DragEvent;
use crate::resources::pointer::{PointerGrab, PointerState};

pub fn pointer_drag_system(
    mut pointer: ResMut<PointerState>,
    draggables: Query<(Entity, &Transform3D, &SphereCollider), With<DragTracker>>,
    mut commands: Commands,
) {
    if let Some(grab) = pointer.grab
        && !draggables.contains(grab.target)
    {
        debug!("Drag target {:?} is gone, dropping grab", grab.target);
        pointer.grab = None;
    }

    let primary = pointer.primary;
    let ray = pointer.ray;

    if primary.just_pressed {
        if let Some(stale) = pointer.grab.take() {
            commands.trigger(DragEvent::cancelled(stale.target));
        }
        let Some(ray) = ray else {
            return;
        };
        let nearest = draggables
            .iter()
            .filter_map(|(entity, transform, collider)| {
                collider
                    .hit(transform.translation, &ray)
                    .map(|t| (entity, t))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1));
        if let Some((target, t)) = nearest {
            let hit = ray.at(t);
            pointer.grab = Some(PointerGrab {
                target,
                plane_point: hit,
                plane_normal: -ray.direction,
            });
            commands.trigger(DragEvent::started(target, hit));
        }
        return;
    }

    let Some(grab) = pointer.grab else {
        return;
    };

    if primary.active {
        if let Some(ray) = ray
            && let Some(t) = ray.intersect_plane(grab.plane_point, grab.plane_normal)
        {
            commands.trigger(DragEvent::changed(grab.target, ray.at(t)));
        }
    } else if primary.just_released {
        pointer.grab = None;
        commands.trigger(DragEvent::ended(grab.target));
    } else {
        pointer.grab = None;
        commands.trigger(DragEvent::cancelled(grab.target));
    }
}
