//! System for entities stuck to other entities.
//!
//! Keeps the location label hanging beneath its globe. Only the translation
//! follows; the follower keeps its own rotation, so the label never spins
//! with the globe.
//!
//! # Related
//!
//! - [`StuckTo`](crate::components::stuckto::StuckTo) – the attachment component

use bevy_ecs::prelude::*;

use crate::components::stuckto::StuckTo;
use crate::components::transform3d::Transform3D;

/// Updates translations of entities with `StuckTo` to follow their targets.
pub fn stuck_to_entity_system(
    mut followers: Query<(&StuckTo, &mut Transform3D)>,
    targets: Query<&Transform3D, Without<StuckTo>>,
) {
    for (stuck_to, mut follower) in followers.iter_mut() {
        if let Ok(target) = targets.get(stuck_to.target) {
            follower.translation = stuck_to.position_for(target.translation);
        }
    }
}
