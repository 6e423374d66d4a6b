//! Component for attaching an entity's position to another entity.
//!
//! The location label hangs beneath its globe through a [`StuckTo`]: the
//! follower's translation is the target's translation plus a fixed offset. The
//! offset is not rotated with the target, so the label stays upright and in
//! place while the globe spins.

use bevy_ecs::prelude::{Component, Entity};
use glam::Vec3;

/// Component that makes an entity follow another entity's translation.
///
/// The `stuck_to_entity_system` writes this entity's
/// [`Transform3D`](crate::components::transform3d::Transform3D) translation
/// from the target's translation plus the offset.
#[derive(Debug, Clone, Copy, Component)]
pub struct StuckTo {
    /// The entity to follow.
    pub target: Entity,
    /// Offset from the target's translation, in scene units.
    pub offset: Vec3,
}

impl StuckTo {
    /// Follow `target` with no offset.
    pub fn new(target: Entity) -> Self {
        Self {
            target,
            offset: Vec3::ZERO,
        }
    }

    /// Set the offset from the target's position.
    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    /// Where the follower should sit for a target at `anchor`.
    pub fn position_for(&self, anchor: Vec3) -> Vec3 {
        anchor + self.offset
    }
}
