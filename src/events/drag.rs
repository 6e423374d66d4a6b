//! Drag gesture events.
//!
//! The pointer drag system emits a [`DragEvent`] for each phase of a drag on a
//! globe. Positions are in scene space; the host side is responsible for
//! projecting raw pointer input there. The gesture observer in
//! [`crate::systems::gesture`] feeds them into the target's
//! [`DragTracker`](crate::components::dragtracker::DragTracker).

use bevy_ecs::prelude::*;
use glam::Vec3;

/// Phase of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragKind {
    /// The drag began at this position.
    Started(Vec3),
    /// The pointer moved to this position.
    Changed(Vec3),
    /// The pointer was released.
    Ended,
    /// The drag was interrupted without a release.
    Cancelled,
}

/// Event emitted for each drag phase on a target entity.
#[derive(Event, Debug, Clone, Copy)]
pub struct DragEvent {
    /// The entity being dragged.
    pub target: Entity,
    pub kind: DragKind,
}

impl DragEvent {
    pub fn started(target: Entity, position: Vec3) -> Self {
        Self {
            target,
            kind: DragKind::Started(position),
        }
    }

    pub fn changed(target: Entity, position: Vec3) -> Self {
        Self {
            target,
            kind: DragKind::Changed(position),
        }
    }

    pub fn ended(target: Entity) -> Self {
        Self {
            target,
            kind: DragKind::Ended,
        }
    }

    pub fn cancelled(target: Entity) -> Self {
        Self {
            target,
            kind: DragKind::Cancelled,
        }
    }
}
