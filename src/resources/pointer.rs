//! Per-frame pointer state in scene space.
//!
//! The input system fills [`PointerState`] from the mouse every frame: the
//! primary button flags and the pointer ray projected into the scene. The
//! pointer drag system reads it and keeps the active grab (which globe is
//! being dragged and the plane drag positions are measured on).

use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::components::collider::Ray3;

/// Button flags for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    /// Held down this frame.
    pub active: bool,
    /// Went down this frame.
    pub just_pressed: bool,
    /// Went up this frame.
    pub just_released: bool,
}

impl ButtonState {
    pub fn update(&mut self, down: bool, pressed: bool, released: bool) {
        self.active = down;
        self.just_pressed = pressed;
        self.just_released = released;
    }
}

/// A drag in progress: the grabbed entity and the drag plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerGrab {
    pub target: Entity,
    /// Point where the press ray first hit the target.
    pub plane_point: Vec3,
    /// Plane normal, facing back along the press ray.
    pub plane_normal: Vec3,
}

/// Resource capturing the pointer for the current frame.
#[derive(Resource, Debug, Clone, Default)]
pub struct PointerState {
    pub primary: ButtonState,
    /// Pointer ray in scene space, `None` when it cannot be projected.
    pub ray: Option<Ray3>,
    pub grab: Option<PointerGrab>,
}
