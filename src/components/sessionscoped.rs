//! Session ownership marker.
//!
//! Everything spawned for a viewing session carries [`SessionScoped`] and is
//! despawned when the session ends. Nothing from a previous session (spin,
//! in-progress drag, label) survives into the next one.

use bevy_ecs::prelude::Component;

/// Tag component for entities owned by the active viewing session.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct SessionScoped;
