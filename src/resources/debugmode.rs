//! Debug overlay toggle resource.
//!
//! The presence of this resource enables the on-screen diagnostics (frame
//! rate, spin values, drag phase). Remove it to hide them.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the render pass draws the debug overlay.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode;
