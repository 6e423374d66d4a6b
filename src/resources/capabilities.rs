//! Host capabilities and the view strategy derived from them.
//!
//! Opening a subject's location view has two presentations: an interactive
//! volumetric globe, or a flat map card for hosts without 3D interaction. The
//! choice is made once, from the host's capabilities, when the world is built;
//! it never depends on the subject being shown.

use bevy_ecs::prelude::Resource;
use log::info;

/// What the host environment can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// The host can render 3D content and deliver drags in scene space.
    pub volumetric_interaction: bool,
}

impl HostCapabilities {
    /// Capabilities of the raylib host. 3D interaction is available unless
    /// the flat presentation is forced by the user.
    pub fn detect(force_flat: bool) -> Self {
        let caps = Self {
            volumetric_interaction: !force_flat,
        };
        info!("Host capabilities: {:?}", caps);
        caps
    }
}

/// How a subject's location is presented.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStrategy {
    /// Interactive globe with drag-to-spin and a floating label.
    Volumetric,
    /// Static map card with the same label, no gesture tracking.
    Flat,
}

impl ViewStrategy {
    pub fn select(caps: &HostCapabilities) -> Self {
        if caps.volumetric_interaction {
            ViewStrategy::Volumetric
        } else {
            ViewStrategy::Flat
        }
    }
}
