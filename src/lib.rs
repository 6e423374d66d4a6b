//! Habitat globe library.
//!
//! This module exposes the viewer's ECS components, resources, systems, and
//! events, plus the pure orientation math in [`composer`], for use in
//! integration tests and by the binary.

pub mod components;
pub mod composer;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
