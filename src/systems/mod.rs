//! Viewer systems.
//!
//! This module groups all ECS systems that read input, drive the gesture and
//! session flow, and render.
//!
//! Submodules overview
//! - [`gesture`] – apply drag events to the dragged globe's tracker
//! - [`input`] – read keyboard and mouse into [`crate::resources::input::InputState`] and [`crate::resources::pointer::PointerState`]
//! - [`orientation`] – rebuild each globe's rotation from base angles and spin
//! - [`pointer`] – pick globes with the pointer ray and emit drag events
//! - [`render`] – draw globes, labels, map cards and debug overlays using Raylib
//! - [`session`] – pending transitions and keyboard navigation
//! - [`stuckto`] – keep labels attached to their globe

pub mod gesture;
pub mod input;
pub mod orientation;
pub mod pointer;
pub mod render;
pub mod session;
pub mod stuckto;
