//! ECS components for entities.
//!
//! This module groups the component types attached to the entities of a
//! viewing session: the subject data, the live spin state, gesture tracking,
//! picking, placement, and the label attachment.
//!
//! Submodules overview:
//! - [`collider`] – pointer rays and the spherical pick volume
//! - [`dragtracker`] – Idle/Dragging gesture state machine turning drags into spin
//! - [`globe`] – globe and flat map card shapes
//! - [`label`] – floating text rendered at a scene position
//! - [`orientation`] – session-scoped spin offset with finite-value guard
//! - [`sessionscoped`] – marker for entities despawned when a session ends
//! - [`stuckto`] – attach an entity's translation to another entity with an offset
//! - [`subject`] – read-only subject data (name and base angles)
//! - [`transform3d`] – translation, rotation, and scale in scene space

pub mod collider;
pub mod dragtracker;
pub mod globe;
pub mod label;
pub mod orientation;
pub mod sessionscoped;
pub mod stuckto;
pub mod subject;
pub mod transform3d;
