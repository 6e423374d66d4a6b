//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: configuration, the subject catalog,
//! session state, input, and the camera. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `camera3d` – perspective camera and screen/scene projections
//! - `capabilities` – host capabilities and the view strategy chosen from them
//! - `catalog` – subjects loaded from JSON
//! - `debugmode` – presence toggles the debug overlay
//! - `input` – per-frame keyboard state of keys relevant to the viewer
//! - `pointer` – per-frame pointer ray, button state, and active grab
//! - `session` – authoritative and pending session state
//! - `systemsstore` – session hook systems by lifecycle point
//! - `viewerconfig` – INI-backed configuration
pub mod camera3d;
pub mod capabilities;
pub mod catalog;
pub mod debugmode;
pub mod input;
pub mod pointer;
pub mod session;
pub mod systemsstore;
pub mod viewerconfig;
