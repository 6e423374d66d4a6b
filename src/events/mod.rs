//! Event types and observers used by the viewer.
//!
//! This module groups the events exchanged across systems and the
//! corresponding observers that react to them.
//!
//! Submodules:
//! - [`drag`] – drag gesture phases targeted at a globe
//! - [`input`] – logical keyboard actions (subject navigation, spin reset)
//! - [`session`] – session transition notification and observer
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod drag;
pub mod input;
pub mod session;
pub mod switchdebug;
