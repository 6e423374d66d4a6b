//! Input action events.
//!
//! This module defines [`InputEvent`] which is triggered when viewer input
//! actions occur (press or release). The [`InputAction`] enum lists all
//! recognized actions.
//!
//! Observers subscribe to these events to react to input without directly
//! reading the [`InputState`](crate::resources::input::InputState) resource.

use bevy_ecs::prelude::*;

/// Enumeration of logical input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Open the next subject in the catalog (default: N).
    NextSubject,
    /// Open the previous subject in the catalog (default: P).
    PreviousSubject,
    /// Close the session, or quit while browsing (default: Escape).
    Back,
    /// Put the globe back to its base orientation (default: R).
    ResetSpin,
    // ToggleDebug, // Debug toggle has its own event
}

/// Event emitted when an input action is pressed or released.
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    /// The input action that triggered this event.
    pub action: InputAction,
    /// Whether the action was pressed (true) or released (false).
    pub pressed: bool,
}
