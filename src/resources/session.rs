//! Viewing session state resources.
//!
//! These resources track the authoritative current session state and any
//! pending transition requested by systems. See
//! `crate::events::session::observe_session_change_event` for how a transition
//! is applied and session hooks are invoked.

use bevy_ecs::prelude::Resource;

/// Discrete high-level states of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionStates {
    #[default]
    None,
    /// No subject open; the catalog is listed.
    Browsing,
    /// A session is open for the catalog entry at this index.
    Viewing(usize),
    Quitting,
}

/// Representation of a requested next state.
///
/// Use [`NextSessionState::set`] to mark a transition as pending; an observer
/// will later apply it and reset the value to [`NextSessionStates::Unchanged`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NextSessionStates {
    #[default]
    Unchanged,
    Pending(SessionStates),
}

/// Authoritative current session state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SessionState {
    current: SessionStates,
}

impl SessionState {
    /// Create a new state initialized to [`SessionStates::None`].
    pub fn new() -> Self {
        Self::default()
    }
    /// Read-only access to the current state.
    pub fn get(&self) -> SessionStates {
        self.current
    }
    /// Update the current state immediately.
    ///
    /// Prefer requesting transitions via [`NextSessionState`] so that session
    /// hooks run.
    pub fn set(&mut self, state: SessionStates) {
        self.current = state;
    }
    /// Index of the subject being viewed, if any.
    pub fn viewing(&self) -> Option<usize> {
        match self.current {
            SessionStates::Viewing(index) => Some(index),
            _ => None,
        }
    }
}

/// Intent to change to a new session state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NextSessionState {
    next: NextSessionStates,
}

impl NextSessionState {
    /// Create a new value initialized to [`NextSessionStates::Unchanged`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current transition request.
    pub fn get(&self) -> NextSessionStates {
        self.next
    }

    /// Request a transition to `next` by marking it as pending.
    ///
    /// `check_pending_state` emits the change event on the next update.
    pub fn set(&mut self, next: SessionStates) {
        self.next = NextSessionStates::Pending(next);
    }

    /// Reset to [`NextSessionStates::Unchanged`].
    pub fn reset(&mut self) {
        self.next = NextSessionStates::Unchanged;
    }
}
