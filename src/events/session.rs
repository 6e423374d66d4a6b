//! Session transition event and observer.
//!
//! Systems request a change of [`SessionStates`] by updating
//! [`NextSessionState`]. Emitting a [`SessionChangedEvent`] then triggers the
//! observer in this module, which applies the transition to [`SessionState`]
//! and runs the exit/enter hooks stored in
//! [`crate::resources::systemsstore::SystemsStore`].
//!
//! Leaving a viewing session always despawns its entities, so re-entering a
//! subject (even the same one) starts from zero spin with an idle tracker.
use crate::resources::session::NextSessionStates::{Pending, Unchanged};
use crate::resources::session::{NextSessionState, SessionState, SessionStates};
use crate::resources::systemsstore::{SessionHook, SystemsStore};
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending session transition should be
/// applied.
///
/// If [`NextSessionState`] holds [`Pending`], the observer updates
/// [`SessionState`], runs the hooks, and clears the pending value; if it is
/// [`Unchanged`], nothing happens.
#[derive(Event, Debug, Clone, Copy)]
pub struct SessionChangedEvent {}

/// Observer that applies a pending session transition.
pub fn observe_session_change_event(
    _trigger: On<SessionChangedEvent>,
    mut commands: Commands,
    mut next_state: ResMut<NextSessionState>,
    mut state: ResMut<SessionState>,
    systems_store: Res<SystemsStore>,
) {
    match next_state.get() {
        Pending(new_state) => {
            let old_state = state.get();
            info!("Transitioning from {:?} to {:?}", old_state, new_state);
            state.set(new_state);
            next_state.reset();
            on_state_exit(old_state, &mut commands, &systems_store);
            on_state_enter(new_state, &mut commands, &systems_store);
        }
        Unchanged => {
            debug!("No session change pending.");
        }
    }
}

fn run_hook(hook: SessionHook, commands: &mut Commands, systems_store: &SystemsStore) {
    match systems_store.get(hook) {
        Some(id) => commands.run_system(id),
        None => warn!("No system registered for {:?}", hook),
    }
}

/// Internal: run state-specific "enter" systems for the given state.
fn on_state_enter(state: SessionStates, commands: &mut Commands, systems_store: &SystemsStore) {
    match state {
        SessionStates::None => debug!("Entered None state"),
        SessionStates::Browsing => debug!("Entered Browsing state"),
        SessionStates::Viewing(index) => {
            debug!("Entering viewing session for subject #{}", index);
            run_hook(SessionHook::EnterViewing, commands, systems_store);
        }
        SessionStates::Quitting => info!("Quitting"),
    }
}

/// Internal: run state-specific "exit" systems for the given state.
fn on_state_exit(state: SessionStates, commands: &mut Commands, systems_store: &SystemsStore) {
    match state {
        SessionStates::Viewing(index) => {
            debug!("Leaving viewing session for subject #{}", index);
            run_hook(SessionHook::ExitViewing, commands, systems_store);
        }
        other => debug!("Exited {:?} state", other),
    }
}
