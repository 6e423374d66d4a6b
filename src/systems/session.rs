//! Session flow systems.
//!
//! - [`check_pending_state`] emits a [`SessionChangedEvent`] whenever a
//!   transition has been requested through [`NextSessionState`].
//! - [`navigation_observer`] maps keyboard actions to session transitions and
//!   to the spin reset of the open session.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::dragtracker::DragTracker;
use crate::components::orientation::OrientationState;
use crate::events::input::{InputAction, InputEvent};
use crate::events::session::SessionChangedEvent;
use crate::resources::catalog::SubjectCatalog;
use crate::resources::pointer::PointerState;
use crate::resources::session::{NextSessionState, NextSessionStates, SessionState, SessionStates};

pub fn check_pending_state(mut commands: Commands, next_state: Res<NextSessionState>) {
    if let NextSessionStates::Pending(_new_state) = next_state.get() {
        commands.trigger(SessionChangedEvent {});
    }
}

pub fn state_is_viewing(state: Res<SessionState>) -> bool {
    matches!(state.get(), SessionStates::Viewing(_))
}

/// Observer reacting to key presses.
///
/// | Action | Browsing | Viewing(i) |
/// |---|---|---|
/// | next | open first subject | open subject after `i` |
/// | previous | open last subject | open subject before `i` |
/// | back | quit | back to browsing |
/// | reset spin | - | zero spin, end drags |
pub fn navigation_observer(
    trigger: On<InputEvent>,
    state: Res<SessionState>,
    mut next_state: ResMut<NextSessionState>,
    catalog: Res<SubjectCatalog>,
    mut pointer: ResMut<PointerState>,
    mut globes: Query<(&mut OrientationState, &mut DragTracker)>,
) {
    let event = trigger.event();
    if !event.pressed {
        return;
    }

    let current = state.get();
    match (event.action, current) {
        (InputAction::NextSubject, SessionStates::Viewing(index)) => {
            if let Some(next) = catalog.next_index(index) {
                next_state.set(SessionStates::Viewing(next));
            }
        }
        (InputAction::PreviousSubject, SessionStates::Viewing(index)) => {
            if let Some(previous) = catalog.previous_index(index) {
                next_state.set(SessionStates::Viewing(previous));
            }
        }
        (InputAction::NextSubject, SessionStates::Browsing) => {
            if !catalog.is_empty() {
                next_state.set(SessionStates::Viewing(0));
            }
        }
        (InputAction::PreviousSubject, SessionStates::Browsing) => {
            if !catalog.is_empty() {
                next_state.set(SessionStates::Viewing(catalog.len() - 1));
            }
        }
        (InputAction::Back, SessionStates::Viewing(_)) => {
            next_state.set(SessionStates::Browsing);
        }
        (InputAction::Back, SessionStates::Browsing) => {
            info!("Back pressed while browsing, quitting");
            next_state.set(SessionStates::Quitting);
        }
        (InputAction::ResetSpin, SessionStates::Viewing(_)) => {
            pointer.grab = None;
            for (mut orientation, mut tracker) in globes.iter_mut() {
                tracker.end();
                orientation.reset();
            }
            debug!("Spin reset");
        }
        (action, state) => {
            debug!("{:?} has no effect in {:?}", action, state);
        }
    }
}
