//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the viewer cares about and exposes it
//! to systems via the [`InputState`] resource. Defaults use `N`/`P` to cycle
//! subjects, `R` to reset the spin, `Escape` to go back, and `F11` for the
//! debug overlay.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::events::input::InputAction;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            key_binding,
            ..Self::default()
        }
    }

    pub fn update(&mut self, down: bool, pressed: bool, released: bool) {
        self.active = down;
        self.just_pressed = pressed;
        self.just_released = released;
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

/// Resource capturing the per-frame keyboard state relevant to the viewer.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub next_subject: BoolState,
    pub previous_subject: BoolState,
    pub back: BoolState,
    pub reset_spin: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            next_subject: BoolState::bound_to(KeyboardKey::KEY_N),
            previous_subject: BoolState::bound_to(KeyboardKey::KEY_P),
            back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            reset_spin: BoolState::bound_to(KeyboardKey::KEY_R),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}

impl InputState {
    /// Key states that map to an [`InputAction`].
    pub fn actions_mut(&mut self) -> [(InputAction, &mut BoolState); 4] {
        [
            (InputAction::NextSubject, &mut self.next_subject),
            (InputAction::PreviousSubject, &mut self.previous_subject),
            (InputAction::Back, &mut self.back),
            (InputAction::ResetSpin, &mut self.reset_spin),
        ]
    }
}
