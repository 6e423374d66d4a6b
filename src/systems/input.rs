//! Input systems.
//!
//! - [`update_input_state`] reads the keyboard from Raylib each frame, writes
//!   [`InputState`] and emits an [`InputEvent`] for every bound action that was
//!   pressed or released (plus [`SwitchDebugEvent`] for the debug key).
//! - [`update_pointer_state`] reads the mouse and projects it into the scene
//!   through the [`SceneCamera`], filling [`PointerState`].
use bevy_ecs::prelude::*;
use glam::Vec2;
use raylib::ffi::{KeyboardKey, MouseButton};

use crate::events::input::InputEvent;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::camera3d::SceneCamera;
use crate::resources::input::InputState;
use crate::resources::pointer::PointerState;

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let is_key_down = |key: KeyboardKey| rl.is_key_down(key);
    let is_key_pressed = |key: KeyboardKey| rl.is_key_pressed(key);
    let is_key_released = |key: KeyboardKey| rl.is_key_released(key);

    let debug_key = input.mode_debug.key_binding;
    input.mode_debug.update(
        is_key_down(debug_key),
        is_key_pressed(debug_key),
        is_key_released(debug_key),
    );
    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }

    for (action, state) in input.actions_mut() {
        let key = state.key_binding;
        state.update(is_key_down(key), is_key_pressed(key), is_key_released(key));
        if state.just_pressed {
            commands.trigger(InputEvent {
                action,
                pressed: true,
            });
        }
        if state.just_released {
            commands.trigger(InputEvent {
                action,
                pressed: false,
            });
        }
    }
}

/// Poll Raylib for the mouse and update the `PointerState` resource.
///
/// The pointer ray is `None` while the window has no usable size.
pub fn update_pointer_state(
    mut pointer: ResMut<PointerState>,
    rl: NonSend<raylib::RaylibHandle>,
    camera: Res<SceneCamera>,
) {
    let button = MouseButton::MOUSE_BUTTON_LEFT;
    pointer.primary.update(
        rl.is_mouse_button_down(button),
        rl.is_mouse_button_pressed(button),
        rl.is_mouse_button_released(button),
    );

    let mouse = rl.get_mouse_position();
    let viewport = Vec2::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
    pointer.ray = camera.screen_ray(Vec2::new(mouse.x, mouse.y), viewport);
}
