//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`].
//! - An [`InputEvent`] is triggered for every bound key pressed or released
//!   this frame. Gameplay reacts through the observers in
//!   [`crate::events::input`].
use bevy_ecs::prelude::*;

use crate::events::input::InputEvent;
use crate::resources::input::InputState;

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    for (action, state) in input.actions_mut() {
        let key = state.key_binding;
        state.active = rl.is_key_down(key);
        if rl.is_key_pressed(key) {
            commands.trigger(InputEvent {
                action,
                pressed: true,
            });
        }
        if rl.is_key_released(key) {
            commands.trigger(InputEvent {
                action,
                pressed: false,
            });
        }
    }
}
