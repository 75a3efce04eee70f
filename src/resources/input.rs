//! Keyboard bindings and level-triggered control flags.
//!
//! [`InputState`] holds the keys the demos listen to and their current
//! held state, refreshed by
//! [`update_input_state`](crate::systems::input::update_input_state).
//! [`ControlFlags`] is the only input the platformer integrator reads; it is
//! written exclusively by the
//! [`observe_control_flags`](crate::events::input::observe_control_flags)
//! observer and copied by value into every step.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::events::input::InputAction;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held.
    pub active: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            key_binding,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Resource capturing the keys relevant to the demos.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub left: BoolState,
    pub right: BoolState,
    pub up: BoolState,
    pub down: BoolState,
    pub back: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            up: BoolState::bound_to(KeyboardKey::KEY_UP),
            down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}

impl InputState {
    /// Bindings paired with the action they raise, in polling order.
    pub fn actions_mut(&mut self) -> [(InputAction, &mut BoolState); 6] {
        [
            (InputAction::Left, &mut self.left),
            (InputAction::Right, &mut self.right),
            (InputAction::Up, &mut self.up),
            (InputAction::Down, &mut self.down),
            (InputAction::Back, &mut self.back),
            (InputAction::ToggleDebug, &mut self.mode_debug),
        ]
    }
}

/// Level-triggered horizontal controls.
///
/// A flag stays true for as long as its key is held. Nothing in the
/// simulation clears these; only input events do.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlFlags {
    pub left: bool,
    pub right: bool,
}

impl ControlFlags {
    /// Set the flag for `action`. Returns false for actions that are not
    /// horizontal controls.
    pub fn set(&mut self, action: InputAction, held: bool) -> bool {
        match action {
            InputAction::Left => self.left = held,
            InputAction::Right => self.right = held,
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.left.key_binding, KeyboardKey::KEY_LEFT);
        assert_eq!(input.right.key_binding, KeyboardKey::KEY_RIGHT);
        assert_eq!(input.up.key_binding, KeyboardKey::KEY_UP);
        assert_eq!(input.down.key_binding, KeyboardKey::KEY_DOWN);
        assert_eq!(input.back.key_binding, KeyboardKey::KEY_ESCAPE);
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F11);
    }

    #[test]
    fn test_inputstate_default_all_inactive() {
        let mut input = InputState::default();
        for (_, state) in input.actions_mut() {
            assert!(!state.active);
        }
    }

    #[test]
    fn test_control_flags_set() {
        let mut flags = ControlFlags::default();
        assert!(flags.set(InputAction::Left, true));
        assert!(flags.left);
        assert!(!flags.right);
        assert!(flags.set(InputAction::Right, true));
        assert!(flags.set(InputAction::Left, false));
        assert_eq!(
            flags,
            ControlFlags {
                left: false,
                right: true
            }
        );
    }

    #[test]
    fn test_control_flags_ignore_other_actions() {
        let mut flags = ControlFlags::default();
        assert!(!flags.set(InputAction::Up, true));
        assert!(!flags.set(InputAction::Back, true));
        assert_eq!(flags, ControlFlags::default());
    }
}
