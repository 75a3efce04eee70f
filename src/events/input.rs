//! Input action events and the observers that react to them.
//!
//! [`update_input_state`](crate::systems::input::update_input_state) triggers
//! an [`InputEvent`] whenever a bound key is pressed or released. Observers:
//!
//! - [`observe_control_flags`] – keeps [`ControlFlags`] in sync with held keys
//! - [`observe_jump_request`] – Up pressed makes player actors jump
//! - [`observe_grid_walker`] – arrow presses move grid walkers one cell
//! - [`observe_app_actions`] – Back stops the frame loop, F11 toggles debug

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::gridwalker::GridWalker;
use crate::components::inputcontrolled::PlayerControlled;
use crate::components::kinematicactor::KinematicActor;
use crate::components::mapposition::MapPosition;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::framecontrol::FrameControl;
use crate::resources::input::ControlFlags;

/// Logical input actions, abstracted from physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Default: Left arrow.
    Left,
    /// Default: Right arrow.
    Right,
    /// Default: Up arrow. Jumps in the platformer.
    Up,
    /// Default: Down arrow.
    Down,
    /// Default: Escape.
    Back,
    /// Default: F11.
    ToggleDebug,
}

/// Event emitted when an input action is pressed or released.
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    pub action: InputAction,
    /// true on press, false on release.
    pub pressed: bool,
}

/// Mirror held horizontal keys into [`ControlFlags`].
pub fn observe_control_flags(trigger: On<InputEvent>, mut flags: ResMut<ControlFlags>) {
    let event = trigger.event();
    flags.set(event.action, event.pressed);
}

/// Request a jump on every player-controlled actor when Up is pressed.
pub fn observe_jump_request(
    trigger: On<InputEvent>,
    mut actors: Query<&mut KinematicActor, With<PlayerControlled>>,
) {
    let event = trigger.event();
    if event.action != InputAction::Up || !event.pressed {
        return;
    }
    for mut actor in actors.iter_mut() {
        actor.request_jump();
    }
}

/// Move grid walkers one cell per arrow press.
pub fn observe_grid_walker(
    trigger: On<InputEvent>,
    mut walkers: Query<(&GridWalker, &mut MapPosition)>,
) {
    let event = trigger.event();
    if !event.pressed {
        return;
    }
    for (walker, mut position) in walkers.iter_mut() {
        if let Some(delta) = walker.delta_for(event.action) {
            position.pos += delta;
        }
    }
}

/// Stop the frame loop on Back, and forward the debug toggle.
pub fn observe_app_actions(
    trigger: On<InputEvent>,
    mut frame: ResMut<FrameControl>,
    mut commands: Commands,
) {
    let event = trigger.event();
    if !event.pressed {
        return;
    }
    match event.action {
        InputAction::Back => {
            info!("Quit requested");
            frame.stop();
        }
        InputAction::ToggleDebug => commands.trigger(SwitchDebugEvent {}),
        _ => {}
    }
}
