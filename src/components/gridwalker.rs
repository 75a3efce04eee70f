//! Grid walker component.
//!
//! An entity with [`GridWalker`] moves a fixed step across the tile grid on
//! each arrow-key press (see
//! [`observe_grid_walker`](crate::events::input::observe_grid_walker)).
//! Left/right move along `x`, up/down along `z`.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

use crate::events::input::InputAction;

#[derive(Component, Clone, Copy, Debug)]
pub struct GridWalker {
    /// Distance moved per press.
    pub step: f32,
}

impl Default for GridWalker {
    fn default() -> Self {
        Self { step: 1.0 }
    }
}

impl GridWalker {
    pub fn new(step: f32) -> Self {
        Self { step }
    }

    /// Displacement for one press of `action`, if it moves the walker.
    pub fn delta_for(&self, action: InputAction) -> Option<Vector3> {
        let s = self.step;
        match action {
            InputAction::Left => Some(Vector3::new(-s, 0.0, 0.0)),
            InputAction::Right => Some(Vector3::new(s, 0.0, 0.0)),
            InputAction::Up => Some(Vector3::new(0.0, 0.0, s)),
            InputAction::Down => Some(Vector3::new(0.0, 0.0, -s)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_for_arrows() {
        let walker = GridWalker::default();
        let left = walker.delta_for(InputAction::Left).unwrap();
        assert_eq!((left.x, left.y, left.z), (-1.0, 0.0, 0.0));
        let up = walker.delta_for(InputAction::Up).unwrap();
        assert_eq!((up.x, up.y, up.z), (0.0, 0.0, 1.0));
        let down = GridWalker::new(2.0).delta_for(InputAction::Down).unwrap();
        assert_eq!((down.x, down.y, down.z), (0.0, 0.0, -2.0));
    }

    #[test]
    fn test_delta_for_non_movement() {
        let walker = GridWalker::default();
        assert!(walker.delta_for(InputAction::Back).is_none());
        assert!(walker.delta_for(InputAction::ToggleDebug).is_none());
    }
}
