//! Continue/stop signal for the frame loop.
//!
//! The main loop keeps running the update schedule while this resource says
//! [`FrameControl::Continue`]. Setting it to [`FrameControl::Stop`] is the only
//! way (besides closing the window) to end a scene.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameControl {
    #[default]
    Continue,
    Stop,
}

impl FrameControl {
    pub fn should_continue(&self) -> bool {
        matches!(self, FrameControl::Continue)
    }

    pub fn stop(&mut self) {
        *self = FrameControl::Stop;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_continues() {
        assert!(FrameControl::default().should_continue());
    }

    #[test]
    fn test_stop() {
        let mut frame = FrameControl::default();
        frame.stop();
        assert!(!frame.should_continue());
        assert_eq!(frame, FrameControl::Stop);
    }
}
