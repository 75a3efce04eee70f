//! Cursor pick ray for the current frame.
//!
//! `None` when the mouse is not over the window; the picker then skips hit
//! testing for the frame.

use bevy_ecs::prelude::Resource;

use crate::collision::RayPick;

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct CursorRay(pub Option<RayPick>);
