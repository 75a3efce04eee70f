//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that debug rendering
//! (collider wireframes, picker and actor state) should be drawn. Remove it
//! to disable debug behavior.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws debug overlays.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
