//! Camera tracking.
use bevy_ecs::prelude::*;

use crate::components::inputcontrolled::CameraFollow;
use crate::components::mapposition::MapPosition;
use crate::resources::camera::Camera3DRes;

/// Keep the camera level with the followed entity along `x`.
///
/// Height and distance stay fixed. With several followed entities the last
/// one iterated wins.
pub fn camera_follow_system(
    mut camera: ResMut<Camera3DRes>,
    query: Query<&MapPosition, With<CameraFollow>>,
) {
    for position in query.iter() {
        camera.follow_x(position.pos.x);
    }
}
