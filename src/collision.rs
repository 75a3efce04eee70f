//! Collision query records shared by the picking and platform systems.
//!
//! The collision queries themselves live next to the data they test
//! ([`BoxCollider`](crate::components::boxcollider::BoxCollider)); this module
//! only defines what a query produces and how several results are ordered.
//!
//! - [`RayPick`] – a pick ray built from the cursor and the active camera
//! - [`CollisionHit`] – one intersection result, generic over the hit target
//! - [`sort_nearest_first`] – the ordering every consumer relies on

use raylib::prelude::{Ray, Vector3};

/// A ray cast from the camera through the cursor, valid for one frame.
///
/// The direction is normalized on construction so that ray parameters and
/// world distances are the same thing.
#[derive(Debug, Clone, Copy)]
pub struct RayPick {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl RayPick {
    /// Create a pick ray. A zero-length direction is kept as-is and will not
    /// intersect anything.
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        let direction = if direction.length() > 0.0 {
            direction.normalized()
        } else {
            direction
        };
        Self { origin, direction }
    }

    /// Point along the ray at `distance` from the origin.
    pub fn point_at(&self, distance: f32) -> Vector3 {
        self.origin + self.direction * distance
    }
}

impl From<Ray> for RayPick {
    fn from(ray: Ray) -> Self {
        Self::new(ray.position, ray.direction)
    }
}

/// One intersection between a query shape and scene geometry.
///
/// `target` identifies what was hit: a grid cell index for tile picking, an
/// entity for platform contacts.
#[derive(Debug, Clone, Copy)]
pub struct CollisionHit<T> {
    pub target: T,
    pub distance: f32,
    pub world_position: Vector3,
}

impl<T> CollisionHit<T> {
    pub fn new(target: T, distance: f32, world_position: Vector3) -> Self {
        Self {
            target,
            distance,
            world_position,
        }
    }
}

/// Sort hits by ascending distance.
///
/// The sort is stable, so hits at equal distance keep the order the query
/// produced them in. NaN distances sort last.
pub fn sort_nearest_first<T>(hits: &mut [CollisionHit<T>]) {
    hits.sort_by(|a, b| {
        a.distance
            .is_nan()
            .cmp(&b.distance.is_nan())
            .then(a.distance.total_cmp(&b.distance))
    });
}
