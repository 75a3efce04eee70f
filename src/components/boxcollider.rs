//! Axis-aligned box collider.
//!
//! A [`BoxCollider`] is an AABB expressed relative to its owner's position:
//! `min = position + offset`, `max = min + size`. It answers the two queries
//! the demos need: ray picking against tiles and box contact against
//! platforms.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

use crate::collision::RayPick;

/// Direction components smaller than this are treated as parallel to a slab.
const PARALLEL_EPSILON: f32 = 1e-8;

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector3,
    pub offset: Vector3,
}

impl BoxCollider {
    /// Create a BoxCollider with given size, anchored at its owner's position.
    pub fn new(width: f32, depth: f32, height: f32) -> Self {
        Self {
            size: Vector3::new(width, depth, height),
            offset: Vector3::zero(),
        }
    }

    /// Create a BoxCollider from local-space corners.
    pub fn from_bounds(min: Vector3, max: Vector3) -> Self {
        Self {
            size: max - min,
            offset: min,
        }
    }

    /// Create a BoxCollider of the given size centred on its owner's position.
    pub fn centered(size: Vector3) -> Self {
        Self {
            size,
            offset: size * -0.5,
        }
    }

    /// Modify BoxCollider with given offset
    pub fn with_offset(mut self, offset: Vector3) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vector3) -> (Vector3, Vector3) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        let min = Vector3::new(p0.x.min(p1.x), p0.y.min(p1.y), p0.z.min(p1.z));
        let max = Vector3::new(p0.x.max(p1.x), p0.y.max(p1.y), p0.z.max(p1.z));
        (min, max)
    }

    /// World-space centre and (absolute) extents, as the renderer wants them.
    pub fn center_and_size(&self, position: Vector3) -> (Vector3, Vector3) {
        let (min, max) = self.aabb(position);
        ((min + max) * 0.5, max - min)
    }

    /// Height of the top face in world space.
    pub fn top(&self, position: Vector3) -> f32 {
        self.aabb(position).1.z
    }

    /// AABB vs AABB overlap test (strict: faces in contact do not overlap).
    pub fn overlaps(&self, position: Vector3, other: &Self, other_position: Vector3) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x
            && max_a.x > min_b.x
            && min_a.y < max_b.y
            && max_a.y > min_b.y
            && min_a.z < max_b.z
            && max_a.z > min_b.z
    }

    /// AABB vs AABB contact test. Faces in contact count, so a box resting
    /// exactly on top of another keeps reporting the contact.
    pub fn touches(&self, position: Vector3, other: &Self, other_position: Vector3) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x <= max_b.x
            && max_a.x >= min_b.x
            && min_a.y <= max_b.y
            && max_a.y >= min_b.y
            && min_a.z <= max_b.z
            && max_a.z >= min_b.z
    }

    /// Point containment in world space.
    pub fn contains_point(&self, position: Vector3, point: Vector3) -> bool {
        let (min, max) = self.aabb(position);
        point.x >= min.x
            && point.x <= max.x
            && point.y >= min.y
            && point.y <= max.y
            && point.z >= min.z
            && point.z <= max.z
    }

    /// Distance along `ray` to the first intersection with this box, if any.
    ///
    /// Slab test. A ray starting inside the box hits at distance 0. Boxes
    /// entirely behind the origin are not hit.
    pub fn ray_distance(&self, position: Vector3, ray: &RayPick) -> Option<f32> {
        let (min, max) = self.aabb(position);
        let origin = [ray.origin.x, ray.origin.y, ray.origin.z];
        let dir = [ray.direction.x, ray.direction.y, ray.direction.z];
        let lo = [min.x, min.y, min.z];
        let hi = [max.x, max.y, max.z];

        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;
        for axis in 0..3 {
            if dir[axis].abs() < PARALLEL_EPSILON {
                if origin[axis] < lo[axis] || origin[axis] > hi[axis] {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / dir[axis];
            let mut t0 = (lo[axis] - origin[axis]) * inv;
            let mut t1 = (hi[axis] - origin[axis]) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_near = t_near.max(t0);
            t_far = t_far.min(t1);
            if t_near > t_far {
                return None;
            }
        }

        if t_far < 0.0 {
            return None;
        }
        if t_near == f32::NEG_INFINITY {
            // Zero-length direction: only "hits" when sitting inside.
            return Some(0.0);
        }
        Some(t_near.max(0.0))
    }
}
