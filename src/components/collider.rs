//! Pointer rays and sphere picking.
//!
//! The host delivers pointer input as a [`Ray3`] in scene space. A drag can
//! only begin on an entity whose [`SphereCollider`] the press ray hits, and the
//! drag positions that follow are measured on a plane through that first hit.

use bevy_ecs::prelude::Component;
use glam::Vec3;

const PARALLEL_EPSILON: f32 = 1e-6;

/// A half-line in scene space with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray3 {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray3 {
    /// Build a ray; the direction is normalized.
    ///
    /// Returns `None` for a zero or non-finite direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        if !origin.is_finite() {
            return None;
        }
        Some(Self { origin, direction })
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance to the nearest sphere intersection in front of the origin.
    ///
    /// From inside the sphere this is the exit point.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let root = discriminant.sqrt();
        let near = -b - root;
        let far = -b + root;
        if near >= 0.0 {
            Some(near)
        } else if far >= 0.0 {
            Some(far)
        } else {
            None
        }
    }

    /// Distance to the plane through `point` with `normal`, if it lies ahead.
    pub fn intersect_plane(&self, point: Vec3, normal: Vec3) -> Option<f32> {
        let denom = normal.dot(self.direction);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = (point - self.origin).dot(normal) / denom;
        (t >= 0.0 && t.is_finite()).then_some(t)
    }
}

/// Spherical pick volume centered on the entity's translation.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct SphereCollider {
    pub radius: f32,
}

impl SphereCollider {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    /// Distance along `ray` to this collider placed at `center`.
    pub fn hit(&self, center: Vec3, ray: &Ray3) -> Option<f32> {
        ray.intersect_sphere(center, self.radius)
    }
}
