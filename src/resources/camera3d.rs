//! Shared 3D camera resource.
//!
//! Holds the perspective camera the scene is rendered with, and performs the
//! projections between screen pixels and scene space: the pointer ray used
//! for picking and dragging, and the screen position of floating labels.

use bevy_ecs::prelude::Resource;
use glam::{Mat4, Vec2, Vec3, Vec4Swizzles};
use raylib::prelude::{Camera3D, Vector3};

use crate::components::collider::Ray3;

const NEAR_PLANE: f32 = 0.01;
const FAR_PLANE: f32 = 100.0;

/// ECS resource with the active perspective camera.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SceneCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Default for SceneCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 1.2),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy: 45.0,
        }
    }
}

impl SceneCamera {
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection(&self, viewport: Vec2) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fovy.to_radians(),
            viewport.x / viewport.y,
            NEAR_PLANE,
            FAR_PLANE,
        )
    }

    fn view_projection(&self, viewport: Vec2) -> Option<Mat4> {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return None;
        }
        Some(self.projection(viewport) * self.view())
    }

    /// Ray from the camera through a screen pixel (origin top-left).
    pub fn screen_ray(&self, screen: Vec2, viewport: Vec2) -> Option<Ray3> {
        let inverse = self.view_projection(viewport)?.inverse();
        let ndc_x = 2.0 * screen.x / viewport.x - 1.0;
        let ndc_y = 1.0 - 2.0 * screen.y / viewport.y;
        let near = inverse.project_point3(Vec3::new(ndc_x, ndc_y, -1.0));
        let far = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
        Ray3::new(near, far - near)
    }

    /// Screen pixel of a scene point, `None` when it is behind the camera.
    pub fn world_to_screen(&self, point: Vec3, viewport: Vec2) -> Option<Vec2> {
        let clip = self.view_projection(viewport)? * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.xyz() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * viewport.x,
            (1.0 - ndc.y) * 0.5 * viewport.y,
        ))
    }

    /// The same camera as raylib expects it.
    pub fn to_raylib(&self) -> Camera3D {
        Camera3D::perspective(
            to_vector3(self.position),
            to_vector3(self.target),
            to_vector3(self.up),
            self.fovy,
        )
    }
}

/// glam to raylib vector.
pub fn to_vector3(v: Vec3) -> Vector3 {
    Vector3 {
        x: v.x,
        y: v.y,
        z: v.z,
    }
}
