//! Renderable shapes for the two view strategies.
//!
//! - [`Globe`] – the interactive sphere of the volumetric strategy. Its wire
//!   graticule and the habitat marker are generated here in local space and
//!   transformed by the render pass.
//! - [`MapCard`] – the static equirectangular card of the flat strategy.

use bevy_ecs::prelude::Component;
use glam::{Vec2, Vec3};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Default globe radius in scene units.
pub const DEFAULT_GLOBE_RADIUS: f32 = 0.25;

/// Interactive globe of a volumetric session.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Globe {
    pub radius: f32,
    /// Unit direction (local space) of the subject's habitat.
    pub location: Vec3,
}

impl Globe {
    pub fn new(radius: f32, location: Vec3) -> Self {
        Self { radius, location }
    }

    /// Local-space point of the habitat marker on the surface.
    pub fn marker_point(&self) -> Vec3 {
        self.location * self.radius
    }

    /// Line segments of a latitude/longitude grid in local space.
    ///
    /// `meridians` great half-circles from pole to pole and `parallels` circles
    /// of latitude between the poles, each split into `steps` segments.
    pub fn graticule(&self, meridians: usize, parallels: usize, steps: usize) -> Vec<(Vec3, Vec3)> {
        let steps = steps.max(3);
        let mut segments = Vec::with_capacity((meridians + parallels) * steps);

        for m in 0..meridians {
            let lon = TAU * m as f32 / meridians as f32;
            for s in 0..steps {
                let lat0 = -FRAC_PI_2 + PI * s as f32 / steps as f32;
                let lat1 = -FRAC_PI_2 + PI * (s + 1) as f32 / steps as f32;
                segments.push((self.surface_point(lat0, lon), self.surface_point(lat1, lon)));
            }
        }

        for p in 1..=parallels {
            let lat = -FRAC_PI_2 + PI * p as f32 / (parallels + 1) as f32;
            for s in 0..steps {
                let lon0 = TAU * s as f32 / steps as f32;
                let lon1 = TAU * (s + 1) as f32 / steps as f32;
                segments.push((self.surface_point(lat, lon0), self.surface_point(lat, lon1)));
            }
        }

        segments
    }

    /// Surface point at latitude/longitude (radians); longitude 0 faces `+Z`.
    pub fn surface_point(&self, lat: f32, lon: f32) -> Vec3 {
        Vec3::new(lat.cos() * lon.sin(), lat.sin(), lat.cos() * lon.cos()) * self.radius
    }
}

/// Latitude/longitude (radians) of a unit direction; longitude 0 is `+Z`.
pub fn lat_lon(direction: Vec3) -> (f32, f32) {
    let d = direction.normalize_or_zero();
    (d.y.clamp(-1.0, 1.0).asin(), d.x.atan2(d.z))
}

/// Static map card shown by the flat view strategy.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapCard {
    /// Marker position in card space, `(0,0)` top-left to `(1,1)` bottom-right.
    pub marker: Vec2,
}

impl MapCard {
    /// Card whose marker sits at the given local habitat direction.
    pub fn for_location(location: Vec3) -> Self {
        let (lat, lon) = lat_lon(location);
        Self {
            marker: Vec2::new(0.5 + lon / TAU, 0.5 - lat / PI),
        }
    }
}
