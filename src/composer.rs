//! Orientation composition.
//!
//! Combines a subject's base orientation with the live spin offset into the
//! single rotation applied to the globe. Everything here is a pure function of
//! its inputs, so the composed rotation can be rebuilt every tick without any
//! drift.
//!
//! Angles are radians stored as `f64`. Both terms and the sum `base + spin`
//! are wrapped into `(-π, π]` before narrowing to `f32`, so spin accumulated
//! over many drags still composes without precision loss.
//!
//! # Composition order
//!
//! The result is the product `pitch * yaw`, where `pitch` rotates about the X
//! axis by `-(base_x + spin_x)` and `yaw` rotates about the Y axis by
//! `base_y + spin_y`. The pitch sign flip converts the authored data into the
//! render space handedness and can be turned off through
//! [`OrientationTuning::invert_pitch`].

use glam::{Mat3, Mat4, Quat, Vec3};
use std::f64::consts::{PI, TAU};

/// Knobs for the pitch/yaw composition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationTuning {
    /// Negate the pitch angle before building the X rotation.
    pub invert_pitch: bool,
}

impl Default for OrientationTuning {
    fn default() -> Self {
        Self { invert_pitch: true }
    }
}

impl OrientationTuning {
    fn pitch_sign(&self) -> f64 {
        if self.invert_pitch { -1.0 } else { 1.0 }
    }
}

/// Wrap an angle in radians into `(-π, π]`.
///
/// Non-finite input collapses to `0.0`.
pub fn wrap_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { PI } else { wrapped }
}

/// `base + spin` wrapped into `(-π, π]`. Each term is wrapped first so the
/// sum of two large finite angles cannot overflow.
fn wrapped_sum(base: f64, spin: f64) -> f64 {
    wrap_angle(wrap_angle(base) + wrap_angle(spin))
}

/// Signed pitch angle (X axis) fed into the rotation, in radians.
pub fn pitch_angle(base_x: f64, spin_x: f64, tuning: &OrientationTuning) -> f32 {
    (tuning.pitch_sign() * wrapped_sum(base_x, spin_x)) as f32
}

/// Yaw angle (Y axis) fed into the rotation, in radians.
pub fn yaw_angle(base_y: f64, spin_y: f64) -> f32 {
    wrapped_sum(base_y, spin_y) as f32
}

/// Compose base orientation and spin offset into a rotation.
pub fn compose(
    base_x: f64,
    base_y: f64,
    spin_x: f64,
    spin_y: f64,
    tuning: &OrientationTuning,
) -> Quat {
    let pitch = Quat::from_rotation_x(pitch_angle(base_x, spin_x, tuning));
    let yaw = Quat::from_rotation_y(yaw_angle(base_y, spin_y));
    pitch * yaw
}

/// Matrix form of [`compose`].
pub fn compose_matrix(
    base_x: f64,
    base_y: f64,
    spin_x: f64,
    spin_y: f64,
    tuning: &OrientationTuning,
) -> Mat4 {
    let pitch = Mat4::from_rotation_x(pitch_angle(base_x, spin_x, tuning));
    let yaw = Mat4::from_rotation_y(yaw_angle(base_y, spin_y));
    pitch * yaw
}

/// Recover the `(x, y)` angle contributions from a composed rotation.
///
/// For `R = Rx(p) * Ry(y)` the first row and second column of the rotation
/// matrix isolate each angle, so the decomposition holds for every pitch and
/// yaw (no gimbal singularity). Angles come back wrapped into `(-π, π]`.
pub fn decompose(rotation: Quat, tuning: &OrientationTuning) -> (f64, f64) {
    let m = Mat3::from_quat(rotation);
    let pitch = f64::from(m.y_axis.z).atan2(f64::from(m.y_axis.y));
    let yaw = f64::from(m.z_axis.x).atan2(f64::from(m.x_axis.x));
    (wrap_angle(tuning.pitch_sign() * pitch), wrap_angle(yaw))
}

/// Unit direction, in the globe's local frame, that a base orientation turns
/// towards the viewer (`+Z`).
pub fn facing_direction(base_x: f64, base_y: f64, tuning: &OrientationTuning) -> Vec3 {
    compose(base_x, base_y, 0.0, 0.0, tuning).inverse() * Vec3::Z
}
