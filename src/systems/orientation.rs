//! Applies the composed orientation to every globe.
//!
//! The rotation is rebuilt from the subject's base angles and the current
//! spin each frame, so the transform never accumulates error.
use bevy_ecs::prelude::*;

use crate::components::globe::Globe;
use crate::components::orientation::OrientationState;
use crate::components::subject::Subject;
use crate::components::transform3d::Transform3D;
use crate::composer::compose;
use crate::resources::viewerconfig::ViewerConfig;

pub fn apply_orientation_system(
    mut globes: Query<(&Subject, &OrientationState, &mut Transform3D), With<Globe>>,
    config: Res<ViewerConfig>,
) {
    let tuning = config.orientation_tuning();
    for (subject, state, mut transform) in globes.iter_mut() {
        transform.rotation = compose(
            subject.base_angle_x,
            subject.base_angle_y,
            state.spin_x(),
            state.spin_y(),
            &tuning,
        );
    }
}
