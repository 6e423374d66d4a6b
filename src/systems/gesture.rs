//! Gesture observer.
//!
//! Feeds [`DragEvent`]s into the target's [`DragTracker`], which writes the
//! resulting spin into the target's [`OrientationState`].
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::dragtracker::DragTracker;
use crate::components::orientation::OrientationState;
use crate::events::drag::{DragEvent, DragKind};
use crate::resources::viewerconfig::ViewerConfig;

/// Observer that applies drag phases to the dragged globe.
///
/// Events whose target has no tracker (despawned mid-drag, or a flat
/// session) are ignored.
pub fn drag_observer(
    trigger: On<DragEvent>,
    mut trackers: Query<(&mut DragTracker, &mut OrientationState)>,
    config: Res<ViewerConfig>,
) {
    let event = trigger.event();
    let Ok((mut tracker, mut state)) = trackers.get_mut(event.target) else {
        debug!("Drag event for {:?} without a tracker, ignoring", event.target);
        return;
    };
    let tuning = config.gesture_tuning();
    match event.kind {
        DragKind::Started(position) => {
            tracker.begin(position, &mut state, &tuning);
        }
        DragKind::Changed(position) => {
            tracker.update(position, &mut state, &tuning);
        }
        DragKind::Ended => tracker.end(),
        DragKind::Cancelled => tracker.cancel(),
    }
}
