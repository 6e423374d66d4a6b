//! Drag gesture tracking for the globe.
//!
//! A [`DragTracker`] is a two-state machine:
//!
//! - [`DragPhase::Idle`]: no drag in progress.
//! - [`DragPhase::Dragging`]: a drag is active and its start position (in scene
//!   space) has been captured.
//!
//! Every move event measures `delta = current - start` from the original drag
//! start, scales it by the sensitivity and overwrites the spin in
//! [`OrientationState`]: `delta.y` drives `spin_x`, `delta.x` drives `spin_y`.
//! Measuring from the start instead of the previous sample means jitter in
//! intermediate samples never compounds.
//!
//! Ending or cancelling a drag only returns to `Idle`; the last spin stays where the user left
//! it.

use bevy_ecs::prelude::Component;
use glam::Vec3;
use log::{debug, warn};

use crate::components::orientation::OrientationState;

/// Default multiplier from scene-space distance to spin radians.
pub const DEFAULT_SENSITIVITY: f64 = 5.0;

/// How drag deltas are turned into spin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureTuning {
    /// Spin radians per scene unit of drag.
    pub sensitivity: f64,
    /// Start each new drag from the spin left by the previous one instead of
    /// from zero.
    pub resume_from_last: bool,
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            resume_from_last: false,
        }
    }
}

/// Current phase of the drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        /// Scene-space position captured when the drag began.
        start: Vec3,
        /// Spin at the moment the drag began.
        spin_at_start: (f64, f64),
    },
}

/// Gesture state of a draggable globe.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct DragTracker {
    phase: DragPhase,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Start a drag at `position`, restarting any drag already in progress.
    ///
    /// The start sample is applied like any other move, which yields a zero
    /// delta. A non-finite start is ignored: phase and spin stay unchanged and
    /// `false` is returned.
    pub fn begin(
        &mut self,
        position: Vec3,
        state: &mut OrientationState,
        tuning: &GestureTuning,
    ) -> bool {
        if !position.is_finite() {
            warn!("Ignoring drag start at non-finite position {:?}", position);
            return false;
        }
        debug!("Drag started at {:?}", position);
        self.phase = DragPhase::Dragging {
            start: position,
            spin_at_start: state.spin(),
        };
        self.update(position, state, tuning)
    }

    /// Apply a move sample.
    ///
    /// A sample arriving while `Idle` is treated as the start of a new drag.
    /// Returns whether the spin was written; degenerate samples (non-finite
    /// coordinates) leave the state untouched.
    pub fn update(
        &mut self,
        position: Vec3,
        state: &mut OrientationState,
        tuning: &GestureTuning,
    ) -> bool {
        let DragPhase::Dragging {
            start,
            spin_at_start,
        } = self.phase
        else {
            debug!("Move without a drag start, starting implicitly");
            return self.begin(position, state, tuning);
        };

        let delta = position - start;
        let (from_x, from_y) = if tuning.resume_from_last {
            spin_at_start
        } else {
            (0.0, 0.0)
        };
        let spin_x = from_x + f64::from(delta.y) * tuning.sensitivity;
        let spin_y = from_y + f64::from(delta.x) * tuning.sensitivity;
        state.set_spin(spin_x, spin_y)
    }

    /// Finish (or cancel) the current drag. The spin is left as is.
    pub fn end(&mut self) {
        if self.is_dragging() {
            debug!("Drag ended");
        }
        self.phase = DragPhase::Idle;
    }

    /// Abandon the current drag without a release. The spin is left as is.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            debug!("Drag cancelled");
        }
        self.phase = DragPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn starts_idle() {
        let tracker = DragTracker::new();
        assert_eq!(tracker.phase(), DragPhase::Idle);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn begin_captures_start_and_zeroes_delta() {
        let mut tracker = DragTracker::new();
        let mut state = OrientationState::new();
        state.set_spin(2.0, 3.0);
        let tuning = GestureTuning::default();

        assert!(tracker.begin(Vec3::new(0.5, 0.5, 0.0), &mut state, &tuning));
        assert!(tracker.is_dragging());
        assert_eq!(state.spin(), (0.0, 0.0));
    }

    #[test]
    fn move_scales_delta_into_spin() {
        let mut tracker = DragTracker::new();
        let mut state = OrientationState::new();
        let tuning = GestureTuning::default();

        tracker.begin(Vec3::ZERO, &mut state, &tuning);
        tracker.update(Vec3::new(0.1, 0.2, 0.0), &mut state, &tuning);
        assert!(approx_eq(state.spin_x(), 1.0));
        assert!(approx_eq(state.spin_y(), 0.5));

        // Same position again yields the same spin.
        tracker.update(Vec3::new(0.1, 0.2, 0.0), &mut state, &tuning);
        assert!(approx_eq(state.spin_x(), 1.0));
        assert!(approx_eq(state.spin_y(), 0.5));
    }

    #[test]
    fn delta_is_measured_from_drag_start() {
        let mut tracker = DragTracker::new();
        let mut state = OrientationState::new();
        let tuning = GestureTuning::default();

        tracker.begin(Vec3::new(1.0, 1.0, 0.0), &mut state, &tuning);
        tracker.update(Vec3::new(1.5, 0.0, 0.0), &mut state, &tuning);
        tracker.update(Vec3::new(1.2, 1.1, 0.0), &mut state, &tuning);
        assert!(approx_eq(state.spin_x(), 0.5));
        assert!(approx_eq(state.spin_y(), 1.0));
    }

    #[test]
    fn z_movement_is_ignored() {
        let mut tracker = DragTracker::new();
        let mut state = OrientationState::new();
        let tuning = GestureTuning::default();

        tracker.begin(Vec3::ZERO, &mut state, &tuning);
        tracker.update(Vec3::new(0.0, 0.0, 3.0), &mut state, &tuning);
        assert_eq!(state.spin(), (0.0, 0.0));
    }

    #[test]
    fn move_without_start_is_an_implicit_start() {
        let mut tracker = DragTracker::new();
        let mut state = OrientationState::new();
        let tuning = GestureTuning::default();

        assert!(tracker.update(Vec3::new(0.3, 0.3, 0.0), &mut state, &tuning));
        assert!(tracker.is_dragging());
        assert_eq!(state.spin(), (0.0, 0.0));

        tracker.update(Vec3::new(0.4, 0.3, 0.0), &mut state, &tuning);
        assert!(approx_eq(state.spin_y(), 0.5));
    }

    #[test]
    fn end_keeps_spin() {
        let mut tracker = DragTracker::new();
        let mut state = OrientationState::new();
        let tuning = GestureTuning::default();

        tracker.begin(Vec3::ZERO, &mut state, &tuning);
        tracker.update(Vec3::new(0.2, -0.1, 0.0), &mut state, &tuning);
        let before = state;
        tracker.end();
        assert_eq!(tracker.phase(), DragPhase::Idle);
        assert_eq!(state, before);
    }

    #[test]
    fn cancel_returns_to_idle_and_keeps_spin() {
        let mut tracker = DragTracker::new();
        let mut state = OrientationState::new();
        let tuning = GestureTuning::default();

        tracker.begin(Vec3::ZERO, &mut state, &tuning);
        tracker.update(Vec3::new(0.0, 0.3, 0.0), &mut state, &tuning);
        tracker.cancel();
        assert!(!tracker.is_dragging());
        assert!(approx_eq(state.spin_x(), 1.5));
    }

    #[test]
    fn non_finite_start_is_ignored() {
        let mut tracker = DragTracker::new();
        let mut state = OrientationState::new();
        let tuning = GestureTuning::default();

        assert!(!tracker.begin(Vec3::new(f32::NAN, 0.0, 0.0), &mut state, &tuning));
        assert_eq!(tracker.phase(), DragPhase::Idle);
        assert!(!tracker.update(Vec3::new(f32::INFINITY, 0.0, 0.0), &mut state, &tuning));
        assert_eq!(tracker.phase(), DragPhase::Idle);

        // The next valid sample starts the drag and later ones drive spin.
        assert!(tracker.update(Vec3::new(0.0, 0.0, 0.0), &mut state, &tuning));
        assert!(tracker.update(Vec3::new(0.1, 0.2, 0.0), &mut state, &tuning));
        assert!(approx_eq(state.spin_x(), 1.0));
        assert!(approx_eq(state.spin_y(), 0.5));
    }

    #[test]
    fn non_finite_start_keeps_the_drag_in_progress() {
        let mut tracker = DragTracker::new();
        let mut state = OrientationState::new();
        let tuning = GestureTuning::default();

        tracker.begin(Vec3::ZERO, &mut state, &tuning);
        tracker.update(Vec3::new(0.0, 0.1, 0.0), &mut state, &tuning);
        assert!(!tracker.begin(Vec3::new(0.0, f32::NAN, 0.0), &mut state, &tuning));
        assert!(tracker.update(Vec3::new(0.0, 0.2, 0.0), &mut state, &tuning));
        assert!(approx_eq(state.spin_x(), 1.0));
    }

    #[test]
    fn non_finite_sample_is_rejected() {
        let mut tracker = DragTracker::new();
        let mut state = OrientationState::new();
        let tuning = GestureTuning::default();

        tracker.begin(Vec3::ZERO, &mut state, &tuning);
        tracker.update(Vec3::new(0.1, 0.1, 0.0), &mut state, &tuning);
        let before = state;
        assert!(!tracker.update(Vec3::new(f32::NAN, 0.0, 0.0), &mut state, &tuning));
        assert!(!tracker.update(Vec3::new(0.0, f32::INFINITY, 0.0), &mut state, &tuning));
        assert_eq!(state, before);
        assert!(tracker.is_dragging());
    }

    #[test]
    fn custom_sensitivity_is_used() {
        let mut tracker = DragTracker::new();
        let mut state = OrientationState::new();
        let tuning = GestureTuning {
            sensitivity: 2.0,
            ..GestureTuning::default()
        };

        tracker.begin(Vec3::ZERO, &mut state, &tuning);
        tracker.update(Vec3::new(0.25, 0.5, 0.0), &mut state, &tuning);
        assert!(approx_eq(state.spin_x(), 1.0));
        assert!(approx_eq(state.spin_y(), 0.5));
    }

    #[test]
    fn second_drag_restarts_from_zero_by_default() {
        let mut tracker = DragTracker::new();
        let mut state = OrientationState::new();
        let tuning = GestureTuning::default();

        tracker.begin(Vec3::ZERO, &mut state, &tuning);
        tracker.update(Vec3::new(0.0, 0.2, 0.0), &mut state, &tuning);
        tracker.end();
        tracker.begin(Vec3::ZERO, &mut state, &tuning);
        tracker.update(Vec3::new(0.0, 0.1, 0.0), &mut state, &tuning);
        assert!(approx_eq(state.spin_x(), 0.5));
    }

    #[test]
    fn resume_from_last_continues_previous_spin() {
        let mut tracker = DragTracker::new();
        let mut state = OrientationState::new();
        let tuning = GestureTuning {
            resume_from_last: true,
            ..GestureTuning::default()
        };

        tracker.begin(Vec3::ZERO, &mut state, &tuning);
        tracker.update(Vec3::new(0.0, 0.2, 0.0), &mut state, &tuning);
        tracker.end();
        tracker.begin(Vec3::new(1.0, 1.0, 0.0), &mut state, &tuning);
        assert!(approx_eq(state.spin_x(), 1.0));
        tracker.update(Vec3::new(1.0, 1.1, 0.0), &mut state, &tuning);
        assert!(approx_eq(state.spin_x(), 1.5));
    }
}
