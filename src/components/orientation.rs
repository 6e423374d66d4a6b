//! Session-scoped spin offset.
//!
//! [`OrientationState`] is the only mutable part of a globe's orientation. It
//! starts at zero whenever a viewing session begins and is overwritten by the
//! gesture tracker while the user drags. Updates that would introduce a
//! non-finite value are rejected so a single degenerate drag sample cannot
//! corrupt the rest of the session.

use bevy_ecs::prelude::Component;
use log::warn;

/// Live spin offset (radians) layered on top of the subject's base angles.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct OrientationState {
    spin_x: f64,
    spin_y: f64,
}

impl OrientationState {
    /// A fresh session state with zero spin.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spin_x(&self) -> f64 {
        self.spin_x
    }

    pub fn spin_y(&self) -> f64 {
        self.spin_y
    }

    pub fn spin(&self) -> (f64, f64) {
        (self.spin_x, self.spin_y)
    }

    /// Overwrite both spin values.
    ///
    /// The update is applied only if both values are finite; otherwise the
    /// previous values are kept and `false` is returned.
    pub fn set_spin(&mut self, spin_x: f64, spin_y: f64) -> bool {
        if !spin_x.is_finite() || !spin_y.is_finite() {
            warn!(
                "Rejected non-finite spin update ({}, {}), keeping ({}, {})",
                spin_x, spin_y, self.spin_x, self.spin_y
            );
            return false;
        }
        self.spin_x = spin_x;
        self.spin_y = spin_y;
        true
    }

    /// Back to zero spin.
    pub fn reset(&mut self) {
        self.spin_x = 0.0;
        self.spin_y = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_zero_spin() {
        let state = OrientationState::new();
        assert_eq!(state.spin(), (0.0, 0.0));
    }

    #[test]
    fn set_spin_overwrites() {
        let mut state = OrientationState::new();
        assert!(state.set_spin(1.0, -2.0));
        assert!(state.set_spin(0.25, 0.5));
        assert_eq!(state.spin(), (0.25, 0.5));
    }

    #[test]
    fn non_finite_update_keeps_previous_values() {
        let mut state = OrientationState::new();
        state.set_spin(0.3, 0.4);
        assert!(!state.set_spin(f64::NAN, 1.0));
        assert!(!state.set_spin(1.0, f64::INFINITY));
        assert!(!state.set_spin(f64::NEG_INFINITY, f64::NAN));
        assert_eq!(state.spin(), (0.3, 0.4));
    }

    #[test]
    fn large_values_are_accepted() {
        let mut state = OrientationState::new();
        assert!(state.set_spin(1.0e12, -1.0e12));
        assert_eq!(state.spin_x(), 1.0e12);
        assert_eq!(state.spin_y(), -1.0e12);
    }

    #[test]
    fn reset_zeroes_spin() {
        let mut state = OrientationState::new();
        state.set_spin(3.0, 4.0);
        state.reset();
        assert_eq!(state, OrientationState::new());
    }
}
