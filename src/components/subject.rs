//! The subject being visualized on the globe.
//!
//! A [`Subject`] is authored data: the display name of an animal and the two
//! base angles that turn its habitat towards the viewer. It is supplied once per
//! session and never mutated afterwards; the live, user-driven part of the
//! orientation lives in [`OrientationState`](crate::components::orientation::OrientationState).

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Read-only subject data attached to the globe of a viewing session.
#[derive(Component, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Human readable name, used for the floating label.
    pub display_name: String,
    /// Base pitch angle in radians.
    pub base_angle_x: f64,
    /// Base yaw angle in radians.
    pub base_angle_y: f64,
    /// Optional scientific name, shown by the flat map card.
    #[serde(default)]
    pub scientific_name: String,
}

impl Subject {
    /// Creates a subject with the given name and base angles (radians).
    pub fn new(display_name: impl Into<String>, base_angle_x: f64, base_angle_y: f64) -> Self {
        Self {
            display_name: display_name.into(),
            base_angle_x,
            base_angle_y,
            scientific_name: String::new(),
        }
    }

    pub fn with_scientific_name(mut self, name: impl Into<String>) -> Self {
        self.scientific_name = name.into();
        self
    }

    /// Text of the label anchored beneath the globe.
    pub fn label_text(&self) -> String {
        format!("Location of {}", self.display_name)
    }

    /// Both base angles are finite.
    pub fn has_finite_angles(&self) -> bool {
        self.base_angle_x.is_finite() && self.base_angle_y.is_finite()
    }

    /// Built-in subject used when no catalog can be loaded.
    pub fn example() -> Self {
        Self::new("Snow Leopard", 0.62, -1.38).with_scientific_name("Panthera uncia")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_text_uses_display_name() {
        let subject = Subject::new("Red Panda", 0.0, 0.0);
        assert_eq!(subject.label_text(), "Location of Red Panda");
    }

    #[test]
    fn deserializes_without_scientific_name() {
        let json = r#"{"display_name":"Okapi","base_angle_x":0.05,"base_angle_y":-0.45}"#;
        let subject: Subject = serde_json::from_str(json).unwrap();
        assert_eq!(subject.display_name, "Okapi");
        assert!(subject.scientific_name.is_empty());
        assert!(subject.has_finite_angles());
    }

    #[test]
    fn non_finite_angles_are_detected() {
        let subject = Subject::new("Broken", f64::NAN, 0.0);
        assert!(!subject.has_finite_angles());
        let subject = Subject::new("Broken", 0.0, f64::INFINITY);
        assert!(!subject.has_finite_angles());
    }
}
