//! Catalog of viewable subjects.
//!
//! Loaded once at startup from a JSON array of
//! [`Subject`](crate::components::subject::Subject) records:
//!
//! ```json
//! [
//!   { "display_name": "Snow Leopard", "base_angle_x": 0.62, "base_angle_y": -1.38,
//!     "scientific_name": "Panthera uncia" }
//! ]
//! ```
//!
//! Entries with non-finite angles are dropped at load time so a session can
//! never start from an invalid base orientation.

use bevy_ecs::prelude::Resource;
use log::{info, warn};
use std::path::Path;

use crate::components::subject::Subject;

/// Ordered list of subjects the user can cycle through.
#[derive(Resource, Debug, Clone, Default)]
pub struct SubjectCatalog {
    subjects: Vec<Subject>,
}

impl SubjectCatalog {
    /// Build a catalog, dropping subjects with non-finite angles.
    pub fn new(subjects: Vec<Subject>) -> Self {
        let subjects = subjects
            .into_iter()
            .filter(|s| {
                let ok = s.has_finite_angles();
                if !ok {
                    warn!("Dropping subject '{}' with non-finite angles", s.display_name);
                }
                ok
            })
            .collect();
        Self { subjects }
    }

    /// Catalog holding only [`Subject::example`].
    pub fn example() -> Self {
        Self::new(vec![Subject::example()])
    }

    pub fn from_json_str(json: &str) -> Result<Self, String> {
        let subjects: Vec<Subject> =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse catalog: {}", e))?;
        let catalog = Self::new(subjects);
        if catalog.is_empty() {
            return Err("Catalog contains no valid subjects".to_string());
        }
        Ok(catalog)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read catalog {}: {}", path.display(), e))?;
        let catalog = Self::from_json_str(&json)?;
        info!("Loaded {} subjects from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Subject> {
        self.subjects.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Subject> {
        self.subjects.iter()
    }

    /// Index of the subject with this display name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.subjects
            .iter()
            .position(|s| s.display_name.eq_ignore_ascii_case(name))
    }

    /// Index after `current`, wrapping around.
    pub fn next_index(&self, current: usize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        Some((current + 1) % self.len())
    }

    /// Index before `current`, wrapping around.
    pub fn previous_index(&self, current: usize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let current = current % self.len();
        Some((current + self.len() - 1) % self.len())
    }
}
