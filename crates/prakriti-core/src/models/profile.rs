//! Profile model for the active session.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Profile validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Name is required")]
    EmptyName,

    #[error("Enter a valid age")]
    InvalidAge,
}

/// The active user's profile. At most one exists per session; saving a new
/// one replaces the old wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Free-form health notes
    #[serde(rename = "healthNotes", default)]
    pub health_notes: Option<String>,
}

impl Profile {
    /// Create a profile with required fields.
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
            health_notes: None,
        }
    }

    /// Check the form-level constraints: non-empty name, positive age.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::EmptyName);
        }
        if self.age == 0 {
            return Err(ProfileError::InvalidAge);
        }
        Ok(())
    }
}
