/// User record and its update payload

use crate::models::{
    patch::Patch,
    validation::{require_email, require_non_empty, ValidationError},
};
use serde::{Deserialize, Serialize};

/// A registered user
///
/// Stored as-is in the users container; `id` doubles as partition key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (e.g., "u1"), immutable after creation
    pub id: String,
    /// Display name (e.g., "Juan")
    pub name: String,
    /// Contact address, must be a syntactically valid email
    pub email: String,
    /// Age in years
    pub age: i64,
}

impl User {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("id", &self.id)?;
        require_email("email", &self.email)
    }
}

/// Partial update for a user; only present keys are applied
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    /// Accepted only when equal to the path id
    #[serde(default)]
    pub id: Patch<String>,
    #[serde(default)]
    pub name: Patch<String>,
    /// Re-checked for email syntax when present
    #[serde(default)]
    pub email: Patch<String>,
    #[serde(default)]
    pub age: Patch<i64>,
}

impl UserPatch {
    /// Check the present fields; `id` may only repeat the target id
    pub fn validate(&self, target_id: &str) -> Result<(), ValidationError> {
        if let Some(id) = self.id.as_ref() {
            if id != target_id {
                return Err(ValidationError::new("id", "user id cannot be changed"));
            }
        }
        if let Some(email) = self.email.as_ref() {
            require_email("email", email)?;
        }
        Ok(())
    }

    /// Merge the present fields over `user`
    pub fn apply(self, user: &mut User) {
        self.name.apply_to(&mut user.name);
        self.email.apply_to(&mut user.email);
        self.age.apply_to(&mut user.age);
    }
}
