/// Project record and its update payload

use crate::models::{
    patch::Patch,
    validation::{require_non_empty, require_timestamp, ValidationError},
};
use serde::{Deserialize, Serialize};

/// Name of the owner field inside stored project documents
pub const OWNER_FIELD: &str = "owner_id";

/// A project owned by exactly one user
///
/// `owner_id` is checked against the users container on every write,
/// but nothing in storage keeps it pointing at a live user afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier (e.g., "p1")
    pub id: String,
    /// Project name (e.g., "Proyecto API 2024")
    pub name: String,
    /// Free-form description, optional
    #[serde(default)]
    pub description: Option<String>,
    /// Id of the owning user
    pub owner_id: String,
    /// Creation time as an ISO-8601 string, stored verbatim
    pub created_at: String,
}

impl Project {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("id", &self.id)?;
        require_non_empty(OWNER_FIELD, &self.owner_id)?;
        require_timestamp("created_at", &self.created_at)
    }
}

/// Partial update for a project
///
/// `owner_id` names the user performing the update and is mandatory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectPatch {
    /// Accepted only when equal to the path id
    #[serde(default)]
    pub id: Patch<String>,
    #[serde(default)]
    pub name: Patch<String>,
    /// `null` clears the description, absence keeps it
    #[serde(default)]
    pub description: Patch<Option<String>>,
    /// Acting user; must exist and match the stored owner
    #[serde(default)]
    pub owner_id: Patch<String>,
    #[serde(default)]
    pub created_at: Patch<String>,
}

impl ProjectPatch {
    /// Check the present fields and return the acting owner id
    pub fn validate(&self, target_id: &str) -> Result<&str, ValidationError> {
        let owner_id = self
            .owner_id
            .as_ref()
            .ok_or_else(|| ValidationError::new(OWNER_FIELD, "field required"))?;
        require_non_empty(OWNER_FIELD, owner_id)?;

        if let Some(id) = self.id.as_ref() {
            if id != target_id {
                return Err(ValidationError::new("id", "project id cannot be changed"));
            }
        }
        if let Some(created_at) = self.created_at.as_ref() {
            require_timestamp("created_at", created_at)?;
        }
        Ok(owner_id)
    }

    /// Merge the present fields over `project`
    ///
    /// Callers must have checked that `owner_id` equals the stored owner.
    pub fn apply(self, project: &mut Project) {
        self.name.apply_to(&mut project.name);
        self.description.apply_to(&mut project.description);
        self.owner_id.apply_to(&mut project.owner_id);
        self.created_at.apply_to(&mut project.created_at);
    }
}
