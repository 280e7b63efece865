/// Entity schemas
///
/// Shapes and validation rules for the two record kinds:
/// - `User`: people who own projects
/// - `Project`: work items pointing at their owner by `owner_id`
/// Update payloads use `Patch` fields so only supplied values are merged.

// Presence-aware field wrapper for partial updates
pub mod patch;

// Shared field rules (email, timestamp, non-empty)
pub mod validation;

pub mod user;

pub mod project;

pub use patch::Patch;
pub use project::{Project, ProjectPatch};
pub use user::{User, UserPatch};
pub use validation::ValidationError;
