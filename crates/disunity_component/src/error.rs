//! Entity-level error types.

use crate::entity::EntityId;

/// Errors raised when an operation requires a live entity.
///
/// Systems never produce these: a system that finds an entity without the
/// components it needs simply skips it. They surface from setup paths such
/// as level loading, where attaching data to a dead id is a real mistake.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityError {
    /// The id is not tracked by the entity table (never created, or purged).
    #[error("{0} does not exist")]
    NotFound(EntityId),

    /// The id is tracked but already marked for deletion.
    #[error("{0} is pending deletion")]
    PendingDeletion(EntityId),
}
