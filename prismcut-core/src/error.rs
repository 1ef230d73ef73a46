//! Error types for edit action application.

use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced while executing or rolling back an edit action.
///
/// Both variants signal a broken caller invariant rather than a recoverable
/// condition: an action is never expected to outlive its target, and rows
/// are recorded from the live chain. No graph mutation has occurred when
/// either is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// No live node in any search root carries the identifier.
    #[error("no live node carries identifier {0}")]
    NodeNotFound(Uuid),

    /// A filter row does not address an attached service.
    #[error("filter row {row} out of range for chain of {count}")]
    RowOutOfRange { row: usize, count: usize },
}
