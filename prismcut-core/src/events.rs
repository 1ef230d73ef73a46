//! Edit notification events.
//!
//! Events are emitted when undo/redo rewrites a node's filter state and are
//! handled by the owning application to refresh whatever UI shows that node.

use crossbeam_channel::Sender;
use uuid::Uuid;

/// Events related to undoable filter edits
#[derive(Debug, Clone)]
pub enum EditEvent {
    /// A filter set was pasted onto a node (on apply or on undo restore)
    FiltersPasted { node: Uuid },

    /// A parameter snapshot was written back to a filter during undo/redo
    ParameterRestored { node: Uuid, row: usize },
}

/// Event sender wrapper for the edit subsystem
///
/// The project holds this sender so actions can broadcast without knowing
/// who listens.
#[derive(Clone, Debug)]
pub struct EditEventSender {
    sender: Option<Sender<EditEvent>>,
}

impl EditEventSender {
    /// Create event sender (connected to channel)
    pub fn new(sender: Sender<EditEvent>) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    /// Create dummy sender (for tests or when events not needed)
    pub fn dummy() -> Self {
        Self { sender: None }
    }

    /// Emit event (silent if no receiver)
    pub fn emit(&self, event: EditEvent) {
        if let Some(ref tx) = self.sender {
            let _ = tx.send(event); // Ignore send errors (receiver might be dropped)
        }
    }
}

impl Default for EditEventSender {
    fn default() -> Self {
        Self::dummy()
    }
}
