//! Paste filters action
//!
//! Merges a serialized filter set onto a node. The target's own filter
//! state is snapshotted at construction time so undo can rebuild it from
//! scratch.

use crate::error::ActionError;
use crate::events::EditEvent;
use crate::node::Node;
use crate::project::{self, Project};
use uuid::Uuid;

/// Action that pastes a serialized filter set onto a node
pub struct PasteFiltersAction {
    node_uuid: Uuid,

    /// Incoming filter set, interchange text
    snapshot: String,

    /// The target's chain as it was before the paste
    before: String,

    text: String,
}

impl PasteFiltersAction {
    /// Create a paste action, capturing the target's current chain as the
    /// undo state.
    pub fn new(node: &Node, snapshot: impl Into<String>) -> Self {
        Self {
            node_uuid: node.ensure_uuid(),
            snapshot: snapshot.into(),
            before: project::export_filters(node),
            text: "Paste filters".to_string(),
        }
    }

    pub fn execute(&mut self, project: &mut Project) -> Result<(), ActionError> {
        log::debug!("{}", self.text);
        let node = project.resolve(self.node_uuid)?;
        let set = project::import_filters(&self.snapshot);
        if !set.is_empty() {
            project::paste_filters(&node, &set);
        }
        project.events().emit(EditEvent::FiltersPasted {
            node: self.node_uuid,
        });
        Ok(())
    }

    pub fn rollback(&mut self, project: &mut Project) -> Result<(), ActionError> {
        log::debug!("{}", self.text);
        let node = project.resolve(self.node_uuid)?;
        // Strip every filter undo owns; loader and hidden filters stay put
        let mut row = 0;
        while let Some(filter) = node.filter(row) {
            if filter.is_loader() || filter.is_hidden() {
                row += 1;
            } else {
                node.detach(row)?;
            }
        }
        // Restore the "before" filters
        let set = project::import_filters(&self.before);
        if !set.is_empty() {
            project::paste_filters(&node, &set);
        }
        project.events().emit(EditEvent::FiltersPasted {
            node: self.node_uuid,
        });
        Ok(())
    }

    pub fn description(&self) -> String {
        self.text.clone()
    }
}
