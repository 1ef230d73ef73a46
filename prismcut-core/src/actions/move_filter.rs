//! Move filter action
//!
//! Relocates a filter between rows of a node's chain.

use crate::error::ActionError;
use crate::node::Node;
use crate::project::Project;
use uuid::Uuid;

/// Action that relocates a filter from one row to another
pub struct MoveFilterAction {
    node_uuid: Uuid,

    /// Direct reference, used only for the first apply
    node: Option<Node>,

    from_row: usize,
    to_row: usize,

    text: String,
}

impl MoveFilterAction {
    pub fn new(node: &Node, name: &str, from_row: usize, to_row: usize) -> Self {
        Self {
            node_uuid: node.ensure_uuid(),
            node: Some(node.clone()),
            from_row,
            to_row,
            text: format!("Move {name} filter"),
        }
    }

    pub fn execute(&mut self, project: &mut Project) -> Result<(), ActionError> {
        log::debug!("{} from {} to {}", self.text, self.from_row, self.to_row);
        // Only hold the direct reference for the first apply and look up by
        // identifier thereafter.
        let node = match self.node.take() {
            Some(node) => node,
            None => project.resolve(self.node_uuid)?,
        };
        node.move_filter(self.from_row, self.to_row)
    }

    pub fn rollback(&mut self, project: &mut Project) -> Result<(), ActionError> {
        log::debug!("{} from {} to {}", self.text, self.to_row, self.from_row);
        let node = project.resolve(self.node_uuid)?;
        node.move_filter(self.to_row, self.from_row)
    }

    pub fn description(&self) -> String {
        self.text.clone()
    }
}
