//! Disable/enable filter action
//!
//! Flips a filter's disabled flag and restores the prior flag on undo.

use crate::error::ActionError;
use crate::node::Node;
use crate::project::Project;
use uuid::Uuid;

/// Action that sets a filter's disabled flag
pub struct DisableFilterAction {
    node_uuid: Uuid,

    /// Direct reference, used only for the first apply
    node: Option<Node>,

    row: usize,

    /// The flag value this action applies; undo restores the opposite
    disabled: bool,

    text: String,
}

impl DisableFilterAction {
    pub fn new(node: &Node, name: &str, row: usize, disabled: bool) -> Self {
        let text = if disabled {
            format!("Disable {name} filter")
        } else {
            format!("Enable {name} filter")
        };
        Self {
            node_uuid: node.ensure_uuid(),
            node: Some(node.clone()),
            row,
            disabled,
            text,
        }
    }

    pub fn execute(&mut self, project: &mut Project) -> Result<(), ActionError> {
        log::debug!("{} row {}", self.text, self.row);
        // Only hold the direct reference for the first apply and look up by
        // identifier thereafter.
        let node = match self.node.take() {
            Some(node) => node,
            None => project.resolve(self.node_uuid)?,
        };
        node.set_filter_disabled(self.row, self.disabled)
    }

    pub fn rollback(&mut self, project: &mut Project) -> Result<(), ActionError> {
        log::debug!("{} row {}", self.text, self.row);
        let node = project.resolve(self.node_uuid)?;
        node.set_filter_disabled(self.row, !self.disabled)
    }

    pub fn description(&self) -> String {
        self.text.clone()
    }

    /// Toggle merging is deliberately not implemented.
    ///
    /// Merging two toggles and undoing yields the opposite of the original
    /// state; three toggles in a row would merge sensibly, but not two.
    /// Rejecting every merge keeps each toggle its own undo step.
    pub fn try_merge(&mut self, _other: &DisableFilterAction) -> bool {
        false
    }
}
