//! Change parameter action
//!
//! Captures before/after snapshots of a filter's parameter set around a
//! live edit. The edit itself already happened when the action is created
//! (the UI writes to the filter as the user drags), so the first apply is a
//! no-op and only later redos write the "after" snapshot back.

use crate::error::ActionError;
use crate::events::EditEvent;
use crate::node::Node;
use crate::project::Project;
use crate::properties::Properties;
use uuid::Uuid;

/// Action that rewrites a filter's parameters from captured snapshots
pub struct ChangeParameterAction {
    node_uuid: Uuid,

    /// Row of the filter whose parameters changed
    row: usize,

    /// Parameter state from before the edit, supplied by the caller
    before: Properties,

    /// Parameter state after the edit, captured live and updated via
    /// [`record_changed_property`](Self::record_changed_property)
    after: Properties,

    first_apply: bool,

    text: String,
}

impl ChangeParameterAction {
    /// Create a parameter-change action for the filter at `row`.
    ///
    /// `before` is the caller's capture from before the edit; the "after"
    /// snapshot is read eagerly from the filter's current state, which must
    /// already reflect the edit. The row must address an attached filter.
    pub fn new(node: &Node, name: &str, row: usize, before: Properties, detail: &str) -> Self {
        let text = if detail.is_empty() {
            format!("Change {name} filter")
        } else {
            format!("Change {name} filter: {detail}")
        };
        let mut after = Properties::new();
        if let Some(service) = node.filter(row) {
            after.inherit(&service.properties());
        } else {
            debug_assert!(false, "no attached filter at row {row}");
        }
        Self {
            node_uuid: node.ensure_uuid(),
            row,
            before,
            after,
            first_apply: true,
            text,
        }
    }

    /// Re-capture one parameter's current value into the "after" snapshot.
    ///
    /// Supports edits that keep mutating the filter after the action was
    /// created, e.g. a slider still being dragged.
    pub fn record_changed_property(
        &mut self,
        project: &Project,
        name: &str,
    ) -> Result<(), ActionError> {
        let node = project.resolve(self.node_uuid)?;
        let service = node.filter(self.row).ok_or(ActionError::RowOutOfRange {
            row: self.row,
            count: node.filter_count(),
        })?;
        self.after.pass(&service.properties(), name);
        Ok(())
    }

    pub fn execute(&mut self, project: &mut Project) -> Result<(), ActionError> {
        log::debug!("{}", self.text);
        if self.first_apply {
            // The live edit already happened before this action existed
            self.first_apply = false;
            return Ok(());
        }
        self.restore(project, false)
    }

    pub fn rollback(&mut self, project: &mut Project) -> Result<(), ActionError> {
        log::debug!("{}", self.text);
        self.restore(project, true)
    }

    fn restore(&self, project: &mut Project, to_before: bool) -> Result<(), ActionError> {
        let node = project.resolve(self.node_uuid)?;
        let service = node.filter(self.row).ok_or(ActionError::RowOutOfRange {
            row: self.row,
            count: node.filter_count(),
        })?;
        service.inherit(if to_before { &self.before } else { &self.after });
        project.events().emit(EditEvent::ParameterRestored {
            node: self.node_uuid,
            row: self.row,
        });
        Ok(())
    }

    pub fn description(&self) -> String {
        self.text.clone()
    }

    /// Fold a continuation of the same parameter edit into this action.
    ///
    /// Continuations target the same filter row on the same node and carry
    /// the same display text; merging keeps this action's "before" and
    /// adopts the candidate's "after", widening the undo step.
    pub fn try_merge(&mut self, other: &ChangeParameterAction) -> bool {
        log::debug!("this filter {} that filter {}", self.row, other.row);
        if other.row != self.row || other.node_uuid != self.node_uuid || other.text != self.text {
            return false;
        }
        self.after = other.after.clone();
        true
    }
}
