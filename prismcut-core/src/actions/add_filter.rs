//! Add filter action
//!
//! Inserts one or more pre-built filters onto a node. Consecutive adds that
//! belong to the same filter set coalesce into a single undo step.

use crate::error::ActionError;
use crate::filter::Filter;
use crate::node::Node;
use crate::project::{self, Project};
use uuid::Uuid;

/// How an added filter relates to a multi-filter set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddType {
    /// A lone filter
    Single,
    /// A set member with more members to come
    Set,
    /// The final member of a set
    SetLast,
}

/// Action that inserts filters at recorded rows
pub struct AddFilterAction {
    /// Stable identifier of the target node
    node_uuid: Uuid,

    /// Direct reference, used only for the first apply
    node: Option<Node>,

    /// Insertion rows, in apply order
    rows: Vec<usize>,

    /// Filters to insert, parallel to `rows`
    filters: Vec<Filter>,

    add_type: AddType,

    text: String,
}

impl AddFilterAction {
    /// Create an action that adds one filter at a row.
    ///
    /// Further set members arrive as separate actions and are folded in via
    /// [`try_merge`](Self::try_merge).
    pub fn new(node: &Node, name: &str, filter: Filter, row: usize, add_type: AddType) -> Self {
        let node_uuid = node.ensure_uuid();
        let text = if add_type == AddType::Single {
            format!("Add {name} filter")
        } else {
            format!("Add {name} filter set")
        };
        Self {
            node_uuid,
            node: Some(node.clone()),
            rows: vec![row],
            filters: vec![filter],
            add_type,
            text,
        }
    }

    pub fn execute(&mut self, project: &mut Project) -> Result<(), ActionError> {
        log::debug!("{} row {}", self.text, self.rows[0]);
        // Only hold the direct reference for the first apply and look up by
        // identifier thereafter.
        let node = match self.node.take() {
            Some(node) => node,
            None => project.resolve(self.node_uuid)?,
        };
        let adjust_from = node.filter_count();
        for (row, filter) in self.rows.iter().zip(self.filters.iter()) {
            node.attach(filter.clone(), *row)?;
        }
        if self.add_type == AddType::SetLast {
            project::adjust_filters(&node, adjust_from);
        }
        Ok(())
    }

    pub fn rollback(&mut self, project: &mut Project) -> Result<(), ActionError> {
        log::debug!("{} row {}", self.text, self.rows[0]);
        let node = project.resolve(self.node_uuid)?;
        // Remove the filters in reverse order so earlier rows stay valid
        for row in self.rows.iter().rev() {
            node.detach(*row)?;
        }
        Ok(())
    }

    pub fn description(&self) -> String {
        self.text.clone()
    }

    /// Fold the next member of the same filter set into this action.
    ///
    /// Only open sets absorb members: a lone add never merges, and a set
    /// closed by a `SetLast` member stops absorbing. The merged action
    /// adopts the candidate's type, so absorbing the last member finalizes
    /// the set.
    pub fn try_merge(&mut self, other: &AddFilterAction) -> bool {
        if other.node_uuid != self.node_uuid {
            return false;
        }
        if self.add_type != AddType::Set
            || !matches!(other.add_type, AddType::Set | AddType::SetLast)
        {
            // Only merge filters from the same filter set
            return false;
        }
        if let (Some(&row), Some(filter)) = (other.rows.first(), other.filters.first()) {
            self.add_type = other.add_type;
            self.rows.push(row);
            self.filters.push(filter.clone());
            true
        } else {
            false
        }
    }
}
