//! Action system for undo/redo of filter-chain edits
//!
//! This module ties the concrete edit actions into one closed type and
//! provides the history container that sequences them.
//!
//! ## Architecture
//!
//! - `EditAction`: closed enum over every undoable edit kind, dispatching
//!   execute/rollback/description and same-kind merging
//! - `ActionHistory`: bounded undo/redo stacks; pushing applies the action
//!   once and offers it to the top of the stack for coalescing
//!
//! Actions never keep a usable reference to their target across edits: each
//! execute/rollback after the first resolves the live node by its logical
//! identifier, so an instance replaced by the engine in the meantime is
//! still found.

use crate::actions::{
    AddFilterAction, ChangeParameterAction, DisableFilterAction, MoveFilterAction,
    PasteFiltersAction, RemoveFilterAction,
};
use crate::error::ActionError;
use crate::project::Project;

/// Merge identity, mirroring which kinds participate in coalescing at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MergeId {
    Add,
    Disable,
    ChangeParameter,
}

/// One undoable filter-chain edit.
pub enum EditAction {
    Add(AddFilterAction),
    Remove(RemoveFilterAction),
    Move(MoveFilterAction),
    Disable(DisableFilterAction),
    Paste(PasteFiltersAction),
    ChangeParameter(ChangeParameterAction),
}

impl EditAction {
    /// Apply this edit to the live graph.
    pub fn execute(&mut self, project: &mut Project) -> Result<(), ActionError> {
        match self {
            EditAction::Add(action) => action.execute(project),
            EditAction::Remove(action) => action.execute(project),
            EditAction::Move(action) => action.execute(project),
            EditAction::Disable(action) => action.execute(project),
            EditAction::Paste(action) => action.execute(project),
            EditAction::ChangeParameter(action) => action.execute(project),
        }
    }

    /// Undo this edit on the live graph.
    pub fn rollback(&mut self, project: &mut Project) -> Result<(), ActionError> {
        match self {
            EditAction::Add(action) => action.rollback(project),
            EditAction::Remove(action) => action.rollback(project),
            EditAction::Move(action) => action.rollback(project),
            EditAction::Disable(action) => action.rollback(project),
            EditAction::Paste(action) => action.rollback(project),
            EditAction::ChangeParameter(action) => action.rollback(project),
        }
    }

    /// Human-readable description (for UI display)
    pub fn description(&self) -> String {
        match self {
            EditAction::Add(action) => action.description(),
            EditAction::Remove(action) => action.description(),
            EditAction::Move(action) => action.description(),
            EditAction::Disable(action) => action.description(),
            EditAction::Paste(action) => action.description(),
            EditAction::ChangeParameter(action) => action.description(),
        }
    }

    fn merge_id(&self) -> Option<MergeId> {
        match self {
            EditAction::Add(_) => Some(MergeId::Add),
            EditAction::Disable(_) => Some(MergeId::Disable),
            EditAction::ChangeParameter(_) => Some(MergeId::ChangeParameter),
            _ => None,
        }
    }

    /// Try to absorb a just-applied candidate of the same kind.
    ///
    /// Returns whether the candidate's record was folded into this action.
    /// Cross-kind attempts are a caller bug: logged and rejected without
    /// touching either action.
    pub fn try_merge(&mut self, other: &EditAction) -> bool {
        match (self, other) {
            (EditAction::Add(this), EditAction::Add(that)) => this.try_merge(that),
            (EditAction::Disable(this), EditAction::Disable(that)) => this.try_merge(that),
            (EditAction::ChangeParameter(this), EditAction::ChangeParameter(that)) => {
                this.try_merge(that)
            }
            (this, that) => {
                log::error!(
                    "invalid merge: {:?} into {:?}",
                    that.description(),
                    this.description()
                );
                false
            }
        }
    }
}

/// Undo/redo history for edit actions
///
/// The caller-facing contract matches the usual GUI command stack: `push`
/// applies the action once immediately, then either folds it into the
/// action on top of the undo stack or pushes it; `undo`/`redo` navigate,
/// re-resolving targets on every step. A new push invalidates the redo
/// stack, and the undo stack is capacity-bounded with oldest-first
/// eviction.
pub struct ActionHistory {
    /// Stack of applied actions (for undo)
    undo_stack: Vec<EditAction>,

    /// Stack of undone actions (for redo)
    redo_stack: Vec<EditAction>,

    /// Maximum number of actions to keep in the undo stack
    max_depth: usize,
}

impl ActionHistory {
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: 100, // Default: keep last 100 actions
        }
    }

    /// Apply an action and record it for undo.
    ///
    /// The action is offered to the current top of the undo stack first; an
    /// accepted merge discards the candidate, so rapid micro-edits stay one
    /// user-visible undo step. On error nothing is recorded and the graph
    /// is unchanged.
    pub fn push(&mut self, project: &mut Project, mut action: EditAction) -> Result<(), ActionError> {
        action.execute(project)?;

        // A new action invalidates redo history
        self.redo_stack.clear();

        if let Some(top) = self.undo_stack.last_mut() {
            let same_kind = top.merge_id().is_some() && top.merge_id() == action.merge_id();
            if same_kind && top.try_merge(&action) {
                return Ok(());
            }
        }

        self.undo_stack.push(action);
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }
        Ok(())
    }

    /// Undo the most recent action.
    ///
    /// Returns false if the undo stack is empty. On a rollback error the
    /// action stays on the undo stack.
    pub fn undo(&mut self, project: &mut Project) -> Result<bool, ActionError> {
        let Some(mut action) = self.undo_stack.pop() else {
            return Ok(false);
        };
        if let Err(err) = action.rollback(project) {
            self.undo_stack.push(action);
            return Err(err);
        }
        self.redo_stack.push(action);
        Ok(true)
    }

    /// Redo the most recently undone action.
    ///
    /// Returns false if the redo stack is empty. On an execute error the
    /// action stays on the redo stack.
    pub fn redo(&mut self, project: &mut Project) -> Result<bool, ActionError> {
        let Some(mut action) = self.redo_stack.pop() else {
            return Ok(false);
        };
        if let Err(err) = action.execute(project) {
            self.redo_stack.push(action);
            return Err(err);
        }
        self.undo_stack.push(action);
        Ok(true)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Description of the next action to undo
    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.last().map(EditAction::description)
    }

    /// Description of the next action to redo
    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.last().map(EditAction::description)
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Set the maximum undo depth, evicting oldest entries if needed
    pub fn set_max_depth(&mut self, depth: usize) {
        self.max_depth = depth;
        if self.undo_stack.len() > depth {
            let remove_count = self.undo_stack.len() - depth;
            self.undo_stack.drain(0..remove_count);
        }
    }
}

impl Default for ActionHistory {
    fn default() -> Self {
        Self::new()
    }
}
