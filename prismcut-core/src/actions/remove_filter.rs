//! Remove filter action
//!
//! Detaches one filter from a node and re-attaches the very same service on
//! undo, so parameter state and shared handles survive the round trip.

use crate::error::ActionError;
use crate::filter::Filter;
use crate::node::Node;
use crate::project::Project;
use uuid::Uuid;

/// Action that detaches the filter at one row
pub struct RemoveFilterAction {
    node_uuid: Uuid,

    /// Direct reference, used only for the first apply
    node: Option<Node>,

    row: usize,

    /// The detached service, kept for re-attachment on undo
    filter: Filter,

    text: String,
}

impl RemoveFilterAction {
    /// Create an action removing the given still-attached filter at `row`.
    pub fn new(node: &Node, name: &str, filter: Filter, row: usize) -> Self {
        Self {
            node_uuid: node.ensure_uuid(),
            node: Some(node.clone()),
            row,
            filter,
            text: format!("Remove {name} filter"),
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
        let detached = node.detach(self.row)?;
        debug_assert!(
            detached.ptr_eq(&self.filter),
            "detached service differs from the recorded one"
        );
        Ok(())
    }

    pub fn rollback(&mut self, project: &mut Project) -> Result<(), ActionError> {
        log::debug!("{} row {}", self.text, self.row);
        let node = project.resolve(self.node_uuid)?;
        node.attach(self.filter.clone(), self.row)
    }

    pub fn description(&self) -> String {
        self.text.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Project, Node) {
        let timeline = Node::timeline("project");
        let track = Node::playlist("V1");
        let clip = Node::clip("a.mp4");
        track.append(clip.clone());
        timeline.append(track);

        let mut project = Project::new();
        project.set_timeline(Some(timeline));
        (project, clip)
    }

    #[test]
    fn test_remove_execute_rollback() {
        let (mut project, clip) = setup();
        let volume = Filter::new("volume");
        volume.set("level", "0.4");
        clip.append_filter(volume.clone());
        clip.append_filter(Filter::new("blur"));

        let mut action = RemoveFilterAction::new(&clip, "volume", volume.clone(), 0);
        assert_eq!(action.description(), "Remove volume filter");

        action.execute(&mut project).unwrap();
        assert_eq!(clip.filter_count(), 1);
        assert_eq!(clip.filter(0).unwrap().name(), "blur");

        action.rollback(&mut project).unwrap();
        assert_eq!(clip.filter_count(), 2);
        // The same service came back, parameters intact
        let restored = clip.filter(0).unwrap();
        assert!(restored.ptr_eq(&volume));
        assert_eq!(restored.get("level"), Some("0.4".to_string()));

        action.execute(&mut project).unwrap();
        assert_eq!(clip.filter_count(), 1);
    }
}
