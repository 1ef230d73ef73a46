//! Live-instance lookup by logical identifier.
//!
//! Edit actions never trust a node handle across edits: the engine may
//! replace an element's in-memory instance while the handle sits in the
//! undo history. Every apply/rollback after the first therefore re-resolves
//! the target through this search. The scan is O(graph size) per call; that
//! linear cost is accepted in exchange for always operating on the live
//! instance instead of a possibly stale cached reference.

use crate::node::Node;
use uuid::Uuid;

/// Depth-first pre-order search of one subgraph.
///
/// Every node is both a possible match target and a possible container to
/// descend into. Identifiers are globally unique, so the first match wins
/// and the remaining traversal is abandoned.
pub fn find_in(root: &Node, uuid: Uuid) -> Option<Node> {
    if root.uuid() == Some(uuid) {
        return Some(root.clone());
    }
    for child in root.children() {
        if let Some(found) = find_in(&child, uuid) {
            return Some(found);
        }
    }
    None
}

/// Search the project roots in priority order.
///
/// Roots are tried one after another: the active timeline, then a non-empty
/// bin, then the open standalone clip. Only one root is expected to contain
/// the target, so the first root that yields a match ends the search.
pub fn locate(
    uuid: Uuid,
    timeline: Option<&Node>,
    bin: Option<&Node>,
    open_clip: Option<&Node>,
) -> Option<Node> {
    if let Some(timeline) = timeline {
        if let Some(found) = find_in(timeline, uuid) {
            return Some(found);
        }
    }
    if let Some(bin) = bin {
        if bin.child_count() > 0 {
            if let Some(found) = find_in(bin, uuid) {
                return Some(found);
            }
        }
    }
    if let Some(open_clip) = open_clip {
        if let Some(found) = find_in(open_clip, uuid) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline_with_clip() -> (Node, Node) {
        let timeline = Node::timeline("project");
        let track = Node::playlist("V1");
        let clip = Node::clip("a.mp4");
        track.append(clip.clone());
        timeline.append(track);
        (timeline, clip)
    }

    #[test]
    fn test_find_nested_clip() {
        let (timeline, clip) = timeline_with_clip();
        let uuid = clip.ensure_uuid();

        let found = find_in(&timeline, uuid).unwrap();
        assert!(found.ptr_eq(&clip));
    }

    #[test]
    fn test_find_container_itself() {
        let (timeline, _clip) = timeline_with_clip();
        let track = timeline.children().remove(0);
        let uuid = track.ensure_uuid();

        let found = find_in(&timeline, uuid).unwrap();
        assert!(found.ptr_eq(&track));
    }

    #[test]
    fn test_find_through_chain() {
        let timeline = Node::timeline("project");
        let track = Node::playlist("V1");
        let chain = Node::chain("speed chain");
        let source = Node::clip("a.mp4");
        chain.set_source(source.clone());
        track.append(chain);
        timeline.append(track);

        let uuid = source.ensure_uuid();
        let found = find_in(&timeline, uuid).unwrap();
        assert!(found.ptr_eq(&source));
    }

    #[test]
    fn test_not_found() {
        let (timeline, clip) = timeline_with_clip();
        clip.ensure_uuid();

        assert!(find_in(&timeline, Uuid::new_v4()).is_none());
        assert!(locate(Uuid::new_v4(), Some(&timeline), None, None).is_none());
    }

    #[test]
    fn test_roots_priority_order() {
        let (timeline, timeline_clip) = timeline_with_clip();
        let uuid = timeline_clip.ensure_uuid();

        // A bin entry carrying the same identifier must not shadow the
        // timeline match.
        let bin = Node::playlist("bin");
        let bin_clip = Node::clip("a.mp4");
        bin_clip.inherit_properties(&timeline_clip.properties());
        bin.append(bin_clip.clone());

        let found = locate(uuid, Some(&timeline), Some(&bin), None).unwrap();
        assert!(found.ptr_eq(&timeline_clip));

        let found = locate(uuid, None, Some(&bin), None).unwrap();
        assert!(found.ptr_eq(&bin_clip));
    }

    #[test]
    fn test_empty_bin_falls_through_to_open_clip() {
        let bin = Node::playlist("bin");
        let open_clip = Node::clip("solo.mp4");
        let uuid = open_clip.ensure_uuid();
        // An identifier on the empty bin itself is not considered.
        bin.set(crate::node::UUID_PROPERTY, uuid.to_string());

        let found = locate(uuid, None, Some(&bin), Some(&open_clip)).unwrap();
        assert!(found.ptr_eq(&open_clip));
    }
}
