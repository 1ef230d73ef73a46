//! Media graph nodes.
//!
//! A Node is a shared handle to one element of the composition graph: a
//! clip, a track/playlist, a composite timeline, or a linked chain. The
//! same logical element may be handed out to several holders at once (the
//! timeline, a bin entry, a UI panel), and the engine may replace an
//! element's in-memory instance during unrelated edits. Identity that must
//! survive such replacement lives in the metadata properties, not in the
//! handle itself.

use crate::error::ActionError;
use crate::filter::Filter;
use crate::properties::Properties;
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

/// Metadata property carrying the stable logical identifier.
pub const UUID_PROPERTY: &str = "prismcut:uuid";

/// Metadata property carrying the node length in frames.
pub const LENGTH_PROPERTY: &str = "length";

/// Graph element kind.
///
/// Containers hold child nodes; every kind can also carry an attached
/// filter chain of its own.
#[derive(Clone, Debug)]
pub enum NodeKind {
    /// Leaf producer
    Clip,
    /// Ordered container, used both as a timeline track and as the bin
    Playlist(Vec<Node>),
    /// Composite of tracks
    Timeline(Vec<Node>),
    /// Linked chain wrapping a source producer
    Chain { source: Option<Node> },
}

#[derive(Debug)]
struct NodeData {
    name: String,
    kind: NodeKind,
    properties: Properties,
    filters: Vec<Filter>,
}

/// Shared handle to a graph element.
#[derive(Clone, Debug)]
pub struct Node(Rc<RefCell<NodeData>>);

impl Node {
    fn with_kind(name: impl Into<String>, kind: NodeKind) -> Self {
        Self(Rc::new(RefCell::new(NodeData {
            name: name.into(),
            kind,
            properties: Properties::new(),
            filters: Vec::new(),
        })))
    }

    pub fn clip(name: impl Into<String>) -> Self {
        Self::with_kind(name, NodeKind::Clip)
    }

    pub fn playlist(name: impl Into<String>) -> Self {
        Self::with_kind(name, NodeKind::Playlist(Vec::new()))
    }

    pub fn timeline(name: impl Into<String>) -> Self {
        Self::with_kind(name, NodeKind::Timeline(Vec::new()))
    }

    pub fn chain(name: impl Into<String>) -> Self {
        Self::with_kind(name, NodeKind::Chain { source: None })
    }

    pub fn name(&self) -> String {
        self.0.borrow().name.clone()
    }

    /// Whether this node is a composite of tracks.
    pub fn is_composed(&self) -> bool {
        matches!(self.0.borrow().kind, NodeKind::Timeline(_))
    }

    /// Append a child to a container node. Returns false on leaf kinds.
    pub fn append(&self, child: Node) -> bool {
        match &mut self.0.borrow_mut().kind {
            NodeKind::Playlist(children) | NodeKind::Timeline(children) => {
                children.push(child);
                true
            }
            _ => false,
        }
    }

    /// Replace the child at an index of a container node.
    pub fn replace_child(&self, index: usize, child: Node) -> bool {
        match &mut self.0.borrow_mut().kind {
            NodeKind::Playlist(children) | NodeKind::Timeline(children) => {
                if index < children.len() {
                    children[index] = child;
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    /// Set the wrapped source of a chain node. Returns false otherwise.
    pub fn set_source(&self, node: Node) -> bool {
        match &mut self.0.borrow_mut().kind {
            NodeKind::Chain { source } => {
                *source = Some(node);
                true
            }
            _ => false,
        }
    }

    /// Child handles in composition order. Leaves yield no children.
    pub fn children(&self) -> Vec<Node> {
        match &self.0.borrow().kind {
            NodeKind::Clip => Vec::new(),
            NodeKind::Playlist(children) | NodeKind::Timeline(children) => children.clone(),
            NodeKind::Chain { source } => source.iter().cloned().collect(),
        }
    }

    pub fn child_count(&self) -> usize {
        match &self.0.borrow().kind {
            NodeKind::Clip => 0,
            NodeKind::Playlist(children) | NodeKind::Timeline(children) => children.len(),
            NodeKind::Chain { source } => usize::from(source.is_some()),
        }
    }

    // ---- metadata ----

    pub fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().properties.get(key).map(str::to_string)
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.0.borrow_mut().properties.set(key, value);
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.0.borrow().properties.get_int(key)
    }

    /// Capture the full metadata set.
    pub fn properties(&self) -> Properties {
        self.0.borrow().properties.clone()
    }

    /// Overlay a metadata snapshot onto this node.
    ///
    /// Copying another instance's metadata carries its logical identifier
    /// along, which is how a replacement instance takes over an identity.
    pub fn inherit_properties(&self, snapshot: &Properties) {
        self.0.borrow_mut().properties.inherit(snapshot);
    }

    pub fn length(&self) -> i64 {
        self.get_int(LENGTH_PROPERTY).unwrap_or(0)
    }

    pub fn set_length(&self, length: i64) {
        self.0.borrow_mut().properties.set_int(LENGTH_PROPERTY, length);
    }

    /// The logical identifier, if one has been assigned.
    pub fn uuid(&self) -> Option<Uuid> {
        self.0
            .borrow()
            .properties
            .get(UUID_PROPERTY)
            .and_then(|v| Uuid::parse_str(v).ok())
    }

    /// Get the logical identifier, assigning a fresh one on first need.
    ///
    /// Idempotent: once assigned the identifier never changes for the
    /// lifetime of the underlying element.
    pub fn ensure_uuid(&self) -> Uuid {
        if let Some(uuid) = self.uuid() {
            return uuid;
        }
        let uuid = Uuid::new_v4();
        self.set(UUID_PROPERTY, uuid.to_string());
        uuid
    }

    // ---- attached filter chain ----

    pub fn filter_count(&self) -> usize {
        self.0.borrow().filters.len()
    }

    /// Handle to the filter at a row.
    pub fn filter(&self, row: usize) -> Option<Filter> {
        self.0.borrow().filters.get(row).cloned()
    }

    /// Handles to the whole chain in attachment order.
    pub fn filters(&self) -> Vec<Filter> {
        self.0.borrow().filters.clone()
    }

    /// Insert a filter at a row, shifting later rows up.
    pub fn attach(&self, filter: Filter, row: usize) -> Result<(), ActionError> {
        let mut data = self.0.borrow_mut();
        if row > data.filters.len() {
            return Err(ActionError::RowOutOfRange {
                row,
                count: data.filters.len(),
            });
        }
        data.filters.insert(row, filter);
        Ok(())
    }

    /// Append a filter to the end of the chain.
    pub fn append_filter(&self, filter: Filter) {
        self.0.borrow_mut().filters.push(filter);
    }

    /// Detach and return the filter at a row, shifting later rows down.
    pub fn detach(&self, row: usize) -> Result<Filter, ActionError> {
        let mut data = self.0.borrow_mut();
        if row >= data.filters.len() {
            return Err(ActionError::RowOutOfRange {
                row,
                count: data.filters.len(),
            });
        }
        Ok(data.filters.remove(row))
    }

    /// Relocate a filter from one row to another.
    ///
    /// `to` is the destination row after removal, so a later call with the
    /// arguments swapped restores the original order.
    pub fn move_filter(&self, from: usize, to: usize) -> Result<(), ActionError> {
        let mut data = self.0.borrow_mut();
        let count = data.filters.len();
        if from >= count {
            return Err(ActionError::RowOutOfRange { row: from, count });
        }
        if to >= count {
            return Err(ActionError::RowOutOfRange { row: to, count });
        }
        let filter = data.filters.remove(from);
        data.filters.insert(to, filter);
        Ok(())
    }

    /// Set the disabled flag of the filter at a row.
    pub fn set_filter_disabled(&self, row: usize, disabled: bool) -> Result<(), ActionError> {
        let filter = self.filter(row).ok_or(ActionError::RowOutOfRange {
            row,
            count: self.filter_count(),
        })?;
        filter.set_disabled(disabled);
        Ok(())
    }

    /// Whether two handles refer to the same underlying element.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
