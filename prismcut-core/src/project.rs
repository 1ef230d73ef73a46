//! Project roots and engine-level chain helpers.
//!
//! The Project owns the three top-level search domains an edit target may
//! live in (the active timeline, the bin of standalone clips, the currently
//! open clip) and the event sender actions broadcast through. The free
//! functions are the engine helpers the edit actions call: interchange
//! snapshots of a filter chain, the paste merge rule, and the post-insert
//! normalization pass.

use crate::error::ActionError;
use crate::events::EditEventSender;
use crate::filter::{Filter, FilterData};
use crate::locator;
use crate::node::Node;
use uuid::Uuid;

/// The open composition state: search roots plus the notification sink.
#[derive(Default)]
pub struct Project {
    timeline: Option<Node>,
    bin: Option<Node>,
    open_clip: Option<Node>,
    events: EditEventSender,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_timeline(&mut self, timeline: Option<Node>) {
        self.timeline = timeline;
    }

    pub fn timeline(&self) -> Option<&Node> {
        self.timeline.as_ref()
    }

    pub fn set_bin(&mut self, bin: Option<Node>) {
        self.bin = bin;
    }

    pub fn bin(&self) -> Option<&Node> {
        self.bin.as_ref()
    }

    pub fn set_open_clip(&mut self, clip: Option<Node>) {
        self.open_clip = clip;
    }

    pub fn open_clip(&self) -> Option<&Node> {
        self.open_clip.as_ref()
    }

    pub fn set_event_sender(&mut self, events: EditEventSender) {
        self.events = events;
    }

    pub fn events(&self) -> &EditEventSender {
        &self.events
    }

    /// Find the live instance of a logical node across the search roots.
    pub fn find_node(&self, uuid: Uuid) -> Option<Node> {
        locator::locate(
            uuid,
            self.timeline.as_ref(),
            self.bin.as_ref(),
            self.open_clip.as_ref(),
        )
    }

    /// Like [`find_node`](Self::find_node), but an absent target is the
    /// hard error every action treats it as.
    pub fn resolve(&self, uuid: Uuid) -> Result<Node, ActionError> {
        let node = self.find_node(uuid);
        debug_assert!(node.is_some(), "action target {uuid} not in any root");
        node.ok_or(ActionError::NodeNotFound(uuid))
    }
}

/// Serialize a node's user-visible filter chain to interchange text.
///
/// Loader and hidden filters belong to the engine, not the user edit, and
/// are excluded from the snapshot.
pub fn export_filters(node: &Node) -> String {
    let data: Vec<FilterData> = node
        .filters()
        .iter()
        .filter(|f| !f.is_loader() && !f.is_hidden())
        .map(Filter::data)
        .collect();
    serde_json::to_string(&data).unwrap_or_default()
}

/// Parse an interchange snapshot back into a filter set.
///
/// Tolerant by contract: malformed or empty text yields an empty set, which
/// callers treat as "nothing to do" rather than an error.
pub fn import_filters(text: &str) -> Vec<FilterData> {
    serde_json::from_str(text).unwrap_or_default()
}

/// Merge a pasted filter set onto a node.
///
/// Pasted filters are appended to the end of the chain in snapshot order,
/// then normalized like any other fresh insert.
pub fn paste_filters(node: &Node, set: &[FilterData]) {
    let first = node.filter_count();
    for data in set {
        node.append_filter(Filter::from_data(data.clone()));
    }
    adjust_filters(node, first);
}

/// Post-insert normalization pass.
///
/// Freshly attached user filters default to covering the whole node: every
/// non-loader, non-hidden filter from `from_row` onward gets its `in`/`out`
/// range defaulted or clamped to `[0, length - 1]`. Nodes without a length
/// are left untouched.
pub fn adjust_filters(node: &Node, from_row: usize) {
    let length = node.length();
    if length <= 0 {
        return;
    }
    let last = length - 1;
    for filter in node.filters().iter().skip(from_row) {
        if filter.is_loader() || filter.is_hidden() {
            continue;
        }
        if filter.get("in").is_none() {
            filter.set("in", "0");
        }
        let out = filter.get("out").and_then(|v| v.parse::<i64>().ok());
        match out {
            Some(out) if out <= last => {}
            _ => filter.set("out", last.to_string()),
        }
    }
}
