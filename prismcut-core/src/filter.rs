//! Attached filter services.
//!
//! A Filter is a processing unit attached to a node, held in an ordered
//! chain with a disabled flag and a string-keyed parameter set. The handle
//! is reference-counted: the graph, the undo history, and UI panels may all
//! hold the same underlying service at once.

use crate::properties::Properties;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Property marking an engine-internal loader filter.
pub const LOADER_PROPERTY: &str = "_loader";

/// Property marking a filter hidden from undo operations.
pub const HIDDEN_PROPERTY: &str = "prismcut:hidden";

/// Plain snapshot form of a filter, used for interchange and captures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterData {
    /// Service name (e.g. the effect identifier)
    pub name: String,

    /// Parameter set
    #[serde(default)]
    pub properties: Properties,

    /// Whether the filter is bypassed
    #[serde(default)]
    pub disabled: bool,
}

impl FilterData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Properties::new(),
            disabled: false,
        }
    }
}

/// Shared handle to an attached filter service.
#[derive(Clone, Debug)]
pub struct Filter(Rc<RefCell<FilterData>>);

impl Filter {
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_data(FilterData::new(name))
    }

    /// Wrap a snapshot in a fresh service instance.
    pub fn from_data(data: FilterData) -> Self {
        Self(Rc::new(RefCell::new(data)))
    }

    /// Capture a snapshot of the current state.
    pub fn data(&self) -> FilterData {
        self.0.borrow().clone()
    }

    pub fn name(&self) -> String {
        self.0.borrow().name.clone()
    }

    pub fn is_disabled(&self) -> bool {
        self.0.borrow().disabled
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.0.borrow_mut().disabled = disabled;
    }

    /// Get a parameter value.
    pub fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().properties.get(key).map(str::to_string)
    }

    /// Set a parameter value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.0.borrow_mut().properties.set(key, value);
    }

    /// Capture the full parameter set.
    pub fn properties(&self) -> Properties {
        self.0.borrow().properties.clone()
    }

    /// Overlay a parameter snapshot onto the live service.
    pub fn inherit(&self, snapshot: &Properties) {
        self.0.borrow_mut().properties.inherit(snapshot);
    }

    /// Engine-internal loader filter, never touched by undo operations.
    pub fn is_loader(&self) -> bool {
        self.0.borrow().properties.get_int(LOADER_PROPERTY).unwrap_or(0) != 0
    }

    /// Filter explicitly hidden from undo operations.
    pub fn is_hidden(&self) -> bool {
        self.0.borrow().properties.get_int(HIDDEN_PROPERTY).unwrap_or(0) != 0
    }

    /// Whether two handles refer to the same underlying service.
    pub fn ptr_eq(&self, other: &Filter) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_round_trip() {
        let filter = Filter::new("volume");
        filter.set("level", "0.5");
        filter.set_disabled(true);

        let data = filter.data();
        assert_eq!(data.name, "volume");
        assert_eq!(data.properties.get("level"), Some("0.5"));
        assert!(data.disabled);

        let copy = Filter::from_data(data);
        assert_eq!(copy.get("level"), Some("0.5".to_string()));
        assert!(copy.is_disabled());
        assert!(!copy.ptr_eq(&filter));
    }

    #[test]
    fn test_shared_handle() {
        let filter = Filter::new("blur");
        let alias = filter.clone();
        alias.set("radius", "4");

        assert_eq!(filter.get("radius"), Some("4".to_string()));
        assert!(filter.ptr_eq(&alias));
    }

    #[test]
    fn test_loader_and_hidden_markers() {
        let filter = Filter::new("avformat");
        assert!(!filter.is_loader());
        assert!(!filter.is_hidden());

        filter.set(LOADER_PROPERTY, "1");
        assert!(filter.is_loader());

        let hidden = Filter::new("fade");
        hidden.set(HIDDEN_PROPERTY, "1");
        assert!(hidden.is_hidden());
    }

    #[test]
    fn test_inherit_overlays_parameters() {
        let filter = Filter::new("volume");
        filter.set("level", "0.1");

        let mut snapshot = Properties::new();
        snapshot.set("level", "0.9");
        filter.inherit(&snapshot);

        assert_eq!(filter.get("level"), Some("0.9".to_string()));
    }
}
