//! Edit action implementations
//!
//! This module contains the concrete action types for every undoable
//! filter-chain edit.

pub mod add_filter;
pub mod remove_filter;
pub mod move_filter;
pub mod disable_filter;
pub mod paste_filters;
pub mod change_parameter;

pub use add_filter::{AddFilterAction, AddType};
pub use remove_filter::RemoveFilterAction;
pub use move_filter::MoveFilterAction;
pub use disable_filter::DisableFilterAction;
pub use paste_filters::PasteFiltersAction;
pub use change_parameter::ChangeParameterAction;
