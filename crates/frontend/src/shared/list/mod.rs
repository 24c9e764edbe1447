pub mod actions;
pub mod controller;
pub mod filter;
pub mod guard;
pub mod hook;
pub mod pagination;
pub mod sort;

pub use controller::{EmptyState, ListEvent, ListPrefs, ListState, LoadPhase, SearchMode};
pub use hook::{use_list_controller, ListController, ListSettings};
pub use pagination::PageWindow;
pub use sort::{SortDirection, SortState};
