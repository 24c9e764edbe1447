pub mod sortable_header_cell;
pub mod status_cell;

pub use sortable_header_cell::SortableHeaderCell;
pub use status_cell::StatusCell;
