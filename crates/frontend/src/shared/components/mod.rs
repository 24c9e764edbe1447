pub mod list_page;
pub mod pagination_controls;
pub mod table;

pub use list_page::{Column, ColumnKind, EntityListPage};
pub use pagination_controls::PaginationControls;
