pub mod api_error;
pub mod entity;
pub mod record;

pub use api_error::ApiErrorBody;
pub use entity::{EntityKind, EntityRoute, HttpVerb, RouteError, RouteTemplate};
pub use record::{Record, RecordId};
