pub mod form;
pub mod store;
pub mod view;

pub use form::{CatchForm, Field, FieldErrors};
pub use store::CatchStore;
pub use view::{CatchFilter, CatchSummary, SortDirection, SortKey, SortSpec, project};
