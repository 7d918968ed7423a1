//! Content collections: blog articles, events and FAQ entries.
//!
//! - `schema`: typed records
//! - `validate`: raw record -> typed record, or every field problem at once
//! - `collections`: display ordering helpers
//! - `loader`: validation of a content directory on disk

mod collections;
mod error;
mod loader;
mod schema;
mod validate;

pub use collections::{sort_articles, sort_faq, upcoming_events};
pub use error::{FieldError, FieldErrorReason, ValidationFailure};
pub use loader::{load_collection, load_content_dir, ContentReport, LoadedRecord};
pub use schema::{
    Article, ContentKind, ContentKindError, ContentRecord, Event, EventType, FaqEntry,
};
pub use validate::validate;
