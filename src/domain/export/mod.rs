//! Export formatting: turns a loaded trip into the template service payload.
//!
//! Pure functions only; the outbound call lives behind
//! [`crate::ports::TripDocumentRenderer`].

mod path_formatter;
mod payload;
mod sanitize;

pub use path_formatter::{format_paths, PathRecord};
pub use payload::{ExportedDocument, MergeFields, TripTemplatePayload};
pub use sanitize::{sanitize, STRIPPED_CHARS};
