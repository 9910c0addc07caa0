// ============================================================
// Layer 3 — Notebook Errors
// ============================================================
// Every way a notebook document can be rejected.
//
// The scrubber only looks at a handful of fields, so the only
// failures are an unsupported version tag and a document that
// is missing one of the containers we have to walk.
// Missing *optional* fields (outputs, execution_count, ...) are
// never errors — they are simply left alone.
//
// Reference: Rust Book §9 (Error Handling)
//            thiserror crate documentation

use serde_json::Value;
use thiserror::Error;

/// A notebook document that cannot be scrubbed.
#[derive(Debug, Error)]
pub enum NotebookError {
    /// `nbformat` is present but is neither 3 nor 4.
    /// Rendered as JSON, so `5` prints as `5` and `"4"` as `"4"`.
    #[error("Unknown nbformat {0}")]
    UnknownFormat(Value),

    /// The top level of the input is an array, string, number, ...
    #[error("notebook is not a JSON object")]
    NotAnObject,

    #[error("notebook has no 'nbformat' field")]
    MissingFormat,

    /// A container the scrubber must walk is absent or not an array
    #[error("nbformat {version} notebook has no '{field}' array")]
    MissingArray { version: u8, field: String },

    /// An element of a cells/worksheets array is not an object
    #[error("entry {index} of '{container}' is not a JSON object")]
    InvalidEntry { container: String, index: usize },
}
