// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two seams of the filter:
//
//   NotebookSource → where the raw document comes from
//                    (stdin or a file)
//   Scrub          → how a document of a given schema version
//                    is stripped of execution state
//
// The application layer only talks to these traits, so the
// v3 and v4 procedures and the input location can change
// without touching the workflow.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use serde_json::Value;

use crate::domain::error::NotebookError;
use crate::domain::report::ScrubReport;

// ─── NotebookSource ───────────────────────────────────────────────────────────
/// Anything that can produce a parsed notebook document.
///
/// Implementations:
///   - NotebookLoader → reads a file path or standard input
pub trait NotebookSource {
    /// Read and parse the whole document.
    fn load(&self) -> Result<Value>;
}

// ─── Scrub ────────────────────────────────────────────────────────────────────
/// Remove volatile execution state from a document in place.
///
/// Implementations:
///   - NotebookV4 → outputs, execution_count, language_info.version
///   - NotebookV3 → outputs, prompt_number
///   - Notebook   → dispatches on the version tag
///
/// Scrubbing must be idempotent: a second pass changes nothing.
pub trait Scrub {
    fn scrub(&mut self) -> Result<ScrubReport, NotebookError>;
}
