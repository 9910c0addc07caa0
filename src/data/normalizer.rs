// ============================================================
// Layer 4 — Document Normalizer
// ============================================================
// Strips execution state from a notebook so that committing it
// only records code and text changes.
//
// What gets reset, per schema version:
//
//   nbformat 4
//     metadata.language_info.version   → key removed
//     cells[*].outputs                 → []
//     cells[*].execution_count         → null
//
//   nbformat 3
//     worksheets[*].cells[*].outputs        → []
//     worksheets[*].cells[*].prompt_number  → null
//
// A field that is not present is left absent; nothing is ever
// added to a cell. Every other key, including its position in
// the object, is preserved.
//
// Reference: Rust Book §10 (Traits)
//            serde_json Map documentation

use serde_json::Value;

use crate::domain::error::NotebookError;
use crate::domain::notebook::{Notebook, NotebookV3, NotebookV4};
use crate::domain::report::ScrubReport;
use crate::domain::traits::Scrub;

/// v4 cell counter
pub const EXECUTION_COUNT_KEY: &str = "execution_count";

/// v3 cell counter
pub const PROMPT_NUMBER_KEY: &str = "prompt_number";

/// Interpreter version inside `metadata.language_info`
pub const LANGUAGE_VERSION_KEY: &str = "version";

impl Scrub for NotebookV4 {
    fn scrub(&mut self) -> Result<ScrubReport, NotebookError> {
        let mut report = ScrubReport::new(4);

        match self.language_info_mut() {
            // shift_remove keeps the order of the remaining keys
            Some(info) => {
                report.language_version_removed =
                    info.shift_remove(LANGUAGE_VERSION_KEY).is_some();
            }
            None => tracing::debug!("No metadata.language_info object; skipping version"),
        }

        for mut cell in self.cells_mut()? {
            let outputs = cell.clear_outputs();
            let counter = cell.reset_counter(EXECUTION_COUNT_KEY);
            report.record_cell(outputs, counter);
        }

        Ok(report)
    }
}

impl Scrub for NotebookV3 {
    fn scrub(&mut self) -> Result<ScrubReport, NotebookError> {
        let mut report = ScrubReport::new(3);

        for mut cell in self.cells_mut()? {
            let outputs = cell.clear_outputs();
            let counter = cell.reset_counter(PROMPT_NUMBER_KEY);
            report.record_cell(outputs, counter);
        }

        Ok(report)
    }
}

impl Scrub for Notebook {
    fn scrub(&mut self) -> Result<ScrubReport, NotebookError> {
        match self {
            Notebook::V3(nb) => nb.scrub(),
            Notebook::V4(nb) => nb.scrub(),
        }
    }
}

/// Classify and scrub a parsed document in one step.
///
/// Returns the cleaned document ready for serialisation,
/// together with a summary of what was changed.
pub fn normalize(value: Value) -> Result<(Value, ScrubReport), NotebookError> {
    let mut notebook = Notebook::from_value(value)?;
    let report = notebook.scrub()?;

    tracing::debug!(
        "Scrubbed nbformat {} notebook: {} cells",
        notebook.version(),
        report.cells
    );

    Ok((notebook.into_value(), report))
}
