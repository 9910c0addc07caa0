// ============================================================
// Layer 3 — Scrub Report
// ============================================================
// A tally of what one scrub pass changed.
//
// The filter's output is the notebook itself, so this summary
// only ever reaches the log (stderr). It is also what the tests
// use to check that a pass touched the fields it should have.

/// Counts produced by scrubbing a single notebook
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrubReport {
    /// Schema version of the scrubbed document (3 or 4)
    pub version: u8,

    /// Number of cells visited
    pub cells: usize,

    /// Cells whose `outputs` field was reset to []
    pub outputs_cleared: usize,

    /// Cells whose `execution_count` / `prompt_number` was nulled
    pub counters_reset: usize,

    /// True if `metadata.language_info.version` was removed (v4 only)
    pub language_version_removed: bool,
}

impl ScrubReport {
    pub fn new(version: u8) -> Self {
        Self { version, ..Self::default() }
    }

    /// Account for one visited cell
    pub fn record_cell(&mut self, outputs_cleared: bool, counter_reset: bool) {
        self.cells += 1;
        self.outputs_cleared += usize::from(outputs_cleared);
        self.counters_reset  += usize::from(counter_reset);
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_cell_counts() {
        let mut report = ScrubReport::new(4);
        report.record_cell(true, true);
        report.record_cell(false, false);
        report.record_cell(true, false);

        assert_eq!(report.cells, 3);
        assert_eq!(report.outputs_cleared, 2);
        assert_eq!(report.counters_reset, 1);
        assert!(!report.language_version_removed);
    }
}
