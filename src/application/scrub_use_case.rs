// ============================================================
// Layer 2 — ScrubUseCase
// ============================================================
// Runs one read → scrub → write pass:
//
//   Step 1: Load and parse the notebook    (Layer 4 - data)
//   Step 2: Classify by nbformat and scrub (Layer 4 - data)
//   Step 3: Render and write the result    (Layer 6 - infra)
//
// Any failure stops the pass before Step 3 writes anything, so
// a rejected notebook never produces partial output.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::Result;
use std::path::PathBuf;

use crate::data::{loader::NotebookLoader, normalizer::normalize};
use crate::domain::{report::ScrubReport, traits::NotebookSource};
use crate::infra::writer::{NotebookWriter, DEFAULT_INDENT};

// ─── Filter Configuration ────────────────────────────────────────────────────
// Where to read from, where to write to, and how to lay out the
// output. Built from the command line by Layer 1; the defaults
// are exactly what a git clean filter needs.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    pub input:  Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub indent: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            input:  None,
            output: None,
            indent: DEFAULT_INDENT,
        }
    }
}

// ─── ScrubUseCase ─────────────────────────────────────────────────────────────
pub struct ScrubUseCase {
    config: FilterConfig,
}

impl ScrubUseCase {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// Execute the full pass and return what was changed
    pub fn execute(&self) -> Result<ScrubReport> {
        let cfg = &self.config;
        tracing::debug!(?cfg, "Filter config");

        // ── Step 1: Load ──────────────────────────────────────────────────────
        let loader = NotebookLoader::new(cfg.input.clone());
        let raw    = loader.load()?;

        // ── Step 2: Scrub ─────────────────────────────────────────────────────
        // NotebookError converts into anyhow::Error unchanged, so the
        // top-level message stays "Unknown nbformat <v>".
        let (clean, report) = normalize(raw)?;

        // ── Step 3: Write ─────────────────────────────────────────────────────
        NotebookWriter::new(cfg.output.clone(), cfg.indent).write(&clean)?;

        tracing::info!(
            "Scrubbed {} (nbformat {}): {} cells, {} outputs cleared, {} counters reset{}",
            loader.describe(),
            report.version,
            report.cells,
            report.outputs_cleared,
            report.counters_reset,
            if report.language_version_removed { ", language version removed" } else { "" },
        );

        Ok(report)
    }
}
