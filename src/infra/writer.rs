// ============================================================
// Layer 6 — Notebook Writer
// ============================================================
// Serialises the scrubbed notebook and writes it to its sink.
//
// Default layout mirrors what Jupyter itself writes:
//   - one-space indentation
//   - non-ASCII characters left as-is (no \uXXXX escapes)
//   - a single trailing newline
// so a scrubbed notebook that had no outputs to begin with
// comes out identical to the file on disk and git sees no diff.
//
// An indent of 0 selects compact single-line output.
//
// The document is rendered into memory first and then written
// in one call, so a serialisation failure never leaves a
// half-written notebook behind.
//
// Reference: serde_json::ser::PrettyFormatter documentation

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{
    ser::{PrettyFormatter, Serializer},
    Value,
};
use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

/// Indentation Jupyter uses when saving notebooks
pub const DEFAULT_INDENT: usize = 1;

/// Writes a notebook to a file or standard output.
pub struct NotebookWriter {
    /// `None` means standard output
    output: Option<PathBuf>,

    /// Spaces per nesting level; 0 = compact
    indent: usize,
}

impl NotebookWriter {
    pub fn new(output: Option<PathBuf>, indent: usize) -> Self {
        let output = output.filter(|p| p.as_os_str() != "-");
        Self { output, indent }
    }

    /// Render the document to bytes, including the trailing newline.
    pub fn render(&self, value: &Value) -> Result<Vec<u8>> {
        let mut buf = Vec::new();

        if self.indent == 0 {
            serde_json::to_writer(&mut buf, value)?;
        } else {
            let indent    = vec![b' '; self.indent];
            let formatter = PrettyFormatter::with_indent(&indent);
            let mut ser   = Serializer::with_formatter(&mut buf, formatter);
            value.serialize(&mut ser)?;
        }

        buf.push(b'\n');
        Ok(buf)
    }

    /// Render and write the document to the configured sink.
    pub fn write(&self, value: &Value) -> Result<()> {
        let bytes = self.render(value)?;

        match &self.output {
            Some(path) => {
                fs::write(path, &bytes)
                    .with_context(|| format!("Cannot write '{}'", path.display()))?;
                tracing::debug!("Wrote {} bytes to '{}'", bytes.len(), path.display());
            }
            None => {
                let mut out = io::stdout().lock();
                out.write_all(&bytes)
                    .and_then(|_| out.flush())
                    .context("Cannot write notebook to standard output")?;
                tracing::debug!("Wrote {} bytes to <stdout>", bytes.len());
            }
        }

        Ok(())
    }
}
