// ============================================================
// Layer 4 — Notebook Loader
// ============================================================
// Reads the raw notebook text and parses it into a JSON tree.
//
// Where the text comes from:
//   - no path, or the path "-"  → standard input
//     (this is how git runs a clean filter)
//   - any other path            → that file
//
// The whole input is read before parsing; notebooks are small
// and the filter has to see the full document anyway.
//
// Parsing keeps object keys in their original order and keeps
// number text as written, except that an unsigned exponent is
// re-emitted as `e+N`. Python's json module always writes the
// sign, so a Jupyter-saved field comes back exactly as read.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (Reading a File)

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use crate::domain::traits::NotebookSource;

/// Loads a notebook from a file or standard input.
/// Implements the NotebookSource trait from Layer 3.
pub struct NotebookLoader {
    /// `None` means standard input
    input: Option<PathBuf>,
}

impl NotebookLoader {
    pub fn new(input: Option<PathBuf>) -> Self {
        // "-" is the conventional spelling of stdin
        let input = input.filter(|p| p.as_os_str() != "-");
        Self { input }
    }

    /// Human-readable name of the input, for log and error messages
    pub fn describe(&self) -> String {
        match &self.input {
            Some(path) => format!("'{}'", path.display()),
            None => "<stdin>".to_string(),
        }
    }
}

impl NotebookSource for NotebookLoader {
    fn load(&self) -> Result<Value> {
        let text = match &self.input {
            Some(path) => read_file(path)?,
            None => read_stdin()?,
        };

        tracing::debug!("Read {} bytes from {}", text.len(), self.describe());

        parse(&text).with_context(|| format!("Invalid notebook JSON in {}", self.describe()))
    }
}

/// Deepest array/object nesting accepted, the same bound
/// Python's json module hits with its default recursion limit.
pub const MAX_NESTING_DEPTH: usize = 1000;

/// Parse notebook text into a JSON tree.
///
/// serde_json's own 128-level limit is disabled because widget
/// state and rich outputs can legitimately nest deeper; the
/// explicit depth check keeps the recursive parser bounded.
pub fn parse(text: &str) -> Result<Value> {
    let depth = nesting_depth(text);
    if depth > MAX_NESTING_DEPTH {
        bail!("document nests {depth} levels deep (limit {MAX_NESTING_DEPTH})");
    }

    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value = Value::deserialize(&mut de)?;
    de.end()?;
    Ok(value)
}

/// Maximum bracket depth of JSON text, ignoring brackets in strings.
fn nesting_depth(text: &str) -> usize {
    let mut depth     = 0usize;
    let mut deepest   = 0usize;
    let mut in_string = false;
    let mut escaped   = false;

    for b in text.bytes() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    deepest
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Cannot read '{}'", path.display()))
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut text)
        .context("Cannot read notebook from standard input")?;
    Ok(text)
}
