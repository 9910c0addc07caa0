// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// The filter takes no required arguments: run bare, it reads a
// notebook on stdin and writes the scrubbed notebook on stdout,
// which is exactly how git invokes a clean filter:
//
//   [filter "ipynb"]
//       clean = ipynb-output-filter
//
// The optional flags make it usable by hand on files too.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::Args;
use std::path::PathBuf;

use crate::application::scrub_use_case::FilterConfig;
use crate::infra::writer::DEFAULT_INDENT;

/// Arguments for a single scrub pass
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Notebook to read; omit or use "-" for standard input
    pub input: Option<PathBuf>,

    /// Where to write the scrubbed notebook (default: standard output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Spaces per indentation level; 0 writes compact JSON
    #[arg(long, default_value_t = DEFAULT_INDENT)]
    pub indent: usize,
}

/// The application layer never sees clap types
impl From<FilterArgs> for FilterConfig {
    fn from(a: FilterArgs) -> Self {
        FilterConfig {
            input:  a.input,
            output: a.output,
            indent: a.indent,
        }
    }
}
