// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses the command line with clap and hands the resulting
// configuration to Layer 2. Exit status and error printing
// are handled by main.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::FilterArgs;

/// Strip outputs and execution counts from a Jupyter notebook.
#[derive(Parser, Debug)]
#[command(
    name = "ipynb-output-filter",
    version,
    about = "Strip outputs, execution counts and language version from a Jupyter notebook."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: FilterArgs,
}

impl Cli {
    /// Run one scrub pass with the parsed arguments.
    pub fn run(self) -> Result<()> {
        use crate::application::scrub_use_case::ScrubUseCase;

        ScrubUseCase::new(self.args.into()).execute()?;
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::scrub_use_case::FilterConfig;
    use std::path::PathBuf;

    #[test]
    fn test_no_arguments_means_stdio() {
        let cli = Cli::try_parse_from(["ipynb-output-filter"]).unwrap();
        assert_eq!(FilterConfig::from(cli.args), FilterConfig::default());
    }

    #[test]
    fn test_file_arguments() {
        let cli = Cli::try_parse_from([
            "ipynb-output-filter",
            "in.ipynb",
            "-o",
            "out.ipynb",
            "--indent",
            "2",
        ])
        .unwrap();
        let cfg = FilterConfig::from(cli.args);

        assert_eq!(cfg.input, Some(PathBuf::from("in.ipynb")));
        assert_eq!(cfg.output, Some(PathBuf::from("out.ipynb")));
        assert_eq!(cfg.indent, 2);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
