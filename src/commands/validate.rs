//! Validate command implementation
//!
//! Scans the prompt root, prints one line per issue on stderr and a summary on
//! stdout when everything passes.

use std::path::PathBuf;

use console::Style;
use prompt_kit::config::Config;
use prompt_kit::error::{PromptKitError, Result};
use prompt_kit::validate::{self, ScanReport};

use crate::cli::ValidateArgs;

/// Run validate command
pub fn run(root: PathBuf, args: ValidateArgs) -> Result<()> {
    let config = Config::with_root(root).pattern(args.pattern);
    let report = validate::scan(&config)?;
    print_report(&report);

    if report.is_clean() {
        Ok(())
    } else {
        Err(PromptKitError::ValidationFailed {
            count: report.issues.len(),
        })
    }
}

fn print_report(report: &ScanReport) {
    if report.is_clean() {
        println!(
            "{}",
            Style::new()
                .green()
                .apply_to(format!("Validated {} prompt files", report.checked))
        );
        return;
    }

    for issue in &report.issues {
        eprintln!("{}", Style::new().for_stderr().red().apply_to(issue));
    }
}
