//! Scanner selection and invocation.

pub mod catalog;
pub mod dispatch;

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

pub use catalog::{ScannerDescriptor, descriptor_for};
pub use dispatch::build_scanner_command;

/// Source of the SARIF report consumed by the reporting step.
///
/// `File` means a report already exists in the working directory and no
/// scanner process is spawned. `Unknown` is the unset sentinel; selecting it
/// fails dispatch before any process starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[value(rename_all = "verbatim")]
pub enum SarifGenerator {
    #[value(hide = true)]
    Unknown,
    File,
    Gitleaks,
    Opengrep,
    Semgrep,
    SonarQube,
}

impl SarifGenerator {
    pub fn as_str(self) -> &'static str {
        match self {
            SarifGenerator::Unknown => "Unknown",
            SarifGenerator::File => "File",
            SarifGenerator::Gitleaks => "Gitleaks",
            SarifGenerator::Opengrep => "Opengrep",
            SarifGenerator::Semgrep => "Semgrep",
            SarifGenerator::SonarQube => "SonarQube",
        }
    }
}

impl fmt::Display for SarifGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
