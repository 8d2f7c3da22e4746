//! Static catalog of supported SARIF generators.
//!
//! Each generator is described by a descriptor record instead of a dedicated
//! code branch: one generic routine in `dispatch` expands the invocation
//! template, so adding a scanner means adding a table entry here.

use super::SarifGenerator;

/// How the SARIF output path appears on a scanner's command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputPathStyle {
    /// The path follows the preceding flag as its own token.
    Separate,
    /// The path is glued to a flag, e.g. `--sarif-output=<path>`.
    Assigned(&'static str),
}

/// One element of a scanner invocation template, expanded in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    /// Fixed token, emitted verbatim.
    Lit(&'static str),
    /// The descriptor's verbose arguments, emitted only at debug log level.
    Verbose,
    /// User pass-through options, or the descriptor defaults when none given.
    Options,
    /// The resolved SARIF output path.
    OutputPath(OutputPathStyle),
    /// The mounted working directory to scan.
    WorkingDir,
}

/// Static description of one supported SARIF generator.
#[derive(Debug)]
pub struct ScannerDescriptor {
    pub binary: &'static str,
    pub template: &'static [Piece],
    pub verbose_args: &'static [&'static str],
    pub default_options: &'static [&'static str],
    /// Tolerate a non-zero exit from the scanner process. Gitleaks signals
    /// "leaks found" through its exit code; findings travel in the SARIF
    /// file, so the run must not abort on them.
    pub force_success_exit: bool,
}

pub const GITLEAKS: ScannerDescriptor = ScannerDescriptor {
    binary: "./gitleaks",
    template: &[
        Piece::Lit("dir"),
        Piece::Verbose,
        Piece::Lit("--exit-code"),
        Piece::Lit("0"),
        Piece::Lit("--report-format"),
        Piece::Lit("sarif"),
        Piece::Lit("--report-path"),
        Piece::OutputPath(OutputPathStyle::Separate),
        Piece::WorkingDir,
        Piece::Options,
    ],
    verbose_args: &["--verbose"],
    default_options: &[],
    force_success_exit: true,
};

pub const OPENGREP: ScannerDescriptor = ScannerDescriptor {
    binary: "/home/soos/.local/bin/opengrep",
    template: &[
        Piece::Lit("scan"),
        Piece::Verbose,
        Piece::Lit("--max-log-list-entries=2000"),
        Piece::Options,
        Piece::Lit("--sarif"),
        Piece::OutputPath(OutputPathStyle::Assigned("--sarif-output=")),
        Piece::WorkingDir,
    ],
    verbose_args: &["--verbose"],
    default_options: &["--no-git-ignore"],
    force_success_exit: false,
};

pub const SEMGREP: ScannerDescriptor = ScannerDescriptor {
    binary: "/home/soos/.local/pipx/venvs/semgrep/bin/semgrep",
    template: &[
        Piece::Lit("scan"),
        Piece::Verbose,
        Piece::Lit("--max-log-list-entries=2000"),
        Piece::Options,
        Piece::Lit("--sarif"),
        Piece::OutputPath(OutputPathStyle::Assigned("--sarif-output=")),
        Piece::WorkingDir,
    ],
    verbose_args: &["--verbose"],
    default_options: &[
        "--no-git-ignore",
        "--metrics",
        "off",
        "--config",
        "p/default",
        "--config",
        "p/owasp-top-ten",
        "--config",
        "p/cwe-top-25",
        "--config",
        "p/security-audit",
        "--config",
        "p/secrets",
    ],
    force_success_exit: false,
};

pub const SONARQUBE: ScannerDescriptor = ScannerDescriptor {
    binary: "/home/soos/.local/pipx/venvs/sonar-tools/bin/sonar-findings-export",
    template: &[
        Piece::Verbose,
        Piece::Lit("--format"),
        Piece::Lit("sarif"),
        Piece::Options,
        Piece::Lit("--file"),
        Piece::OutputPath(OutputPathStyle::Separate),
    ],
    verbose_args: &["-v", "DEBUG"],
    default_options: &["--httpTimeout", "60"],
    force_success_exit: false,
};

/// Look up the descriptor for a generator that runs a process.
///
/// `File` runs nothing and `Unknown` is the unset sentinel, so neither has an
/// entry; callers treat `None` for anything but `File` as a configuration
/// error.
pub fn descriptor_for(generator: SarifGenerator) -> Option<&'static ScannerDescriptor> {
    match generator {
        SarifGenerator::Gitleaks => Some(&GITLEAKS),
        SarifGenerator::Opengrep => Some(&OPENGREP),
        SarifGenerator::Semgrep => Some(&SEMGREP),
        SarifGenerator::SonarQube => Some(&SONARQUBE),
        SarifGenerator::Unknown | SarifGenerator::File => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_backed_generators_have_descriptors() {
        for generator in [
            SarifGenerator::Gitleaks,
            SarifGenerator::Opengrep,
            SarifGenerator::Semgrep,
            SarifGenerator::SonarQube,
        ] {
            assert!(descriptor_for(generator).is_some(), "{generator}");
        }
    }

    #[test]
    fn file_and_unknown_have_no_descriptor() {
        assert!(descriptor_for(SarifGenerator::File).is_none());
        assert!(descriptor_for(SarifGenerator::Unknown).is_none());
    }

    #[test]
    fn only_gitleaks_tolerates_non_zero_exit() {
        assert!(GITLEAKS.force_success_exit);
        assert!(!OPENGREP.force_success_exit);
        assert!(!SEMGREP.force_success_exit);
        assert!(!SONARQUBE.force_success_exit);
    }
}
