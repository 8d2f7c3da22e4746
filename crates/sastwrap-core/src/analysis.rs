//! Run orchestration: scanner step, then report step.

use tracing::info;

use crate::command::mapping::{ReportArgs, ReportOverrides};
use crate::config::ScanConfiguration;
use crate::constants;
use crate::error::AnalysisError;
use crate::exec::CommandRunner;
use crate::scanner::{self, SarifGenerator};

/// Execute one full analysis run.
///
/// The scanner step always completes (or fails) before the report step
/// starts: the report step reads the SARIF file the scanner wrote. The report
/// step's exit code is enforced, so a failing upload fails the run.
pub fn run_analysis(
    config: &ScanConfiguration,
    runner: &dyn CommandRunner,
) -> Result<(), AnalysisError> {
    let source_code_path = match config.sarif_generator {
        SarifGenerator::File => {
            info!(
                "checking {} for *.sarif.json files",
                constants::WORKING_DIRECTORY
            );
            constants::WORKING_DIRECTORY.to_string()
        }
        generator => {
            let descriptor = scanner::descriptor_for(generator)
                .ok_or_else(|| AnalysisError::GeneratorNotImplemented(generator.to_string()))?;
            let command = scanner::build_scanner_command(descriptor, config);
            runner.run(&command, !descriptor.force_success_exit)?;
            constants::OUTPUT_DIRECTORY.to_string()
        }
    };

    let overrides = ReportOverrides {
        output_directory: Some(constants::OUTPUT_DIRECTORY.to_string()),
        source_code_path: Some(source_code_path),
        ..Default::default()
    };
    let report = ReportArgs::from_config(config, &overrides).to_command();
    runner.run(&report, true)
}
