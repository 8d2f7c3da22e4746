//! Fixed paths of the container image.
//!
//! These locations are part of the image contract: the target source tree is
//! mounted at [`WORKING_DIRECTORY`], and everything the reporting step reads
//! back is written under [`OUTPUT_DIRECTORY`].

/// Directory where the source code under analysis is mounted.
pub const WORKING_DIRECTORY: &str = "/home/soos/workspace";

/// Directory where scan results are written and read back.
pub const OUTPUT_DIRECTORY: &str = "/home/soos/results";

/// File name of the SARIF report produced by the scanner step.
pub const SARIF_FILE_NAME: &str = "soosio.sast.sarif.json";

/// JavaScript entrypoint of the reporting CLI bundled in the image.
pub const REPORT_CLI_ENTRYPOINT: &str = "./node_modules/@soos-io/soos-sast/bin/index.js";

/// Runtime used to start the reporting CLI.
pub const REPORT_CLI_RUNTIME: &str = "node";

/// Full path of the SARIF file exchanged between the two steps.
pub fn sarif_output_file() -> String {
    format!("{OUTPUT_DIRECTORY}/{SARIF_FILE_NAME}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sarif_file_lives_in_output_directory() {
        assert_eq!(
            sarif_output_file(),
            "/home/soos/results/soosio.sast.sarif.json"
        );
    }
}
