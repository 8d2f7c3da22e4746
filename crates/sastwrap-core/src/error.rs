use thiserror::Error;

/// Failures raised by the scanner and report steps.
///
/// All variants are fatal: the top-level handler logs them and the process
/// exits with code 1. There is no retry path.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The selected generator has no entry in the scanner catalog.
    #[error("sarif generator not implemented: {0}")]
    GeneratorNotImplemented(String),

    /// A child process finished with a non-zero exit code.
    #[error("{command} failed with exit code {code}")]
    CommandFailed { command: String, code: i32 },

    /// A child process was terminated by a signal before exiting.
    #[error("{command} was terminated by a signal")]
    CommandKilled { command: String },

    /// The child process could not be started at all.
    #[error("failed to start {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
