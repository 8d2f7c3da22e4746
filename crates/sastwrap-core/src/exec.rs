//! Child-process execution.

use std::process::{Command, Stdio};

use tracing::debug;

use crate::command::CommandLine;
use crate::error::AnalysisError;

/// Seam between orchestration and the operating system.
///
/// Orchestration tests substitute a recording implementation; production
/// always uses [`ProcessRunner`].
pub trait CommandRunner {
    /// Run the command to completion.
    ///
    /// With `enforce_exit`, a non-zero exit code is a failure carrying the
    /// command name and code. Without it the exit code is ignored, which is
    /// how generators that signal findings through their exit code are kept
    /// from aborting the run.
    fn run(&self, command: &CommandLine, enforce_exit: bool) -> Result<(), AnalysisError>;
}

/// Runs commands as real child processes.
///
/// Standard streams are inherited so scanner output streams live to the
/// console. Processes are created directly from the token list; no shell is
/// involved.
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &CommandLine, enforce_exit: bool) -> Result<(), AnalysisError> {
        debug!("running command: {command}");

        let status = Command::new(command.program())
            .args(command.arg_values())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| AnalysisError::Spawn {
                command: command.program().to_string(),
                source,
            })?;

        if status.success() || !enforce_exit {
            return Ok(());
        }
        match status.code() {
            Some(code) => Err(AnalysisError::CommandFailed {
                command: command.program().to_string(),
                code,
            }),
            None => Err(AnalysisError::CommandKilled {
                command: command.program().to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh(script: &str) -> CommandLine {
        let mut cmd = CommandLine::new("/bin/sh");
        cmd.arg("-c").arg(script);
        cmd
    }

    #[test]
    fn zero_exit_succeeds() {
        ProcessRunner.run(&sh("exit 0"), true).expect("exit 0");
    }

    #[test]
    fn non_zero_exit_fails_with_the_code() {
        let err = ProcessRunner.run(&sh("exit 7"), true).unwrap_err();

        match err {
            AnalysisError::CommandFailed { command, code } => {
                assert_eq!(command, "/bin/sh");
                assert_eq!(code, 7);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_zero_exit_is_ignored_when_not_enforced() {
        ProcessRunner
            .run(&sh("exit 1"), false)
            .expect("exit code ignored");
    }

    #[test]
    fn missing_binary_is_a_spawn_error() {
        let cmd = CommandLine::new("/nonexistent/sastwrap-test-binary");
        let err = ProcessRunner.run(&cmd, true).unwrap_err();

        assert!(matches!(err, AnalysisError::Spawn { .. }));
    }
}
