//! External command execution.

use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Error type for command execution failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The executable could not be located.
    #[error("program not found: {program}")]
    ProgramNotFound { program: String },
    /// The process started but exited non-zero, or its output could not be read.
    #[error("{program} failed: {reason}")]
    Failed { program: String, reason: String },
}

/// Runs external programs on behalf of probes.
pub trait CommandRunner: Send + Sync {
    /// Runs `program` with `args` and returns its complete standard output.
    ///
    /// Standard error is discarded. There are no retries.
    fn run(&self, program: &str, args: &[&str]) -> Result<Vec<u8>, CommandError>;

    /// Looks `program` up on the executable search path.
    fn lookup(&self, program: &str) -> Option<PathBuf>;
}

/// Runner that spawns real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<Vec<u8>, CommandError> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => CommandError::ProgramNotFound {
                    program: program.to_string(),
                },
                _ => CommandError::Failed {
                    program: program.to_string(),
                    reason: e.to_string(),
                },
            })?;

        if !output.status.success() {
            return Err(CommandError::Failed {
                program: program.to_string(),
                reason: output.status.to_string(),
            });
        }

        Ok(output.stdout)
    }

    fn lookup(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_runner_missing_program() {
        let runner = SystemRunner::new();
        let err = runner
            .run("hostfetch-definitely-missing-binary", &[])
            .unwrap_err();
        assert_eq!(
            err,
            CommandError::ProgramNotFound {
                program: "hostfetch-definitely-missing-binary".to_string()
            }
        );
    }

    #[test]
    fn test_system_runner_lookup_missing() {
        let runner = SystemRunner::new();
        assert!(runner.lookup("hostfetch-definitely-missing-binary").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_captures_stdout() {
        let runner = SystemRunner::new();
        let out = runner.run("sh", &["-c", "echo hello; echo ignored >&2"]).unwrap();
        assert_eq!(out, b"hello\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_nonzero_exit() {
        let runner = SystemRunner::new();
        let err = runner.run("sh", &["-c", "echo partial; exit 3"]).unwrap_err();
        assert!(matches!(err, CommandError::Failed { ref program, .. } if program == "sh"));
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_lookup_shell() {
        let runner = SystemRunner::new();
        assert!(runner.lookup("sh").is_some());
    }
}
