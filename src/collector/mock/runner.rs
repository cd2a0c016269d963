//! Scripted command runner for testing probes without spawning processes.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::collector::command::{CommandError, CommandRunner};

/// Command runner that answers from a table of canned results.
///
/// A program counts as present on the search path once any result was
/// registered for it, or after `add_program`. Clones share the invocation log.
#[derive(Debug, Clone, Default)]
pub struct MockRunner {
    responses: HashMap<String, Result<Vec<u8>, CommandError>>,
    on_path: HashSet<String>,
    calls: Arc<Mutex<Vec<String>>>,
}

fn command_line(program: &str, args: &[&str]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

impl MockRunner {
    /// Creates a runner that knows no programs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the standard output of `program args`.
    pub fn add_output(&mut self, program: &str, args: &[&str], stdout: impl Into<Vec<u8>>) {
        self.on_path.insert(program.to_string());
        self.responses
            .insert(command_line(program, args), Ok(stdout.into()));
    }

    /// Registers a non-zero exit for `program args`.
    pub fn add_failure(&mut self, program: &str, args: &[&str], reason: &str) {
        self.on_path.insert(program.to_string());
        self.responses.insert(
            command_line(program, args),
            Err(CommandError::Failed {
                program: program.to_string(),
                reason: reason.to_string(),
            }),
        );
    }

    /// Marks `program` as present on the search path without scripting it.
    pub fn add_program(&mut self, program: &str) {
        self.on_path.insert(program.to_string());
    }

    /// Removes a program and all its scripted results.
    pub fn remove_program(&mut self, program: &str) {
        self.on_path.remove(program);
        let prefix = format!("{} ", program);
        self.responses
            .retain(|line, _| line != program && !line.starts_with(&prefix));
    }

    /// Command lines run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Number of times `program` was run, with any arguments.
    pub fn call_count(&self, program: &str) -> usize {
        let prefix = format!("{} ", program);
        self.calls()
            .iter()
            .filter(|line| *line == program || line.starts_with(&prefix))
            .count()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<Vec<u8>, CommandError> {
        let line = command_line(program, args);
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(line.clone());
        }

        match self.responses.get(&line) {
            Some(result) => result.clone(),
            None if self.on_path.contains(program) => Err(CommandError::Failed {
                program: program.to_string(),
                reason: format!("no scripted output for {:?}", line),
            }),
            None => Err(CommandError::ProgramNotFound {
                program: program.to_string(),
            }),
        }
    }

    fn lookup(&self, program: &str) -> Option<PathBuf> {
        self.on_path
            .contains(program)
            .then(|| PathBuf::from("/usr/bin").join(program))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_runner_scripted_output() {
        let mut runner = MockRunner::new();
        runner.add_output("uname", &["-smr"], "Linux 6.8.0 x86_64\n");

        assert_eq!(
            runner.run("uname", &["-smr"]).unwrap(),
            b"Linux 6.8.0 x86_64\n"
        );
        assert!(runner.lookup("uname").is_some());
        assert_eq!(runner.calls(), vec!["uname -smr".to_string()]);
    }

    #[test]
    fn test_mock_runner_unknown_program() {
        let runner = MockRunner::new();
        assert!(matches!(
            runner.run("free", &[]),
            Err(CommandError::ProgramNotFound { .. })
        ));
        assert!(runner.lookup("free").is_none());
    }

    #[test]
    fn test_mock_runner_unscripted_arguments() {
        let mut runner = MockRunner::new();
        runner.add_program("snap");
        assert!(matches!(
            runner.run("snap", &["list"]),
            Err(CommandError::Failed { .. })
        ));
    }

    #[test]
    fn test_mock_runner_remove_program() {
        let mut runner = MockRunner::typical_system();
        runner.remove_program("uname");
        assert!(runner.lookup("uname").is_none());
        assert!(matches!(
            runner.run("uname", &["-smr"]),
            Err(CommandError::ProgramNotFound { .. })
        ));
    }

    #[test]
    fn test_mock_runner_clones_share_calls() {
        let mut runner = MockRunner::new();
        runner.add_output("free", &[], "Mem: 1 1\n");
        let observer = runner.clone();

        let _ = runner.run("free", &[]);
        let _ = runner.run("free", &[]);
        assert_eq!(observer.call_count("free"), 2);
    }
}
