//! CommandRunner port - abstraction over blocking external processes
//!
//! The step runner only ever observes exit codes, so that is all this port
//! reports back.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// An external command to run to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: PathBuf,
    args: Vec<OsString>,
    current_dir: Option<PathBuf>,
}

impl CommandLine {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    pub fn get_current_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// How a finished process exited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
}

impl CommandStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external commands synchronously
pub trait CommandRunner {
    /// Run `command` and wait for it. `Err` means it could not be started.
    fn run(&self, command: &CommandLine) -> std::io::Result<CommandStatus>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_display_joins_args() {
        let cmd = CommandLine::new("kubectl").args(["apply", "-f", "app/prometheus.yml"]);
        assert_eq!(cmd.to_string(), "kubectl apply -f app/prometheus.yml");
    }

    #[test]
    fn status_success_requires_zero() {
        assert!(CommandStatus::from_code(0).success());
        assert!(!CommandStatus::from_code(1).success());
        assert!(!CommandStatus { code: None }.success());
    }

    #[test]
    fn command_runner_trait_is_object_safe() {
        fn _assert_object_safe(_: &dyn CommandRunner) {}
    }
}
