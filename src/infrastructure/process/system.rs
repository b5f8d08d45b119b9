//! Blocking process runner backed by `std::process::Command`

use std::process::{Command, Stdio};

use crate::domain::ports::{CommandLine, CommandRunner, CommandStatus};

/// Runs commands with inherited stdio and waits for them to exit
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner {
    quiet: bool,
}

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    /// Discard the child's stdout/stderr instead of inheriting them
    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &CommandLine) -> std::io::Result<CommandStatus> {
        let mut cmd = Command::new(command.program());
        cmd.args(command.get_args()).stdin(Stdio::null());
        if let Some(dir) = command.get_current_dir() {
            cmd.current_dir(dir);
        }
        if self.quiet {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        }

        let status = cmd.status()?;
        Ok(CommandStatus {
            code: status.code(),
        })
    }
}
