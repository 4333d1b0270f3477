//! # Process Runner
//!
//! The seam between the batch and the operating system. [`SystemRunner`]
//! spawns real child processes; tests substitute a recording runner.

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::command::CommandSpec;
use crate::error::{DetokError, Result};

/// How a child process finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatus {
    code: Option<i32>,
}

impl ExitStatus {
    pub const SUCCESS: Self = Self { code: Some(0) };

    /// `None` means the process was terminated by a signal.
    pub fn from_code(code: Option<i32>) -> Self {
        Self { code }
    }

    pub fn code(self) -> Option<i32> {
        self.code
    }

    pub fn success(self) -> bool {
        self.code == Some(0)
    }

    /// Turn an unsuccessful status into [`DetokError::ChildProcessFailure`].
    pub fn check(self, command: &CommandSpec) -> Result<()> {
        if self.success() {
            Ok(())
        } else {
            Err(DetokError::ChildProcessFailure {
                command: command.to_string(),
                code: self.code,
            })
        }
    }
}

impl From<std::process::ExitStatus> for ExitStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self::from_code(status.code())
    }
}

/// Runs a command to completion and reports its exit status.
pub trait ProcessRunner {
    fn run(&mut self, command: &CommandSpec) -> Result<ExitStatus>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &mut R {
    fn run(&mut self, command: &CommandSpec) -> Result<ExitStatus> {
        (**self).run(command)
    }
}

/// Spawns commands with [`std::process::Command`], inheriting stdio and
/// blocking until the child exits. No timeout is applied.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    working_dir: Option<PathBuf>,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every child from `dir` instead of the current directory.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&mut self, command: &CommandSpec) -> Result<ExitStatus> {
        debug!(%command, cwd = ?self.working_dir, "spawning");

        let mut cmd = Command::new(command.program());
        cmd.args(command.args());
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        let status = cmd.status().map_err(|source| DetokError::Spawn {
            command: command.to_string(),
            source,
        })?;
        Ok(status.into())
    }
}
