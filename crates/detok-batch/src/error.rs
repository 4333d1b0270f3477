use thiserror::Error;

/// Errors that can occur while driving the detokenizer trainer.
#[derive(Debug, Error)]
pub enum DetokError {
    /// A child process exited unsuccessfully. `code` is `None` when the
    /// process was terminated by a signal.
    #[error("command `{command}` failed with {}", describe_exit(.code))]
    ChildProcessFailure {
        /// The full command line that failed.
        command: String,
        /// Exit code reported by the OS, if any.
        code: Option<i32>,
    },

    /// The OS refused to start the process (missing executable, permissions).
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing a progress notice failed.
    #[error("failed to write progress notice: {0}")]
    Notice(#[source] std::io::Error),
}

impl DetokError {
    /// Process exit code the driver should terminate with.
    ///
    /// A failed child's own code is propagated. Signals, spawn failures and
    /// output errors map to `1`.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ChildProcessFailure {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "termination by signal".to_string(),
    }
}

/// Result type alias for driver operations.
pub type Result<T> = std::result::Result<T, DetokError>;
