//! # Batch Invoker
//!
//! Trains one detokenizer per configured language, strictly in order.
//! Each language is announced, then its trainer runs to completion before
//! the next one starts. The first unsuccessful child ends the batch.

use std::io::Write;

use tracing::{debug, info};

use crate::command::CommandSpec;
use crate::config::{BatchConfig, Language};
use crate::error::{DetokError, Result};
use crate::runner::ProcessRunner;

/// Languages whose trainer finished successfully, in invocation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    completed: Vec<Language>,
}

impl BatchReport {
    pub fn completed(&self) -> &[Language] {
        &self.completed
    }
}

/// Runs the trainer for each language of a [`BatchConfig`] through a
/// [`ProcessRunner`], stopping at the first failure.
pub struct BatchInvoker<'a, R> {
    config: &'a BatchConfig,
    runner: R,
}

impl<'a, R: ProcessRunner> BatchInvoker<'a, R> {
    pub fn new(config: &'a BatchConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// Run the trainer for every language, writing a progress notice to
    /// `notices` before each invocation.
    pub fn run<W: Write>(&mut self, notices: &mut W) -> Result<BatchReport> {
        let mut report = BatchReport::default();

        for language in self.config.languages() {
            let command = CommandSpec::for_language(self.config, language);

            writeln!(notices, "Training detokenizer for {language}")
                .and_then(|()| notices.flush())
                .map_err(DetokError::Notice)?;

            info!(%language, "training detokenizer");
            debug!(%command, "trainer command");

            let status = self.runner.run(&command)?;
            status.check(&command)?;

            info!(%language, "detokenizer trained");
            report.completed.push(language.clone());
        }

        Ok(report)
    }

    /// Consume the invoker and hand back its runner.
    pub fn into_runner(self) -> R {
        self.runner
    }
}
