//! Command lines handed to the operating system.

use std::fmt;

use crate::config::{BatchConfig, Language};

/// An ordered, non-empty token sequence: the program followed by its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    tokens: Vec<String>,
}

impl CommandSpec {
    /// Create a command from a program and its arguments.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens = vec![program.into()];
        tokens.extend(args.into_iter().map(Into::into));
        Self { tokens }
    }

    /// Build the trainer invocation for `language`.
    ///
    /// Layout: interpreter, memory flags, entry point, then
    /// `-raw -tok -out -trainsize -regularization` with their values.
    pub fn for_language(config: &BatchConfig, language: &Language) -> Self {
        let mut tokens: Vec<String> = config
            .interpreter()
            .iter()
            .chain(config.memory_flags())
            .cloned()
            .collect();
        tokens.push(config.entry_point().to_string());
        tokens.extend([
            "-raw".to_string(),
            config.raw().render(language),
            "-tok".to_string(),
            config.tokenized().render(language),
            "-out".to_string(),
            config.output().render(language),
            "-trainsize".to_string(),
            config.train_size().to_string(),
            "-regularization".to_string(),
            config.regularization().to_string(),
        ]);

        Self { tokens }
    }

    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}
