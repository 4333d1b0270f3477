//! # Batch Configuration
//!
//! The fixed languages, corpus paths and trainer flags for one batch run.
//! Built once at startup and shared read-only with every iteration.

use std::fmt;

use serde::Serialize;

use crate::command::CommandSpec;

/// Languages trained by the batch, in invocation order.
pub const LANGUAGES: [&str; 3] = ["de", "es", "fr"];

const RAW_TEMPLATE: &str = "data/detok/detok_sample_1M_{}_raw.clean.gz";
const TOKENIZED_TEMPLATE: &str = "data/detok/detok_sample_1M_{}_raw.clean.tok.gz";
const OUTPUT_TEMPLATE: &str = "data/detok/detok_sample_1M_{}_raw.clean.detokenizer";

/// Placeholder substituted by [`PathTemplate::render`].
pub const PLACEHOLDER: &str = "{}";

/// A language code passed through to the trainer uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    /// Wrap a language code such as `de`.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A path with a single `{}` placeholder for the language code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PathTemplate(String);

impl PathTemplate {
    /// Create a template; `template` should contain one `{}`.
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Substitute `language` for the first placeholder.
    #[must_use]
    pub fn render(&self, language: &Language) -> String {
        self.0.replacen(PLACEHOLDER, language.as_str(), 1)
    }
}

/// Everything needed to build the trainer command lines.
#[derive(Debug, Clone, Serialize)]
pub struct BatchConfig {
    languages: Vec<Language>,
    raw: PathTemplate,
    tokenized: PathTemplate,
    output: PathTemplate,
    /// Interpreter invocation, program first.
    interpreter: Vec<String>,
    /// Heap and GC tuning passed to the JVM.
    memory_flags: Vec<String>,
    entry_point: String,
    train_size: u32,
    regularization: u32,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            languages: LANGUAGES.iter().copied().map(Language::new).collect(),
            raw: PathTemplate::new(RAW_TEMPLATE),
            tokenized: PathTemplate::new(TOKENIZED_TEMPLATE),
            output: PathTemplate::new(OUTPUT_TEMPLATE),
            interpreter: split_words("java -cp build/install/lex/lib/*"),
            memory_flags: split_words("-Xmx4g -XX:+UseG1GC -XX:+UseStringDeduplication"),
            entry_point: "org.oscii.detokenize.TrainDetokenizer".to_string(),
            train_size: 10_000,
            regularization: 10,
        }
    }
}

impl BatchConfig {
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn raw(&self) -> &PathTemplate {
        &self.raw
    }

    pub fn tokenized(&self) -> &PathTemplate {
        &self.tokenized
    }

    pub fn output(&self) -> &PathTemplate {
        &self.output
    }

    pub fn interpreter(&self) -> &[String] {
        &self.interpreter
    }

    pub fn memory_flags(&self) -> &[String] {
        &self.memory_flags
    }

    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    pub fn train_size(&self) -> u32 {
        self.train_size
    }

    pub fn regularization(&self) -> u32 {
        self.regularization
    }

    /// Every trainer command in invocation order, without running anything.
    pub fn plan(&self) -> Vec<PlanEntry> {
        self.languages
            .iter()
            .map(|language| {
                let command = CommandSpec::for_language(self, language);
                PlanEntry {
                    language: language.clone(),
                    program: command.program().to_string(),
                    args: command.args().to_vec(),
                }
            })
            .collect()
    }
}

/// One planned trainer invocation, as printed by a dry run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanEntry {
    pub language: Language,
    pub program: String,
    pub args: Vec<String>,
}

fn split_words(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}
