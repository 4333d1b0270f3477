//! # Detok Batch
//!
//! Drives the lex detokenizer trainer once per language. Each run is a
//! blocking JVM child process; the batch stops at the first failure.
//!
//! ## Quick Start
//!
//! ```no_run
//! use detok_batch::{BatchConfig, BatchInvoker, SystemRunner};
//!
//! let config = BatchConfig::default();
//! let mut invoker = BatchInvoker::new(&config, SystemRunner::new());
//! let report = invoker.run(&mut std::io::stdout()).unwrap();
//!
//! assert_eq!(report.completed().len(), 3);
//! ```
pub mod command;
pub mod config;
pub mod error;
pub mod invoker;
pub mod prebuild;
pub mod runner;

// Re-export primary API
pub use command::CommandSpec;
pub use config::{BatchConfig, Language, PathTemplate, PlanEntry};
pub use error::{DetokError, Result};
pub use invoker::{BatchInvoker, BatchReport};
pub use runner::{ExitStatus, ProcessRunner, SystemRunner};
