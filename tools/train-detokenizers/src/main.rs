//! Detokenizer Training Driver
//!
//! Trains the German, Spanish and French detokenizers by running the lex
//! JVM trainer once per language. Run from the lex project root, or point
//! `--root` at it.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use detok_batch::{
    BatchConfig, BatchInvoker, BatchReport, DetokError, ProcessRunner, SystemRunner, prebuild,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Debug, Parser)]
#[command(name = "train-detokenizers")]
#[command(about = "Train the de/es/fr detokenizers with the lex trainer")]
#[command(version)]
struct Cli {
    /// Working directory for the trainer processes (the lex project root)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Run `gradle installDist` before training
    #[arg(short, long)]
    build: bool,

    /// Print the planned commands as JSON lines without running anything
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Training failed: {err:#}");
        std::process::exit(exit_code(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = BatchConfig::default();
    debug!(config = %serde_json::to_string(&config)?, "batch configuration");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.dry_run {
        return print_plan(&config, &mut out);
    }

    let mut runner = SystemRunner::new();
    if let Some(root) = cli.root {
        runner = runner.with_working_dir(root);
    }

    let report = train(&config, &mut runner, cli.build, &mut out)?;
    info!(languages = report.completed().len(), "all detokenizers trained");
    Ok(())
}

/// Optionally build the trainer, then run the batch. A failed build means
/// no trainer is started.
fn train<R: ProcessRunner, W: Write>(
    config: &BatchConfig,
    runner: &mut R,
    build: bool,
    out: &mut W,
) -> Result<BatchReport> {
    if build {
        prebuild::run_build(runner).context("build step failed")?;
    }

    let report = BatchInvoker::new(config, runner)
        .run(out)
        .context("detokenizer training aborted")?;
    Ok(report)
}

fn print_plan<W: Write>(config: &BatchConfig, out: &mut W) -> Result<()> {
    for entry in config.plan() {
        writeln!(out, "{}", serde_json::to_string(&entry)?)?;
    }
    Ok(())
}

/// Exit with the failing child's own status when there is one.
fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<DetokError>()
        .map_or(1, DetokError::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use detok_batch::{CommandSpec, ExitStatus};

    /// Records program names and fails the call at `fail_at`, if any.
    #[derive(Default)]
    struct ScriptedRunner {
        programs: Vec<String>,
        fail_at: Option<(usize, i32)>,
    }

    impl ProcessRunner for ScriptedRunner {
        fn run(&mut self, command: &CommandSpec) -> detok_batch::Result<ExitStatus> {
            let index = self.programs.len();
            self.programs.push(command.program().to_string());
            match self.fail_at {
                Some((at, code)) if at == index => Ok(ExitStatus::from_code(Some(code))),
                _ => Ok(ExitStatus::SUCCESS),
            }
        }
    }

    #[test]
    fn no_flags_means_plain_batch() {
        let cli = Cli::try_parse_from(["train-detokenizers"]).unwrap();
        assert!(cli.root.is_none());
        assert!(!cli.build);
        assert!(!cli.dry_run);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "train-detokenizers",
            "--root",
            "/srv/lex",
            "--build",
            "--dry-run",
        ])
        .unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/srv/lex")));
        assert!(cli.build);
        assert!(cli.dry_run);
    }

    #[test]
    fn language_list_is_not_configurable() {
        assert!(Cli::try_parse_from(["train-detokenizers", "--languages", "it"]).is_err());
    }

    #[test]
    fn dry_run_prints_one_line_per_language() {
        let mut out = Vec::<u8>::new();
        print_plan(&BatchConfig::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["language"], "de");
        assert_eq!(first["program"], "java");
    }

    #[test]
    fn exit_code_follows_failed_child() {
        let err = anyhow::Error::new(DetokError::ChildProcessFailure {
            command: "java".into(),
            code: Some(42),
        })
        .context("detokenizer training aborted");
        assert_eq!(exit_code(&err), 42);

        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn failed_build_starts_no_trainer() {
        let mut runner = ScriptedRunner {
            fail_at: Some((0, 2)),
            ..ScriptedRunner::default()
        };
        let mut out = Vec::<u8>::new();

        let err = train(&BatchConfig::default(), &mut runner, true, &mut out).unwrap_err();

        assert_eq!(runner.programs, ["gradle"]);
        assert!(out.is_empty());
        assert!(matches!(
            err.downcast_ref::<DetokError>(),
            Some(DetokError::ChildProcessFailure { code: Some(2), .. })
        ));
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn build_then_trains_every_language() {
        let mut runner = ScriptedRunner::default();
        let mut out = Vec::<u8>::new();

        let report = train(&BatchConfig::default(), &mut runner, true, &mut out).unwrap();

        assert_eq!(runner.programs, ["gradle", "java", "java", "java"]);
        assert_eq!(report.completed().len(), 3);
        assert_eq!(
            String::from_utf8(out).unwrap().lines().collect::<Vec<_>>(),
            [
                "Training detokenizer for de",
                "Training detokenizer for es",
                "Training detokenizer for fr",
            ]
        );
    }

    #[test]
    fn without_build_only_trainers_run() {
        let mut runner = ScriptedRunner::default();
        train(&BatchConfig::default(), &mut runner, false, &mut std::io::sink()).unwrap();
        assert_eq!(runner.programs, ["java", "java", "java"]);
    }
}
