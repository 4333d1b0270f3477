//! Optional `gradle installDist` step that produces the trainer classpath.

use tracing::info;

use crate::command::CommandSpec;
use crate::error::Result;
use crate::runner::ProcessRunner;

/// The `gradle installDist` invocation that populates `build/install/lex/lib`.
pub fn build_command() -> CommandSpec {
    CommandSpec::new("gradle", ["installDist"])
}

/// Run the build once; a failing build stops everything before training.
pub fn run_build<R: ProcessRunner>(runner: &mut R) -> Result<()> {
    let command = build_command();
    info!(%command, "building trainer distribution");
    runner.run(&command)?.check(&command)
}
