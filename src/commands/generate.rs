//! `shipyard generate` - initialize the project and render every artifact

use anyhow::{Context, Result};
use shipyard::application::ScaffoldResult;
use shipyard::domain::ports::EventSink;
use shipyard::infrastructure::all_generators;
use shipyard::{Config, ScaffoldUseCase};
use tracing::info;

use crate::cli::SpecArgs;

pub fn cmd_generate(args: &SpecArgs, config: &Config, events: &dyn EventSink) -> Result<()> {
    generate(args, config, events)?;
    Ok(())
}

pub(crate) fn generate(
    args: &SpecArgs,
    config: &Config,
    events: &dyn EventSink,
) -> Result<ScaffoldResult> {
    let spec = super::resolve_spec(args, &config.defaults)?;
    let options = super::scaffold_options(args);

    let result = ScaffoldUseCase::new(all_generators(config))
        .execute(&spec, &options, events)
        .with_context(|| format!("generating project for '{}'", spec.app_name()))?;

    info!(
        project_dir = %result.project_dir.display(),
        files = result.file_count(),
        "project generated"
    );
    Ok(result)
}
