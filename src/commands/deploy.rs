//! `shipyard deploy` - generate, then run skaffold and kubectl

use anyhow::Result;
use shipyard::domain::ports::{EventSink, ShipyardEvent};
use shipyard::infrastructure::SystemCommandRunner;
use shipyard::{deploy_steps, Config, StepRunner};
use tracing::{error, info};

use crate::cli::SpecArgs;

/// Returns `false` when a fatal step failed
pub fn cmd_deploy(
    args: &SpecArgs,
    dry_run: bool,
    json: bool,
    config: &Config,
    events: &dyn EventSink,
) -> Result<bool> {
    let scaffold = super::generate::generate(args, config, events)?;
    let steps = deploy_steps(config, &scaffold.project_dir);

    if dry_run {
        if json {
            for (index, step) in steps.iter().enumerate() {
                println!(
                    "{}",
                    serde_json::json!({
                        "event": "step_planned",
                        "index": index,
                        "name": step.name(),
                        "command": step.command().to_string(),
                        "fatal": step.is_fatal(),
                    })
                );
            }
        } else {
            println!("Dry run - steps that would run:");
            for (index, step) in steps.iter().enumerate() {
                let tag = if step.is_fatal() { " (fatal)" } else { "" };
                println!("  {}. {}{}", index + 1, step.command(), tag);
            }
        }
        info!(steps = steps.len(), "dry run, nothing executed");
        return Ok(true);
    }

    // Child output would corrupt the NDJSON stream
    let process = if json {
        SystemCommandRunner::quiet()
    } else {
        SystemCommandRunner::new()
    };
    let report = StepRunner::new(process).run(&steps, events);
    let success = report.is_success();
    events.on_event(ShipyardEvent::Completed { success });

    match report.aborted_at() {
        Some(outcome) => error!(step = %outcome.name, "deploy aborted"),
        None => info!(
            soft_failures = report.soft_failures().count(),
            "deploy finished"
        ),
    }
    Ok(success)
}
