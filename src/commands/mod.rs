//! Subcommand implementations

pub mod deploy;
pub mod generate;
mod prompt;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use shipyard::config::DefaultsConfig;
use shipyard::domain::ports::EventSink;
use shipyard::infrastructure::{ConsoleEventSink, JsonEventSink};
use shipyard::{DeploymentSpec, Language, ScaffoldOptions};

use crate::cli::SpecArgs;
use crate::terminal;

/// Deployment values after flags and config defaults are merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SpecValues {
    pub app_name: String,
    pub language: Language,
    pub ports: Vec<String>,
    pub base_image: String,
    pub metrics: Vec<String>,
}

impl SpecValues {
    pub fn merge(args: &SpecArgs, defaults: &DefaultsConfig) -> Self {
        Self {
            app_name: args
                .app_name
                .clone()
                .unwrap_or_else(|| defaults.app_name.clone()),
            language: args.language.unwrap_or(defaults.language),
            ports: args.ports.clone().unwrap_or_else(|| defaults.ports.clone()),
            base_image: args
                .base_image
                .clone()
                .unwrap_or_else(|| defaults.base_image.clone()),
            metrics: args
                .metrics
                .clone()
                .unwrap_or_else(|| defaults.metrics.clone()),
        }
    }

    pub fn into_spec(self) -> Result<DeploymentSpec> {
        DeploymentSpec::builder(self.app_name)
            .language(self.language)
            .ports(self.ports)
            .base_image(self.base_image)
            .metrics(self.metrics)
            .build()
            .context("invalid deployment parameters")
    }
}

/// Flags, then interactive answers, then config defaults
pub(crate) fn resolve_spec(args: &SpecArgs, defaults: &DefaultsConfig) -> Result<DeploymentSpec> {
    let mut values = SpecValues::merge(args, defaults);
    if args.interactive {
        if !terminal::stdin_is_terminal() {
            bail!("--interactive needs a terminal on stdin");
        }
        prompt::ask(&mut values, args)?;
    }
    values.into_spec()
}

pub(crate) fn scaffold_options(args: &SpecArgs) -> ScaffoldOptions {
    ScaffoldOptions {
        output_root: args.output_dir.clone().unwrap_or_else(PathBuf::new),
        source_root: args.source_dir.clone().unwrap_or_else(PathBuf::new),
    }
}

pub(crate) fn event_sink(json: bool) -> Box<dyn EventSink> {
    if json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout(terminal::supports_unicode()))
    }
}
