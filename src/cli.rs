use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use shipyard::Language;

/// Shipyard - bootstrap, render and deploy an application to Kubernetes
#[derive(Parser, Debug)]
#[command(name = "shipyard")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'shipyard' without arguments to generate and deploy with defaults.")]
pub struct Cli {
    /// Configuration file (default: ./shipyard.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit NDJSON events on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log file (overrides [logging].file)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the project directory and render every artifact
    Generate {
        #[command(flatten)]
        spec: SpecArgs,
    },

    /// Generate, then run skaffold and apply the monitoring configs
    Deploy {
        #[command(flatten)]
        spec: SpecArgs,

        /// Print the deploy steps without running them
        #[arg(long)]
        dry_run: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Deploy {
            spec: SpecArgs::default(),
            dry_run: false,
        }
    }
}

/// Deployment parameters. Unset flags fall back to prompts or config.
#[derive(Args, Debug, Clone, Default)]
pub struct SpecArgs {
    /// Application name (also the project directory name)
    #[arg(long)]
    pub app_name: Option<String>,

    /// Application language
    #[arg(long, value_enum)]
    pub language: Option<Language>,

    /// Ports to expose, comma separated
    #[arg(long, value_delimiter = ',')]
    pub ports: Option<Vec<String>>,

    /// Base image for the Dockerfile
    #[arg(long)]
    pub base_image: Option<String>,

    /// Metrics to keep, comma separated
    #[arg(long, value_delimiter = ',')]
    pub metrics: Option<Vec<String>>,

    /// Prompt for values not given as flags
    #[arg(short, long)]
    pub interactive: bool,

    /// Parent directory of the project directory
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Where to look for the entry point and dependency manifest
    #[arg(long)]
    pub source_dir: Option<PathBuf>,
}
