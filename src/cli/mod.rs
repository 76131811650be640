//! Command-line interface for kcmdline
//!
//! Builds the one parameter store a run works on (from `--cmdline`, `--file`
//! or the configured source) and hands it to the selected subcommand.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
mod context;
mod output;

pub use context::{CmdlineHandle, Context};
pub use output::Output;

use crate::config::{KcmdlineConfig, OutputFormat};

/// Inspect and edit kernel command lines
#[derive(Parser)]
#[command(
    name = "kcmdline",
    version = env!("CARGO_PKG_VERSION"),
    about = "Inspect and edit kernel command line parameters",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Parse this command line instead of reading a source
    #[arg(long, value_name = "LINE", global = true, conflicts_with = "file")]
    pub cmdline: Option<String>,

    /// Read the command line from FILE instead of the configured path
    #[arg(long, value_name = "FILE", global = true)]
    pub file: Option<PathBuf>,

    /// Use custom configuration file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format (defaults to output.format from config)
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the command line
    Show,
    /// Print the value(s) of one parameter
    Get(commands::get::GetArgs),
    /// List parameter keys in order
    Keys,
    /// Merge parameters, accumulating values unless a key is overwritten
    Append(commands::append::AppendArgs),
    /// Merge parameters, replacing every key they name
    Set(commands::set::SetArgs),
    /// Show the merged configuration
    Config,
    /// Show version information
    Version,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let output = Output::new(self.verbose > 0, self.quiet);

        let command = match self.command {
            Some(command) => command,
            None => {
                Cli::command().print_help()?;
                return Ok(());
            }
        };

        if let Commands::Version = command {
            return commands::version::execute(&output);
        }

        let config = KcmdlineConfig::load_with_custom_config(self.config.as_deref())?;
        if let Commands::Config = command {
            return commands::config::execute(&config, &output);
        }

        let settings = config.settings()?;
        let format = self.format.unwrap_or(settings.output.format);
        let cmdline = CmdlineHandle::resolve(
            self.cmdline.as_deref(),
            self.file.as_deref(),
            &settings,
        )?;
        output.verbose(&format!("Loaded {} parameters", cmdline.len()));

        let ctx = Context {
            output,
            format,
            settings,
            cmdline,
        };

        match command {
            Commands::Show => commands::show::execute(&ctx),
            Commands::Get(args) => commands::get::execute(args, &ctx),
            Commands::Keys => commands::keys::execute(&ctx),
            Commands::Append(args) => commands::append::execute(args, &ctx),
            Commands::Set(args) => commands::set::execute(args, &ctx),
            Commands::Config | Commands::Version => Ok(()),
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // stdout carries command results
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
