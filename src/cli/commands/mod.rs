//! Command implementations for the kcmdline CLI

pub mod append;
pub mod config;
pub mod get;
pub mod keys;
pub mod set;
pub mod show;
pub mod version;

use crate::cli::Context;
use crate::config::OutputFormat;
use anyhow::Result;

/// Print the whole command line in the selected format
pub(crate) fn print_cmdline(ctx: &Context) -> Result<()> {
    match ctx.format {
        OutputFormat::Text => ctx.output.data(&ctx.cmdline.to_string()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&ctx.cmdline.parameters())?;
            ctx.output.data(&json);
        }
    }
    Ok(())
}
