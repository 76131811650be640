//! Get command implementation
//!
//! Prints the first value of a parameter by default. A flag such as `quiet`
//! has a single empty value, so it prints an empty line.

use crate::cli::Context;
use crate::config::OutputFormat;
use anyhow::{Result, bail};
use clap::Args;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Parameter key
    pub key: String,

    /// Print the value at this position instead of the first one
    #[arg(short, long, conflicts_with = "all")]
    pub index: Option<usize>,

    /// Print every value, one per line
    #[arg(short, long)]
    pub all: bool,
}

pub fn execute(args: GetArgs, ctx: &Context) -> Result<()> {
    let Some(parameter) = ctx.cmdline.get(&args.key) else {
        bail!("Parameter '{}' not found", args.key);
    };

    if args.all {
        match ctx.format {
            OutputFormat::Text => {
                for value in parameter.values() {
                    ctx.output.data(value);
                }
            }
            OutputFormat::Json => ctx.output.data(&serde_json::to_string_pretty(&parameter)?),
        }
        return Ok(());
    }

    let index = args.index.unwrap_or(0);
    let Some(value) = parameter.get(index) else {
        bail!(
            "Parameter '{}' has {} value(s), no index {}",
            args.key,
            parameter.len(),
            index
        );
    };

    match ctx.format {
        OutputFormat::Text => ctx.output.data(value),
        OutputFormat::Json => ctx.output.data(&serde_json::to_string(value)?),
    }

    Ok(())
}
