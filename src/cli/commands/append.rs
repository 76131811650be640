//! Append command implementation
//!
//! Merges new tokens into the command line. Keys configured under
//! `merge.overwrite_keys` or passed with `--overwrite` replace the existing
//! values; all other keys accumulate.

use super::print_cmdline;
use crate::cli::Context;
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub struct AppendArgs {
    /// Tokens to merge, as KEY or KEY=VALUE
    #[arg(required = true, value_name = "ARG")]
    pub args: Vec<String>,

    /// Replace this key's values instead of appending (repeatable)
    #[arg(long = "overwrite", value_name = "KEY")]
    pub overwrite: Vec<String>,
}

pub fn execute(args: AppendArgs, ctx: &Context) -> Result<()> {
    let options = ctx
        .settings
        .merge
        .clone()
        .with_overwrite_keys(args.overwrite);

    ctx.output.verbose(&format!(
        "Appending {} argument(s), overwriting {:?}",
        args.args.len(),
        options.overwrite_keys
    ));
    ctx.cmdline.append_all(&args.args, &options);

    print_cmdline(ctx)
}
