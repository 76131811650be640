//! Set command implementation

use super::print_cmdline;
use crate::cli::Context;
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Tokens to set, as KEY or KEY=VALUE; each named key is replaced
    #[arg(required = true, value_name = "ARG")]
    pub args: Vec<String>,
}

pub fn execute(args: SetArgs, ctx: &Context) -> Result<()> {
    ctx.output
        .verbose(&format!("Setting {} argument(s)", args.args.len()));
    ctx.cmdline.set_all(&args.args);

    print_cmdline(ctx)
}
