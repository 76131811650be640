//! Show command implementation

use super::print_cmdline;
use crate::cli::Context;
use anyhow::Result;

pub fn execute(ctx: &Context) -> Result<()> {
    print_cmdline(ctx)
}
