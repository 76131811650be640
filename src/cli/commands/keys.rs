//! Keys command implementation

use crate::cli::Context;
use crate::config::OutputFormat;
use anyhow::Result;

pub fn execute(ctx: &Context) -> Result<()> {
    let keys = ctx.cmdline.keys();

    match ctx.format {
        OutputFormat::Text => {
            for key in &keys {
                ctx.output.data(key);
            }
        }
        OutputFormat::Json => ctx.output.data(&serde_json::to_string(&keys)?),
    }

    Ok(())
}
