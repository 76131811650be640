//! Config command implementation
//!
//! Prints the configuration after every layer has been merged.

use crate::cli::Output;
use crate::config::KcmdlineConfig;
use anyhow::Result;

pub fn execute(config: &KcmdlineConfig, output: &Output) -> Result<()> {
    let full = config.get_full_config()?;
    output.data(&serde_json::to_string_pretty(&full)?);
    Ok(())
}
