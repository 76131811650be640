//! Configuration management for kcmdline
//!
//! Settings are layered with figment: embedded defaults, then user and
//! repository files, then an explicit `--config` file, then `KCMDLINE_*`
//! environment variables.

use crate::cmdline::AppendAllOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod core;
pub mod formats;

pub use self::core::KcmdlineConfig;

/// Typed view of the merged configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub source: SourceConfig,

    /// Merge policy for `kcmdline append`
    #[serde(default)]
    pub merge: AppendAllOptions,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// File to read the command line from
    pub path: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(crate::cmdline::PROC_CMDLINE_PATH),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How commands print their results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
