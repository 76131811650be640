use crate::cli::Output;
use crate::cmdline::{Cmdline, FileSource, LiteralSource, PROC_CMDLINE_PATH, proc_cmdline};
use crate::config::{OutputFormat, Settings};
use anyhow::Result;
use std::ops::Deref;
use std::path::Path;

/// Everything a subcommand needs for one run
pub struct Context {
    pub output: Output,
    pub format: OutputFormat,
    pub settings: Settings,
    pub cmdline: CmdlineHandle,
}

/// The store a run operates on.
///
/// Either built for this run, or the process-wide store read from
/// `/proc/cmdline`.
pub enum CmdlineHandle {
    Owned(Cmdline),
    Process(&'static Cmdline),
}

impl CmdlineHandle {
    /// Pick the store: a literal line wins over a file, a file wins over the
    /// configured source path
    pub fn resolve(line: Option<&str>, file: Option<&Path>, settings: &Settings) -> Result<Self> {
        if let Some(line) = line {
            return Ok(Self::Owned(Cmdline::read_from(&LiteralSource::new(line))?));
        }

        let path = file.unwrap_or(settings.source.path.as_path());
        if path == Path::new(PROC_CMDLINE_PATH) {
            return Ok(Self::Process(proc_cmdline()?));
        }

        Ok(Self::Owned(Cmdline::read_from(&FileSource::new(path))?))
    }
}

impl Deref for CmdlineHandle {
    type Target = Cmdline;

    fn deref(&self) -> &Cmdline {
        match self {
            Self::Owned(cmdline) => cmdline,
            Self::Process(cmdline) => *cmdline,
        }
    }
}
