//! Kernel command line parameters
//!
//! Parses a space-separated `KEY` / `KEY=VALUE` line such as `/proc/cmdline`
//! into ordered, multi-valued parameters, lets callers query and change them,
//! and writes them back out as a line.

mod error;
mod lazy;
mod options;
mod parameter;
mod parameters;
mod source;
mod store;

pub use error::CmdlineError;
pub use lazy::{LazyCmdline, proc_cmdline};
pub use options::AppendAllOptions;
pub use parameter::{Key, MaybeParameter, Parameter};
pub use parameters::Parameters;
pub use source::{CmdlineSource, FileSource, LiteralSource, PROC_CMDLINE_PATH};
pub use store::Cmdline;

#[cfg(test)]
mod tests;
