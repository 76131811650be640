//! # kcmdline - kernel command line parameters
//!
//! Structured, mutable access to a space-separated `KEY` / `KEY=VALUE` token
//! line such as `/proc/cmdline`.
//!
//! - **Ordered, multi-valued parameters**: repeated keys collect their values
//!   on the entry of their first occurrence
//! - **Two merge policies**: accumulate onto existing values, or overwrite
//!   selected keys wholesale
//! - **Thread-safe store**: every operation on a [`Cmdline`] locks internally
//! - **Lazy process-wide access**: [`proc_cmdline`] reads `/proc/cmdline` once
//!
//! ## Library Usage
//!
//! ```rust
//! use kcmdline::{AppendAllOptions, Cmdline, MaybeParameter, Parameter};
//!
//! let cmdline = Cmdline::new("quiet console=ttyS0 console=ttyS1 root=/dev/sda1");
//! assert_eq!(cmdline.get("console").first(), Some("ttyS0"));
//! assert_eq!(cmdline.get("missing").first(), None);
//!
//! cmdline.set("root", Parameter::new("root").with_value("/dev/sda2"));
//! cmdline.append_all(
//!     ["console=ttyAMA0", "init=/sbin/init"],
//!     &AppendAllOptions::default().with_overwrite_keys(["console"]),
//! );
//! assert_eq!(
//!     cmdline.to_string(),
//!     "quiet console=ttyAMA0 root=/dev/sda2 init=/sbin/init"
//! );
//! ```
//!
//! ## CLI
//!
//! ```bash
//! kcmdline show
//! kcmdline get console --all
//! kcmdline --file ./cmdline append console=ttyS0 --overwrite console
//! ```

pub mod cli;
pub mod cmdline;
pub mod config;

pub use cli::{Cli, Output};
pub use cmdline::{
    AppendAllOptions, Cmdline, CmdlineError, CmdlineSource, FileSource, LazyCmdline,
    LiteralSource, MaybeParameter, Parameter, Parameters, proc_cmdline,
};
pub use config::KcmdlineConfig;

/// Result type alias for kcmdline operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
