//! One-time, on-demand loading of a command line
//!
//! [`LazyCmdline`] reads its source the first time it is asked for the store
//! and caches the outcome for its own lifetime. [`proc_cmdline`] is the
//! process-wide instance bound to `/proc/cmdline`.

use super::error::CmdlineError;
use super::source::{CmdlineSource, FileSource};
use super::store::Cmdline;
use std::sync::{LazyLock, OnceLock};

/// A [`Cmdline`] loaded from `source` on first access.
///
/// At most one read ever happens. Threads racing on the first access block
/// until it finishes. A failed read is cached too: the first caller gets the
/// error and so does everyone after it, there is no retry.
pub struct LazyCmdline<S> {
    source: S,
    cell: OnceLock<Result<Cmdline, CmdlineError>>,
}

impl<S: CmdlineSource> LazyCmdline<S> {
    pub const fn new(source: S) -> Self {
        Self {
            source,
            cell: OnceLock::new(),
        }
    }

    /// The loaded store, reading the source if this is the first access
    pub fn get(&self) -> Result<&Cmdline, CmdlineError> {
        self.cell
            .get_or_init(|| {
                tracing::debug!("Loading kernel command line from {}", self.source.describe());
                Cmdline::read_from(&self.source)
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Whether the source has been read, successfully or not
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

static PROC_CMDLINE: LazyLock<LazyCmdline<FileSource>> =
    LazyLock::new(|| LazyCmdline::new(FileSource::proc()));

/// The running kernel's command line, read from `/proc/cmdline` once per
/// process and shared by every caller
pub fn proc_cmdline() -> Result<&'static Cmdline, CmdlineError> {
    PROC_CMDLINE.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier};
    use std::thread;

    struct CountingSource {
        reads: AtomicUsize,
        result: Result<String, CmdlineError>,
    }

    impl CountingSource {
        fn ok(line: &str) -> Self {
            Self {
                reads: AtomicUsize::new(0),
                result: Ok(line.to_string()),
            }
        }

        fn failing() -> Self {
            let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
            Self {
                reads: AtomicUsize::new(0),
                result: Err(CmdlineError::source_read("test", &err)),
            }
        }
    }

    impl CmdlineSource for CountingSource {
        fn read(&self) -> Result<String, CmdlineError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    #[test]
    fn test_reads_once_and_caches() {
        let lazy = LazyCmdline::new(CountingSource::ok("ro quiet"));
        assert!(!lazy.is_initialized());

        let first = lazy.get().unwrap();
        first.append("init", "/sbin/init");

        let second = lazy.get().unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(second.to_string(), "ro quiet init=/sbin/init");
        assert_eq!(lazy.source().reads.load(Ordering::SeqCst), 1);
        assert!(lazy.is_initialized());
    }

    #[test]
    fn test_failure_is_surfaced_and_not_retried() {
        let lazy = LazyCmdline::new(CountingSource::failing());

        let err = lazy.get().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);

        let again = lazy.get().unwrap_err();
        assert_eq!(err, again);
        assert_eq!(lazy.source().reads.load(Ordering::SeqCst), 1);
        assert!(lazy.is_initialized());
    }

    #[test]
    fn test_concurrent_first_access_reads_once() {
        let lazy = Arc::new(LazyCmdline::new(CountingSource::ok("console=ttyS0")));
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let lazy = Arc::clone(&lazy);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    lazy.get().unwrap().to_string()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "console=ttyS0");
        }
        assert_eq!(lazy.source().reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_proc_cmdline_is_shared() {
        // Only meaningful where procfs is mounted
        if !std::path::Path::new(crate::cmdline::PROC_CMDLINE_PATH).exists() {
            return;
        }

        let first = proc_cmdline().unwrap();
        let second = proc_cmdline().unwrap();
        assert!(std::ptr::eq(first, second));
    }
}
