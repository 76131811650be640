//! Where the raw command line comes from

use super::error::CmdlineError;
use std::path::{Path, PathBuf};

/// Location of the running kernel's command line
pub const PROC_CMDLINE_PATH: &str = "/proc/cmdline";

/// Supplies the raw token line a store is built from.
///
/// Implementations either return the whole line or fail; nothing else is
/// expected of them.
pub trait CmdlineSource: Send + Sync {
    /// Human-readable name used in logs and errors
    fn describe(&self) -> String {
        "custom source".to_string()
    }

    fn read(&self) -> Result<String, CmdlineError>;
}

/// Reads the command line from a file such as `/proc/cmdline`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The running kernel's command line
    pub fn proc() -> Self {
        Self::new(PROC_CMDLINE_PATH)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CmdlineSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<String, CmdlineError> {
        let bytes = std::fs::read(&self.path)
            .map_err(|err| CmdlineError::source_read(self.describe(), &err))?;

        // The kernel does not promise UTF-8; keep whatever decodes
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// A fixed line held in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiteralSource(String);

impl LiteralSource {
    pub fn new(line: impl Into<String>) -> Self {
        Self(line.into())
    }
}

impl CmdlineSource for LiteralSource {
    fn describe(&self) -> String {
        "literal".to_string()
    }

    fn read(&self) -> Result<String, CmdlineError> {
        Ok(self.0.clone())
    }
}

impl<F> CmdlineSource for F
where
    F: Fn() -> Result<String, CmdlineError> + Send + Sync,
{
    fn read(&self) -> Result<String, CmdlineError> {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_file_source_reads_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cmdline");
        std::fs::write(&path, "ro quiet\n").unwrap();

        let source = FileSource::new(&path);
        assert_eq!(source.read().unwrap(), "ro quiet\n");
        assert_eq!(source.path(), path.as_path());
    }

    #[test]
    fn test_file_source_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let source = FileSource::new(temp_dir.path().join("missing"));

        let err = source.read().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_file_source_lossy_decoding() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cmdline");
        std::fs::write(&path, b"label=\xff ro").unwrap();

        let line = FileSource::new(&path).read().unwrap();
        assert!(line.starts_with("label="));
        assert!(line.ends_with(" ro"));
    }

    #[test]
    fn test_literal_and_closure_sources() {
        assert_eq!(LiteralSource::new("a=1").read().unwrap(), "a=1");

        let closure = || -> Result<String, CmdlineError> { Ok("b=2".to_string()) };
        assert_eq!(closure.read().unwrap(), "b=2");
        assert_eq!(closure.describe(), "custom source");
    }

    #[test]
    fn test_proc_path() {
        assert_eq!(FileSource::proc().path(), Path::new("/proc/cmdline"));
    }
}
