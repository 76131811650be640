use std::io;

/// Failure to obtain the raw command line.
///
/// Cloneable so a cached initialization failure can be handed to every caller
/// of a [`LazyCmdline`](super::LazyCmdline).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CmdlineError {
    #[error("failed to read kernel command line from {source_name}: {message}")]
    SourceRead {
        source_name: String,
        kind: io::ErrorKind,
        message: String,
    },
}

impl CmdlineError {
    pub fn source_read(source_name: impl Into<String>, err: &io::Error) -> Self {
        Self::SourceRead {
            source_name: source_name.into(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::SourceRead { kind, .. } => *kind,
        }
    }
}
