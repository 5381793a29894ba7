use std::path::PathBuf;

/// Reasons a route log scan stopped before reaching the end of the file.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("cannot open route log {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: malformed counter for '{marker}': {reason}")]
    MalformedCounter {
        line: usize,
        marker: String,
        reason: String,
    },
}

impl ScanError {
    /// True when the log itself could not be reached, as opposed to a
    /// problem found while reading its contents.
    pub fn is_unreadable(&self) -> bool {
        matches!(self, ScanError::Open { .. })
    }
}
