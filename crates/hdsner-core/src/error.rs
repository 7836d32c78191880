use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting BIO datasets.
#[derive(Debug, Error)]
pub enum HdsnerError {
    /// The source file to convert does not exist.
    #[error("source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file being read or written.
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HdsnerError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap an error from reading a source file. A missing file becomes
    /// [`HdsnerError::SourceNotFound`].
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::SourceNotFound(path)
        } else {
            Self::Io { path, source }
        }
    }

    /// Check if this error means the source file is missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SourceNotFound(_))
    }
}

/// Result type alias for hdsner operations.
pub type Result<T> = std::result::Result<T, HdsnerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = HdsnerError::SourceNotFound(PathBuf::from("CBMA/MULTICLASS/train.txt"));
        assert_eq!(
            err.to_string(),
            "source file not found: CBMA/MULTICLASS/train.txt"
        );

        let err = HdsnerError::io(
            "out/train.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("out/train.json"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn not_found_on_read_maps_to_source_not_found() {
        let err = HdsnerError::read("missing.txt", io::Error::from(io::ErrorKind::NotFound));
        assert!(err.is_not_found());
        assert!(matches!(err, HdsnerError::SourceNotFound(p) if p == PathBuf::from("missing.txt")));

        let err = HdsnerError::io("out.json", io::Error::from(io::ErrorKind::NotFound));
        assert!(!err.is_not_found());
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HdsnerError>();
    }
}
