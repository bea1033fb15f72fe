use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// User-facing failures of the ingestion and export boundaries.
///
/// Everything else (blank headers, unknown sort columns, out-of-range
/// pages) is handled internally with a defined fallback and never
/// surfaces as an error.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The bytes could not be decoded as the claimed format. The dataset
    /// is left untouched.
    #[error("could not read {}: {reason}", .path.display())]
    UnreadableFile { path: PathBuf, reason: String },

    /// Rejected at the ingestion boundary, before any parsing.
    #[error("unsupported file type: .{extension}")]
    UnsupportedFileType { extension: String },

    /// I/O error while reading an input file or writing an export.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    EmptyExport(#[from] sheet_core::EmptyExport),
}

impl Error {
    pub fn unreadable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::UnreadableFile {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn unsupported(extension: impl Into<String>) -> Self {
        Error::UnsupportedFileType {
            extension: extension.into(),
        }
    }

    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Error::Io {
            path: Some(path.into()),
            source,
        }
    }

    pub fn io_no_path(source: std::io::Error) -> Self {
        Error::Io { path: None, source }
    }
}
