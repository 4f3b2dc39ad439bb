use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("File not found: {}", .path.display())]
    #[diagnostic(code(hirc_dec::file_not_found))]
    FileNotFound { path: PathBuf },

    #[error("Permission denied: {}", .path.display())]
    #[diagnostic(code(hirc_dec::permission_denied))]
    PermissionDenied { path: PathBuf },

    #[error("Invalid path {}: {reason}", .path.display())]
    #[diagnostic(code(hirc_dec::invalid_path))]
    InvalidPath { path: PathBuf, reason: String },

    #[error("No `{marker}` marker in file name: {}", .path.display())]
    #[diagnostic(
        code(hirc_dec::missing_marker),
        help("the output name is derived by replacing `{marker}`; rename the input so it contains it")
    )]
    MissingMarker {
        path: PathBuf,
        marker: &'static str,
    },

    #[error("Invalid decimal token `{token}` at position {position}")]
    #[diagnostic(
        code(hirc_dec::invalid_token),
        help("tokens must be decimal numbers between 0 and 255")
    )]
    InvalidToken { token: String, position: usize },

    #[error("IO error: {0}")]
    #[diagnostic(code(hirc_dec::io))]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Classifies a failure to open the input file.
    pub(crate) fn opening_source(path: PathBuf, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io(err),
        }
    }

    /// Classifies a failure to create the output file.
    pub(crate) fn creating_destination(path: PathBuf, err: std::io::Error) -> Self {
        use std::io::ErrorKind;

        match err.kind() {
            ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            ErrorKind::NotFound | ErrorKind::IsADirectory | ErrorKind::InvalidInput => {
                Self::InvalidPath {
                    path,
                    reason: err.to_string(),
                }
            }
            _ => Self::Io(err),
        }
    }
}
