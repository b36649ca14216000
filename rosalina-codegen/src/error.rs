use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for synthesis and rendering.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("cannot derive a type name from '{}'", path.display())]
    #[diagnostic(
        code(rosalina::invalid_request),
        help("pass the path of a UI document file, e.g. 'UI/MainMenu.uxml'")
    )]
    InvalidRequest { path: PathBuf },

    #[error("malformed declaration tree: {reason}")]
    #[diagnostic(code(rosalina::malformed_tree))]
    MalformedTree { reason: String },
}

impl Error {
    pub fn invalid_request(path: impl Into<PathBuf>) -> Self {
        Self::InvalidRequest { path: path.into() }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedTree {
            reason: reason.into(),
        }
    }
}
