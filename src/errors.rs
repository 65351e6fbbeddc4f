// Error types for the embedding pipeline
//
// Every variant is fatal: the run stops at the first error and nothing is
// retried. Paths are carried so the binary can report which file failed.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EmbedError>;

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk input tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("input path is not a directory: {}", .0.display())]
    InputNotDirectory(PathBuf),

    #[error("cannot derive an output name from {}", .0.display())]
    NoFileName(PathBuf),

    #[error("{}: file is not valid UTF-8 text", .path.display())]
    InvalidUtf8 { path: PathBuf },

    /// Only raised with `EscapeMode::C`
    #[error("{}:{line}: embedded NUL byte cannot be placed in a string literal", .path.display())]
    EmbeddedNul { path: PathBuf, line: usize },

    #[error(
        "constant name `{name}` derived twice: {} and {}",
        .first.display(),
        .second.display()
    )]
    NameCollision {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("{}: derived name `{name}` is not a valid C identifier", .path.display())]
    InvalidIdentifier { name: String, path: PathBuf },
}

impl EmbedError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EmbedError::Io {
            path: path.into(),
            source,
        }
    }
}
