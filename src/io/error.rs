use std::path::PathBuf;

/// Failures of the `.cell` persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("path is empty")]
    EmptyPath,

    #[error("invalid file extension of {path:?} (expected .{expected})")]
    InvalidExtension {
        path: PathBuf,
        expected: &'static str,
    },

    #[error("{0:?} does not exist")]
    NotFound(PathBuf),

    #[error("content is empty")]
    EmptyContent,

    #[error("invalid character {found:?} at line {line}, column {column}")]
    InvalidCharacter {
        line: usize,
        column: usize,
        found: char,
    },

    #[error("cannot write a generation with no rows")]
    EmptyGeneration,

    #[error("{path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
