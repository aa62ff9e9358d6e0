//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for larascope
///
/// Per-file failures (`FileDecode`, `FileParse`) are caught at the file
/// boundary by the analyzer and degrade to zero chunks for that file.
/// Only `PathNotFound` is fatal to an analyzer run.
#[derive(Error, Debug)]
pub enum Error {
    /// Root traversal target does not exist
    #[error("Path not found: {path}")]
    PathNotFound {
        /// The missing path
        path: String,
    },

    /// Structural grammar failed to load; triggers the regex fallback
    /// strategy for the whole run
    #[error("Parser unavailable: {message}")]
    ParserUnavailable {
        /// Description of the grammar load failure
        message: String,
    },

    /// A single file's bytes could not be decoded
    #[error("Failed to decode {path}: {message}")]
    FileDecode {
        /// File that failed to decode
        path: String,
        /// Description of the decode failure
        message: String,
    },

    /// The structural parser raised on a specific file's content
    #[error("Failed to parse {path}: {message}")]
    FileParse {
        /// File that failed to parse
        path: String,
        /// Description of the parse failure
        message: String,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Vector database operation error
    #[error("Vector database error: {message}")]
    VectorDb {
        /// Description of the vector database error
        message: String,
    },

    /// Embedding provider operation error
    #[error("Embedding provider error: {message}")]
    Embedding {
        /// Description of the embedding error
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

impl Error {
    /// Create a path-not-found error
    pub fn path_not_found<S: Into<String>>(path: S) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    /// Create a parser-unavailable error
    pub fn parser_unavailable<S: Into<String>>(message: S) -> Self {
        Self::ParserUnavailable {
            message: message.into(),
        }
    }

    /// Create a file-decode error
    pub fn file_decode<P: Into<String>, S: Into<String>>(path: P, message: S) -> Self {
        Self::FileDecode {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a file-parse error
    pub fn file_parse<P: Into<String>, S: Into<String>>(path: P, message: S) -> Self {
        Self::FileParse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a vector database error
    pub fn vector_db<S: Into<String>>(message: S) -> Self {
        Self::VectorDb {
            message: message.into(),
        }
    }

    /// Create an embedding provider error
    pub fn embedding<S: Into<String>>(message: S) -> Self {
        Self::Embedding {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
