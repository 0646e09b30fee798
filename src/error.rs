//! Error types for langdict.
//!
//! All fallible operations in the crate return [`LangDictError`]. The graph
//! construction itself cannot fail; errors come from reading word lists,
//! validating configuration and writing the output document.
//!
//! # Examples
//!
//! ```
//! use langdict::error::{LangDictError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LangDictError::invalid_argument("threshold out of range"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for langdict operations.
#[derive(Error, Debug)]
pub enum LangDictError {
    /// I/O errors not tied to a specific input file (output writes, temp files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A word list could not be opened or read.
    #[error("cannot read word list `{}`: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument or configuration value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Thread pool setup errors
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

/// Result type alias for operations that may fail with LangDictError.
pub type Result<T> = std::result::Result<T, LangDictError>;

impl LangDictError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LangDictError::InvalidArgument(msg.into())
    }

    /// Create a new input error for the given word list path.
    pub fn input<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        LangDictError::Input {
            path: path.into(),
            source,
        }
    }

    /// Create a new thread pool error.
    pub fn thread_pool<S: Into<String>>(msg: S) -> Self {
        LangDictError::ThreadPool(msg.into())
    }
}
