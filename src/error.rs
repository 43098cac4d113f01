//! Error types for the PageLens library.
//!
//! All fallible operations return [`Result`], an alias over [`PageLensError`].
//! The analysis pipeline itself is total over arbitrary strings; errors come
//! from the collaborators around it (HTTP fetching, URL parsing, output
//! serialization).
//!
//! # Examples
//!
//! ```
//! use pagelens::error::{PageLensError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PageLensError::fetch("connection refused"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for PageLens operations.
#[derive(Error, Debug)]
pub enum PageLensError {
    /// I/O errors (file operations, network, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors while fetching a page over HTTP
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// URL or document parsing errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with PageLensError.
pub type Result<T> = std::result::Result<T, PageLensError>;

impl PageLensError {
    /// Create a new fetch error.
    pub fn fetch<S: Into<String>>(msg: S) -> Self {
        PageLensError::Fetch(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        PageLensError::Parse(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        PageLensError::Analysis(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = PageLensError::fetch("Test fetch error");
        assert_eq!(error.to_string(), "Fetch error: Test fetch error");

        let error = PageLensError::parse("Test parse error");
        assert_eq!(error.to_string(), "Parse error: Test parse error");

        let error = PageLensError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let pagelens_error = PageLensError::from(io_error);

        match pagelens_error {
            PageLensError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
