//! Result and error types for the harness.

use thiserror::Error;

/// Result type for harness operations
pub type ContatoResult<T> = Result<T, ContatoError>;

/// Errors that can occur while driving the contact form
#[derive(Debug, Error)]
pub enum ContatoError {
    /// Browser executable not found
    #[error("Browser not found. Install Chromium or set CHROMIUM_PATH")]
    BrowserNotFound,

    /// Browser launch error
    #[error("Failed to launch browser: {message}")]
    BrowserLaunch {
        /// Error message
        message: String,
    },

    /// Page error
    #[error("Page error: {message}")]
    Page {
        /// Error message
        message: String,
    },

    /// Navigation error (load did not complete)
    #[error("Navigation to {url} failed: {message}")]
    Navigation {
        /// URL that failed
        url: String,
        /// Error message
        message: String,
    },

    /// Expected element missing from the DOM, signaling markup drift against the
    /// fixture assumptions
    #[error("Element not found: {selector}")]
    ElementNotFound {
        /// Selector that matched nothing
        selector: String,
    },

    /// JavaScript evaluation error
    #[error("Script evaluation failed: {message}")]
    Script {
        /// Error message
        message: String,
    },

    /// AI action executor failed to perform an instruction
    #[error("Executor failed on {instruction:?}: {message}")]
    Executor {
        /// Instruction handed to the executor
        instruction: String,
        /// Error message
        message: String,
    },

    /// Neither a qualifying request nor a navigation was observed in time
    #[error("No submission effect observed within {ms}ms")]
    SubmissionTimeout {
        /// Timeout in milliseconds
        ms: u64,
    },

    /// Request payload could not be decoded
    #[error("Payload decode failed: {message}")]
    Decode {
        /// Error message
        message: String,
    },

    /// Assertion failed
    #[error("Assertion failed: {message}")]
    AssertionFailed {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
