//! Error types exposed by the console REST layer.

use thiserror::Error;

/// Errors surfaced while validating input or talking to the console API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConsoleError {
    /// No console server URL was configured.
    #[error("console server URL is required (use --server-url or APPREPO_SERVER_URL)")]
    MissingServerUrl,

    /// No workspace was configured.
    #[error("workspace is required (use --workspace or -w)")]
    MissingWorkspace,

    /// The authentication token was missing.
    #[error("access token is required")]
    MissingToken,

    /// The provided URL could not be parsed.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// An identifier was blank or contained characters not allowed in a path
    /// segment.
    #[error("invalid {kind}: {value:?}")]
    InvalidIdentifier {
        /// Identifier category, such as `workspace` or `repository id`.
        kind: &'static str,
        /// The rejected value.
        value: String,
    },

    /// The server rejected the credentials (401/403).
    #[error("console rejected the token: {message}")]
    Authentication {
        /// Server message returned with the rejection.
        message: String,
    },

    /// The requested resource does not exist.
    #[error("not found: {message}")]
    NotFound {
        /// Server message describing the missing resource.
        message: String,
    },

    /// The console returned a non-success status.
    #[error("console API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Server message describing the failure.
        message: String,
    },

    /// Networking failed while calling the console.
    #[error("network error talking to the console: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// A response body did not match the expected schema.
    #[error("malformed response: {message}")]
    MalformedResponse {
        /// What was wrong with the payload.
        message: String,
    },

    /// User-supplied data failed validation before any request was made.
    #[error("{message}")]
    Validation {
        /// Description of the rejected input.
        message: String,
    },

    /// Invalid pagination parameters.
    #[error("invalid pagination: {message}")]
    InvalidPagination {
        /// Description of the invalid parameter.
        message: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The terminal interface failed to start or crashed.
    #[error("terminal error: {message}")]
    Terminal {
        /// Error detail reported by the TUI runtime.
        message: String,
    },
}
