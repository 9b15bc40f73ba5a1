//! `reqwest` client construction for gateway implementations.

use std::time::Duration;

use reqwest::Client;

use crate::console::error::ConsoleError;

/// Builds the shared HTTP client with the configured request timeout.
///
/// # Errors
///
/// Returns [`ConsoleError::Configuration`] when the TLS backend or client
/// cannot be initialised.
pub(super) fn build_http_client(timeout: Duration) -> Result<Client, ConsoleError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("apprepo/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|error| ConsoleError::Configuration {
            message: format!("failed to configure HTTP client: {error}"),
        })
}
