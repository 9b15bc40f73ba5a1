//! Error mapping helpers for the HTTP gateway.

use http::StatusCode;
use serde::Deserialize;

use crate::console::error::ConsoleError;

const MAX_MESSAGE_CHARS: usize = 200;

/// Checks if a status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

pub(super) fn map_transport_error(operation: &str, error: &reqwest::Error) -> ConsoleError {
    let detail = if error.is_timeout() {
        "request timed out".to_owned()
    } else {
        error.to_string()
    };
    ConsoleError::Network {
        message: format!("{operation} failed: {detail}"),
    }
}

pub(super) fn map_http_error(
    operation: &str,
    status: StatusCode,
    maybe_message: Option<String>,
) -> ConsoleError {
    let message = maybe_message.unwrap_or_else(|| "unknown error".to_owned());
    if is_auth_failure(status) {
        ConsoleError::Authentication {
            message: format!("{operation} failed: console returned {status} {message}"),
        }
    } else if status == StatusCode::NOT_FOUND {
        ConsoleError::NotFound {
            message: format!("{operation}: {message}"),
        }
    } else {
        ConsoleError::Api {
            status: status.as_u16(),
            message: format!("{operation} failed: {message}"),
        }
    }
}

pub(super) fn map_decode_error(operation: &str, error: &serde_json::Error) -> ConsoleError {
    ConsoleError::MalformedResponse {
        message: format!("{operation} response did not match the expected schema: {error}"),
    }
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    reason: Option<String>,
}

/// Pulls a human-readable message out of an error body.
///
/// JSON bodies contribute their `message` (or `reason`) field; anything else
/// is used verbatim, truncated.
pub(super) fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(trimmed) {
        if let Some(message) = parsed.message.or(parsed.reason) {
            return Some(truncate_for_message(&message, MAX_MESSAGE_CHARS));
        }
    }

    Some(truncate_for_message(trimmed, MAX_MESSAGE_CHARS))
}

fn truncate_for_message(message: &str, max_chars: usize) -> String {
    let mut output: String = message.chars().take(max_chars).collect();
    if message.chars().nth(max_chars).is_some() {
        output.push_str("...");
    }
    output
}
