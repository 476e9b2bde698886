//! Per-request forwarding errors.
//!
//! Both kinds surface to the caller as a plain-text 500 and are never retried.

use std::error::Error as StdError;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Body sent when the target's response body cannot be read in full.
pub const READ_FAILURE_BODY: &str = "Failed to read response body";

#[derive(Debug, Error)]
pub enum ForwardError {
    /// The outbound request could not be built or the network call failed.
    #[error("{description}")]
    Dispatch { description: String },

    /// The target answered but its body could not be read to the end.
    #[error("Failed to read response body")]
    ResponseRead(#[source] axum::Error),
}

impl ForwardError {
    /// Capture an error and its whole `source()` chain as the reply text.
    pub fn dispatch(err: &(dyn StdError + 'static)) -> Self {
        let mut description = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            // Some errors already print their cause inline.
            if !description.ends_with(&text) {
                description.push_str(": ");
                description.push_str(&text);
            }
            source = cause.source();
        }
        ForwardError::Dispatch { description }
    }
}

impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
