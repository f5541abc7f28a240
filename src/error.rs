//! Request Failure Classification
//!
//! Every backend call resolves to one of three failure shapes, and the
//! Display string of each is the message shown in the error banner.

use thiserror::Error;

/// Failure of a single backend request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered, but with an error status or a failure envelope
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The request went out but nothing came back
    #[error("No response from the server: {0}")]
    Connection(String),

    /// Anything else that broke while building or handling the request
    #[error("Request failed: {0}")]
    Unexpected(String),
}

impl ApiError {
    /// Classify a transport-level error from the fetch layer.
    ///
    /// A rejected fetch (connection refused, DNS failure) surfaces as
    /// `JsError`; everything else is a client-side problem.
    pub(crate) fn from_transport(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(js) => Self::Connection(js.to_string()),
            other => Self::Unexpected(other.to_string()),
        }
    }

    pub(crate) fn from_js(value: wasm_bindgen::JsValue) -> Self {
        Self::Unexpected(format!("{value:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_surface_the_backend_message() {
        let err = ApiError::Server {
            status: 400,
            message: "title is required".to_string(),
        };
        assert_eq!(err.to_string(), "Server error (400): title is required");
    }

    #[test]
    fn connection_errors_mention_the_missing_response() {
        let err = ApiError::Connection("Failed to fetch".to_string());
        assert!(err.to_string().starts_with("No response"));
    }

    #[test]
    fn unexpected_errors_keep_the_detail() {
        let err = ApiError::Unexpected("bad form data".to_string());
        assert_eq!(err.to_string(), "Request failed: bad form data");
    }
}
