//! Network-related error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum NetworkError {
    #[error("connection timeout to {url}")]
    Timeout { url: String },

    #[error("connection refused: {0}")]
    ConnectionRefused(String),

    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error {status}: {message}")]
    HttpError { status: u16, message: String },

    #[error("malformed XML-RPC response: {0}")]
    MalformedResponse(String),

    /// The remote service answered with an XML-RPC fault.
    #[error("<Fault {code}: '{message}'>")]
    RpcFault { code: i64, message: String },
}

impl UserFacingError for NetworkError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::Timeout { .. } | Self::ConnectionRefused(_) => {
                Some("Check your network connection and the index URL (-u/--url).")
            }
            Self::InvalidUrl(_) => Some("Pass a full URL such as https://pypi.python.org/pypi."),
            Self::HttpError { .. } | Self::MalformedResponse(_) => {
                Some("Make sure the index URL points at an XML-RPC endpoint.")
            }
            _ => None,
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::ConnectionRefused(_) | Self::RequestFailed(_)
        )
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::Timeout { .. } => "network.timeout",
            Self::ConnectionRefused(_) => "network.connection_refused",
            Self::RequestFailed(_) => "network.request_failed",
            Self::InvalidUrl(_) => "network.invalid_url",
            Self::HttpError { .. } => "network.http_error",
            Self::MalformedResponse(_) => "network.malformed_response",
            Self::RpcFault { .. } => "network.rpc_fault",
        };
        Some(code)
    }
}
