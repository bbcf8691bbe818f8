#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Network operations for pypi2pkgbuild
//!
//! This crate owns the HTTP client and the XML-RPC codec used to talk to
//! the package index.

mod client;
pub mod xmlrpc;

pub use client::{NetClient, NetConfig};
pub use xmlrpc::Value;

use pypi2pkgbuild_errors::{Error, NetworkError};
use tracing::debug;
use url::Url;

/// Invoke an XML-RPC method and decode its result
///
/// # Errors
///
/// Returns an error if the request fails, the server returns an error
/// status, the body is not a valid XML-RPC response, or the service
/// answered with a fault (`NetworkError::RpcFault`).
pub async fn call(
    client: &NetClient,
    endpoint: &str,
    method: &str,
    params: &[Value],
) -> Result<Value, Error> {
    debug!(endpoint, method, "XML-RPC call");

    let response = client
        .post_xml(endpoint, xmlrpc::encode_call(method, params))
        .await?;

    if !response.status().is_success() {
        return Err(NetworkError::HttpError {
            status: response.status().as_u16(),
            message: response.status().to_string(),
        }
        .into());
    }

    let body = response
        .text()
        .await
        .map_err(|e| NetworkError::RequestFailed(e.to_string()))?;

    xmlrpc::parse_response(&body)
}

/// Parse and validate a URL
///
/// # Errors
///
/// Returns an error if the URL string is malformed or invalid according to RFC 3986.
pub fn parse_url(url: &str) -> Result<Url, Error> {
    Url::parse(url).map_err(|e| NetworkError::InvalidUrl(format!("{url}: {e}")).into())
}
