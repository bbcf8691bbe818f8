//! Release resolution error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum IndexError {
    #[error("No versions found for {package}")]
    NoVersions { package: String },

    #[error("The requested package {package}, version {version} does not exist")]
    NotFound { package: String, version: String },

    #[error("Unable to retrieve release data for {package}, version {version}\n    {fault}")]
    RetrievalFailed {
        package: String,
        version: String,
        fault: String,
    },

    #[error("Unable to list releases for {package}\n    {fault}")]
    ListingFailed { package: String, fault: String },

    #[error("invalid release record for {package}: {message}")]
    InvalidRecord { package: String, message: String },
}

impl UserFacingError for IndexError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::NoVersions { .. } | Self::NotFound { .. } => {
                Some("Check the package name and version on the index.")
            }
            _ => None,
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::NoVersions { .. } => "index.no_versions",
            Self::NotFound { .. } => "index.not_found",
            Self::RetrievalFailed { .. } => "index.retrieval_failed",
            Self::ListingFailed { .. } => "index.listing_failed",
            Self::InvalidRecord { .. } => "index.invalid_record",
        };
        Some(code)
    }
}
