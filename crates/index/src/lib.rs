#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Package index access for pypi2pkgbuild
//!
//! This crate resolves a package name and an optional version into a
//! release record and lists the files published for that release. The
//! index itself sits behind the [`PackageIndex`] trait; the XML-RPC
//! service is the real implementation and [`MemoryIndex`] stands in for
//! it in tests.

mod memory;
mod models;
mod xmlrpc_index;

pub use memory::MemoryIndex;
pub use xmlrpc_index::XmlRpcIndex;

use pypi2pkgbuild_errors::{Error, IndexError, NetworkError};
use pypi2pkgbuild_events::{EventEmitter, EventSender};
use pypi2pkgbuild_types::{Artifact, ReleaseRecord};
use tracing::{debug, info};

/// Remote package metadata service
#[allow(async_fn_in_trait)]
pub trait PackageIndex {
    /// List every version of `package`, hidden ones included
    async fn package_releases(&self, package: &str) -> Result<Vec<String>, Error>;

    /// Fetch the metadata of one release; `None` if the index has none
    async fn release_data(
        &self,
        package: &str,
        version: &str,
    ) -> Result<Option<ReleaseRecord>, Error>;

    /// List the files published for one release
    async fn release_urls(&self, package: &str, version: &str) -> Result<Vec<Artifact>, Error>;
}

/// Pick the greatest version string
///
/// Comparison is plain string ordering, so `"1.9"` beats `"1.10"`.
#[must_use]
pub fn select_latest(versions: &[String]) -> Option<&str> {
    versions.iter().max().map(String::as_str)
}

/// Turn an index fault into a retrieval failure for this release
fn retrieval_failed(error: Error, package: &str, version: &str) -> Error {
    match error {
        Error::Network(fault @ NetworkError::RpcFault { .. }) => IndexError::RetrievalFailed {
            package: package.to_string(),
            version: version.to_string(),
            fault: fault.to_string(),
        }
        .into(),
        other => other,
    }
}

/// Turn an index fault while listing versions into a listing failure
fn listing_failed(error: Error, package: &str) -> Error {
    match error {
        Error::Network(fault @ NetworkError::RpcFault { .. }) => IndexError::ListingFailed {
            package: package.to_string(),
            fault: fault.to_string(),
        }
        .into(),
        other => other,
    }
}

/// Resolve `package` to a release record
///
/// With `version` set that exact release is fetched. Otherwise every
/// version is listed and the greatest one is used.
///
/// # Errors
///
/// Returns `IndexError::NoVersions` if the package has no releases,
/// `IndexError::NotFound` if the release has no metadata,
/// `IndexError::ListingFailed` or `IndexError::RetrievalFailed` if the
/// index answers with a fault, and any transport error unchanged.
pub async fn resolve_release<I: PackageIndex>(
    index: &I,
    package: &str,
    version: Option<&str>,
    events: Option<&EventSender>,
) -> Result<ReleaseRecord, Error> {
    let version = if let Some(version) = version {
        version.to_string()
    } else {
        let versions = index
            .package_releases(package)
            .await
            .map_err(|e| listing_failed(e, package))?;
        let latest = select_latest(&versions).ok_or_else(|| IndexError::NoVersions {
            package: package.to_string(),
        })?;
        info!(package, version = latest, candidates = versions.len(), "selected latest release");
        events.emit_version_selected(package, latest, versions.len());
        latest.to_string()
    };

    debug!(package, version = %version, "fetching release data");
    let record = index
        .release_data(package, &version)
        .await
        .map_err(|e| retrieval_failed(e, package, &version))?;

    record.ok_or_else(|| {
        IndexError::NotFound {
            package: package.to_string(),
            version,
        }
        .into()
    })
}

/// List the artifacts of a resolved release
///
/// # Errors
///
/// Returns `IndexError::RetrievalFailed` if the index answers with a
/// fault, and any transport error unchanged.
pub async fn fetch_artifacts<I: PackageIndex>(
    index: &I,
    package: &str,
    version: &str,
) -> Result<Vec<Artifact>, Error> {
    index
        .release_urls(package, version)
        .await
        .map_err(|e| retrieval_failed(e, package, version))
}
