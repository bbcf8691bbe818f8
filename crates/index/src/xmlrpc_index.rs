//! Package index reached over XML-RPC

use crate::models::{artifacts_from_value, release_from_value, versions_from_value};
use crate::PackageIndex;
use pypi2pkgbuild_errors::Error;
use pypi2pkgbuild_net::{call, parse_url, NetClient, Value};
use pypi2pkgbuild_types::{Artifact, ReleaseRecord};
use tracing::debug;

/// PyPI-style XML-RPC index
#[derive(Clone)]
pub struct XmlRpcIndex {
    client: NetClient,
    endpoint: String,
}

impl XmlRpcIndex {
    /// Create an index client for `endpoint`
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL.
    pub fn new(client: NetClient, endpoint: impl Into<String>) -> Result<Self, Error> {
        let endpoint = endpoint.into();
        parse_url(&endpoint)?;
        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PackageIndex for XmlRpcIndex {
    async fn package_releases(&self, package: &str) -> Result<Vec<String>, Error> {
        // `true` asks for hidden releases too
        let value = call(
            &self.client,
            &self.endpoint,
            "package_releases",
            &[package.into(), true.into()],
        )
        .await?;
        let versions = versions_from_value(package, &value)?;
        debug!(package, count = versions.len(), "listed releases");
        Ok(versions)
    }

    async fn release_data(
        &self,
        package: &str,
        version: &str,
    ) -> Result<Option<ReleaseRecord>, Error> {
        let value = call(
            &self.client,
            &self.endpoint,
            "release_data",
            &[package.into(), version.into()],
        )
        .await?;
        release_from_value(package, &value)
    }

    async fn release_urls(&self, package: &str, version: &str) -> Result<Vec<Artifact>, Error> {
        let value = call(
            &self.client,
            &self.endpoint,
            "release_urls",
            &[package.into(), version.into()],
        )
        .await?;
        let artifacts = artifacts_from_value(package, &value)?;
        debug!(package, version, count = artifacts.len(), "listed artifacts");
        Ok(artifacts)
    }
}
