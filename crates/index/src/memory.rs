//! In-memory package index for tests

use crate::PackageIndex;
use pypi2pkgbuild_errors::{Error, NetworkError};
use pypi2pkgbuild_types::{Artifact, ReleaseRecord};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone)]
struct Release {
    record: ReleaseRecord,
    artifacts: Vec<Artifact>,
}

/// Test double for [`PackageIndex`]
///
/// Holds releases in memory so code generic over the index can be tested
/// without a server. The binary always uses [`crate::XmlRpcIndex`]. Every
/// call is counted so tests can check how many round trips a resolution
/// would cost against a real index.
#[derive(Debug, Default)]
pub struct MemoryIndex {
    // package -> releases in the order they were added
    packages: HashMap<String, Vec<(String, Release)>>,
    fault: Option<(i64, String)>,
    calls: AtomicUsize,
}

impl MemoryIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a release of `package` together with its artifacts
    #[must_use]
    pub fn with_release(
        mut self,
        package: impl Into<String>,
        record: ReleaseRecord,
        artifacts: Vec<Artifact>,
    ) -> Self {
        let version = record.version.clone();
        self.packages
            .entry(package.into())
            .or_default()
            .push((version, Release { record, artifacts }));
        self
    }

    /// Answer every call with a fault
    #[must_use]
    pub fn with_fault(mut self, code: i64, message: impl Into<String>) -> Self {
        self.fault = Some((code, message.into()));
        self
    }

    /// Number of calls served so far
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    fn find(&self, package: &str, version: &str) -> Option<&Release> {
        self.packages
            .get(package)?
            .iter()
            .find(|(v, _)| v == version)
            .map(|(_, release)| release)
    }

    fn check_fault(&self) -> Result<(), Error> {
        match &self.fault {
            Some((code, message)) => Err(NetworkError::RpcFault {
                code: *code,
                message: message.clone(),
            }
            .into()),
            None => Ok(()),
        }
    }
}

impl PackageIndex for MemoryIndex {
    async fn package_releases(&self, package: &str) -> Result<Vec<String>, Error> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.check_fault()?;
        Ok(self
            .packages
            .get(package)
            .map(|releases| releases.iter().map(|(v, _)| v.clone()).collect())
            .unwrap_or_default())
    }

    async fn release_data(
        &self,
        package: &str,
        version: &str,
    ) -> Result<Option<ReleaseRecord>, Error> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.check_fault()?;
        Ok(self.find(package, version).map(|r| r.record.clone()))
    }

    async fn release_urls(&self, package: &str, version: &str) -> Result<Vec<Artifact>, Error> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.check_fault()?;
        Ok(self
            .find(package, version)
            .map(|r| r.artifacts.clone())
            .unwrap_or_default())
    }
}
