//! Release and artifact type definitions

use std::fmt;

/// Metadata describing one version of one package on the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRecord {
    pub name: String,
    pub version: String,
    pub summary: Option<String>,
    pub home_page: Option<String>,
    pub license: Option<String>,
    pub classifiers: Vec<String>,
    /// Download URL declared by the release itself, independent of its artifacts
    pub download_url: Option<String>,
}

impl ReleaseRecord {
    /// Create a record with only the required fields set
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            summary: None,
            home_page: None,
            license: None,
            classifiers: Vec::new(),
            download_url: None,
        }
    }

    /// Set the one-line summary
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Set the project homepage
    #[must_use]
    pub fn with_home_page(mut self, home_page: impl Into<String>) -> Self {
        self.home_page = Some(home_page.into());
        self
    }

    /// Set the declared license
    #[must_use]
    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }

    /// Append a trove classifier
    #[must_use]
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifiers.push(classifier.into());
        self
    }

    /// Set the release-level download URL
    #[must_use]
    pub fn with_download_url(mut self, url: impl Into<String>) -> Self {
        self.download_url = Some(url.into());
        self
    }
}

/// A single downloadable file belonging to a release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: String,
    pub url: String,
    pub md5_digest: Option<String>,
}

impl Artifact {
    pub fn new(
        filename: impl Into<String>,
        url: impl Into<String>,
        md5_digest: Option<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            url: url.into(),
            md5_digest,
        }
    }
}

/// Interpreter the generated package depends on
///
/// Index metadata does not reliably say which interpreter a release
/// targets, so recipes are always drafted against Python 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum RuntimeTag {
    #[default]
    Python2,
}

impl RuntimeTag {
    /// Package name of the runtime, as used in `depends=()` and the pkgname prefix
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Python2 => "python2",
        }
    }
}

impl fmt::Display for RuntimeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
