//! Field normalization
//!
//! Turns the raw release record and its artifact list into the values the
//! recipe needs: the distribution name without its `python-` prefix, a
//! source archive with checksum, the runtime tag and a license tag.

use pypi2pkgbuild_errors::{DraftError, Error};
use pypi2pkgbuild_events::{AppEvent, DraftEvent, EventEmitter, EventSender};
use pypi2pkgbuild_types::{license_from_classifiers, Artifact, ReleaseRecord, RuntimeTag};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Checksum written when no source archive carries one
pub const UNKNOWN_MD5: &str = "unknown";

/// Filenames treated as source archives; only the start is anchored
static SOURCE_ARCHIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^.*\.(tar|zip|gz|z|bz2?|xz)").expect("source archive pattern is valid")
});

const PYTHON_PREFIX: &str = "python-";

/// Normalized recipe metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeMetadata {
    /// Package name without the `python-` prefix
    pub name: String,
    pub version: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub license: String,
    pub source_url: Option<String>,
    pub source_md5: String,
    pub runtime: RuntimeTag,
}

impl RecipeMetadata {
    /// Create metadata with the required fields
    ///
    /// License defaults to `CUSTOM` and the checksum to `unknown`.
    ///
    /// # Errors
    ///
    /// Returns `DraftError::MissingField` if `name` or `version` is empty.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Result<Self, Error> {
        let name = name.into();
        let version = version.into();
        for (field, value) in [("name", &name), ("version", &version)] {
            if value.trim().is_empty() {
                return Err(DraftError::MissingField {
                    field: field.to_string(),
                }
                .into());
            }
        }

        Ok(Self {
            name,
            version,
            description: None,
            homepage: None,
            license: pypi2pkgbuild_types::CUSTOM_LICENSE.to_string(),
            source_url: None,
            source_md5: UNKNOWN_MD5.to_string(),
            runtime: RuntimeTag::default(),
        })
    }
}

/// Drop a leading `python-` from a distribution name
#[must_use]
pub fn strip_python_prefix(name: &str) -> &str {
    name.strip_prefix(PYTHON_PREFIX).unwrap_or(name)
}

/// Pick the source archive among the release artifacts
///
/// The first artifact whose filename looks like a source archive wins.
/// Every other artifact is reported as skipped.
#[must_use]
pub fn select_source<'a>(
    artifacts: &'a [Artifact],
    events: Option<&EventSender>,
) -> Option<&'a Artifact> {
    let mut selected = None;
    for artifact in artifacts {
        if selected.is_none() && SOURCE_ARCHIVE.is_match(&artifact.filename) {
            debug!(filename = %artifact.filename, "selected source archive");
            events.emit(AppEvent::Draft(DraftEvent::ArtifactSelected {
                filename: artifact.filename.clone(),
                url: artifact.url.clone(),
            }));
            selected = Some(artifact);
        } else {
            debug!(filename = %artifact.filename, "skipping artifact");
            events.emit_artifact_skipped(&artifact.filename, &artifact.url);
        }
    }
    selected
}

/// Usable release-level download URL, if any
fn declared_download_url(record: &ReleaseRecord) -> Option<String> {
    record
        .download_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty() && *url != "UNKNOWN")
        .map(str::to_string)
}

/// Normalize a release and its artifacts into recipe metadata
///
/// # Errors
///
/// Returns `DraftError::MissingField` if the record has an empty name or
/// version.
pub fn normalize(
    record: &ReleaseRecord,
    artifacts: &[Artifact],
    events: Option<&EventSender>,
) -> Result<RecipeMetadata, Error> {
    let mut metadata = RecipeMetadata::new(strip_python_prefix(&record.name), &record.version)?;
    metadata.description.clone_from(&record.summary);
    metadata.homepage.clone_from(&record.home_page);

    if let Some(source) = select_source(artifacts, events) {
        metadata.source_url = Some(source.url.clone());
        if let Some(md5) = source.md5_digest.as_deref().filter(|d| !d.is_empty()) {
            metadata.source_md5 = md5.to_string();
        }
    } else {
        let fallback_url = declared_download_url(record);
        debug!(
            package = %record.name,
            version = %record.version,
            fallback = fallback_url.as_deref().unwrap_or(""),
            "no source archive among release files"
        );
        events.emit(AppEvent::Draft(DraftEvent::SourceMissing {
            package: record.name.clone(),
            version: record.version.clone(),
            fallback_url: fallback_url.clone(),
        }));
        metadata.source_url = fallback_url;
    }

    events.emit(AppEvent::Draft(DraftEvent::RuntimeAssumed {
        runtime: metadata.runtime.to_string(),
    }));

    let declared = record.license.as_deref().map(str::trim).filter(|l| !l.is_empty());
    let from_classifiers = declared.is_none();
    metadata.license = declared
        .unwrap_or_else(|| license_from_classifiers(&record.classifiers))
        .to_string();
    debug!(license = %metadata.license, from_classifiers, "resolved license");
    events.emit(AppEvent::Draft(DraftEvent::LicenseResolved {
        license: metadata.license.clone(),
        from_classifiers,
    }));

    Ok(metadata)
}
