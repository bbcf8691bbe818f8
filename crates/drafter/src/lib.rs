#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Recipe drafter for pypi2pkgbuild
//!
//! This crate turns a package published on a Python package index into an
//! Arch Linux PKGBUILD: it resolves the release, normalizes its fields,
//! renders the fixed template and writes the result to disk.

mod normalize;
mod template;
mod writer;

pub use normalize::{
    normalize, select_source, strip_python_prefix, RecipeMetadata, UNKNOWN_MD5,
};
pub use template::{render, render_template, RECIPE_TEMPLATE};
pub use writer::{recipe_dir_name, RECIPE_FILE_NAME};

use pypi2pkgbuild_errors::Error;
use pypi2pkgbuild_events::{EventEmitter, EventSender};
use pypi2pkgbuild_index::{fetch_artifacts, resolve_release, PackageIndex};
use std::path::{Path, PathBuf};
use tracing::info;

/// Type alias for results in this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Result of recipe drafting
#[derive(Debug)]
pub struct DraftResult {
    /// Generated recipe content
    pub recipe_content: String,
    /// Normalized metadata the recipe was rendered from
    pub metadata: RecipeMetadata,
}

/// Main drafter struct
pub struct Drafter {
    package: String,
    version: Option<String>,
    event_tx: Option<EventSender>,
}

impl Drafter {
    /// Create a drafter for `package`, optionally pinned to `version`
    #[must_use]
    pub fn new(package: impl Into<String>, version: Option<String>) -> Self {
        Self {
            package: package.into(),
            version,
            event_tx: None,
        }
    }

    /// Set event sender for user-facing notices
    #[must_use]
    pub fn with_event_sender(mut self, tx: EventSender) -> Self {
        self.event_tx = Some(tx);
        self
    }

    /// Run the drafting process
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The release cannot be resolved or its files cannot be listed
    /// - The release record lacks a name or version
    /// - Template rendering fails
    pub async fn run<I: PackageIndex>(&self, index: &I) -> Result<DraftResult> {
        let events = self.event_tx.as_ref();
        events.emit_operation_started(format!("Drafting PKGBUILD for {}", self.package));

        let result = self.draft(index).await;
        events.emit_operation_completed(
            format!("Drafting PKGBUILD for {}", self.package),
            result.is_ok(),
        );
        result
    }

    async fn draft<I: PackageIndex>(&self, index: &I) -> Result<DraftResult> {
        let events = self.event_tx.as_ref();

        let record = resolve_release(index, &self.package, self.version.as_deref(), events).await?;
        // Files are listed under the name given on the command line
        let artifacts = fetch_artifacts(index, &self.package, &record.version).await?;

        let metadata = normalize(&record, &artifacts, events)?;
        let recipe_content = render(&metadata)?;
        info!(name = %metadata.name, version = %metadata.version, "rendered PKGBUILD");

        Ok(DraftResult {
            recipe_content,
            metadata,
        })
    }

    /// Write a drafted recipe below `base_dir`
    ///
    /// # Errors
    ///
    /// Returns `DraftError::RecipeExists` if a PKGBUILD is already present
    /// for this package and version, or an I/O error.
    pub async fn write_recipe(&self, base_dir: &Path, draft: &DraftResult) -> Result<PathBuf> {
        let path = writer::write_recipe(base_dir, &draft.metadata, &draft.recipe_content).await?;
        info!(path = %path.display(), "wrote PKGBUILD");
        self.event_tx.as_ref().emit_recipe_written(&path);
        Ok(path)
    }
}
