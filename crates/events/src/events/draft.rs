use std::path::PathBuf;

/// Events raised while a recipe is drafted
#[derive(Debug, Clone)]
pub enum DraftEvent {
    /// The newest release was picked because no version was requested
    VersionSelected {
        package: String,
        version: String,
        candidates: usize,
    },

    /// Artifact chosen as the recipe source
    ArtifactSelected { filename: String, url: String },

    /// Artifact not used as the recipe source
    ArtifactSkipped { filename: String, url: String },

    /// No artifact looked like a source archive
    SourceMissing {
        package: String,
        version: String,
        fallback_url: Option<String>,
    },

    /// The runtime tag could not be detected and a default was used
    RuntimeAssumed { runtime: String },

    /// License tag settled for the recipe
    LicenseResolved {
        license: String,
        from_classifiers: bool,
    },

    /// Recipe file written to disk
    RecipeWritten { path: PathBuf },
}
