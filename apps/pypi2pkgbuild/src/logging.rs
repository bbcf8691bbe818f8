//! Structured logging of events
//!
//! Every event the CLI receives is also recorded through `tracing` so that
//! `--debug` and `RUST_LOG` show the full drafting trail.

use pypi2pkgbuild_events::{AppEvent, DraftEvent, GeneralEvent};
use tracing::{debug, info};

/// Log an `AppEvent` with structured fields
pub fn log_event_with_tracing(event: &AppEvent) {
    match event {
        AppEvent::General(general) => match general {
            GeneralEvent::OperationStarted { operation } => {
                debug!(operation = %operation, "Operation started");
            }
            GeneralEvent::OperationCompleted { operation, success } => {
                debug!(operation = %operation, success, "Operation completed");
            }
        },
        AppEvent::Draft(draft) => match draft {
            DraftEvent::VersionSelected {
                package,
                version,
                candidates,
            } => {
                info!(package = %package, version = %version, candidates, "Version selected");
            }
            DraftEvent::ArtifactSelected { filename, url } => {
                debug!(filename = %filename, url = %url, "Source archive selected");
            }
            DraftEvent::ArtifactSkipped { filename, url } => {
                debug!(filename = %filename, url = %url, "Artifact skipped");
            }
            DraftEvent::SourceMissing {
                package,
                version,
                fallback_url,
            } => {
                // The CLI prints its own warning for this
                debug!(
                    package = %package,
                    version = %version,
                    fallback_url = ?fallback_url,
                    "No source archive"
                );
            }
            DraftEvent::RuntimeAssumed { runtime } => {
                debug!(runtime = %runtime, "Runtime assumed");
            }
            DraftEvent::LicenseResolved {
                license,
                from_classifiers,
            } => {
                debug!(license = %license, from_classifiers, "License resolved");
            }
            DraftEvent::RecipeWritten { path } => {
                info!(path = %path.display(), "Recipe written");
            }
        },
    }
}
