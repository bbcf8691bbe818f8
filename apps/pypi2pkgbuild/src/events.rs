//! Event handling and user feedback

use crate::logging::log_event_with_tracing;
use pypi2pkgbuild_events::{AppEvent, DraftEvent};

/// Prints the events a user should see while a recipe is drafted
///
/// Informational lines go to stdout, warnings to stderr.
#[derive(Default)]
pub struct EventHandler;

impl EventHandler {
    /// Create new event handler
    pub fn new() -> Self {
        Self
    }

    /// Handle incoming event
    pub fn handle_event(&mut self, event: AppEvent) {
        log_event_with_tracing(&event);

        // Operation lifecycle events are only logged
        if let AppEvent::Draft(draft) = event {
            Self::handle_draft(draft);
        }
    }

    fn handle_draft(event: DraftEvent) {
        match event {
            DraftEvent::ArtifactSkipped { url, .. } => println!("{url}"),
            DraftEvent::SourceMissing {
                package,
                version,
                fallback_url,
            } => {
                let context = match fallback_url {
                    Some(url) => {
                        format!("using the declared download URL {url}, please verify the source entry")
                    }
                    None => "please fill in the source entry manually".to_string(),
                };
                eprintln!("Warning: No source archive found for {package} {version} ({context})");
            }
            DraftEvent::RuntimeAssumed { runtime } => {
                println!("The required python version has automatically been set to {runtime}");
                println!("If that is not correct, please change it");
            }
            DraftEvent::RecipeWritten { path } => println!("Created {}", path.display()),
            DraftEvent::VersionSelected { .. }
            | DraftEvent::ArtifactSelected { .. }
            | DraftEvent::LicenseResolved { .. } => {}
        }
    }
}
