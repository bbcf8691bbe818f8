#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Event system for pypi2pkgbuild
//!
//! Library crates never print. Everything the user should see while a
//! recipe is drafted travels as an [`AppEvent`] over an unbounded channel
//! and is rendered by the CLI.

pub mod events;
pub use events::{AppEvent, DraftEvent, GeneralEvent};

use std::path::PathBuf;
use tokio::sync::mpsc::UnboundedSender;

/// Type alias for event sender
pub type EventSender = UnboundedSender<AppEvent>;

/// Type alias for event receiver
pub type EventReceiver = tokio::sync::mpsc::UnboundedReceiver<AppEvent>;

/// Create a new event channel
#[must_use]
pub fn channel() -> (EventSender, EventReceiver) {
    tokio::sync::mpsc::unbounded_channel()
}

/// The unified trait for emitting events
///
/// Implemented for a raw [`EventSender`] and for `Option<&EventSender>` so
/// that callers without a listener can pass `None`.
pub trait EventEmitter {
    /// Get the event sender for this emitter
    fn event_sender(&self) -> Option<&EventSender>;

    /// Emit an event through this emitter
    fn emit(&self, event: AppEvent) {
        if let Some(sender) = self.event_sender() {
            // Receiver gone means nobody is listening; drafting continues
            let _ = sender.send(event);
        }
    }

    /// Emit an operation started event
    fn emit_operation_started(&self, operation: impl Into<String>) {
        self.emit(AppEvent::General(GeneralEvent::OperationStarted {
            operation: operation.into(),
        }));
    }

    /// Emit an operation completed event
    fn emit_operation_completed(&self, operation: impl Into<String>, success: bool) {
        self.emit(AppEvent::General(GeneralEvent::OperationCompleted {
            operation: operation.into(),
            success,
        }));
    }

    /// Emit a version selected event
    fn emit_version_selected(
        &self,
        package: impl Into<String>,
        version: impl Into<String>,
        candidates: usize,
    ) {
        self.emit(AppEvent::Draft(DraftEvent::VersionSelected {
            package: package.into(),
            version: version.into(),
            candidates,
        }));
    }

    /// Emit an artifact skipped event
    fn emit_artifact_skipped(&self, filename: impl Into<String>, url: impl Into<String>) {
        self.emit(AppEvent::Draft(DraftEvent::ArtifactSkipped {
            filename: filename.into(),
            url: url.into(),
        }));
    }

    /// Emit a recipe written event
    fn emit_recipe_written(&self, path: impl Into<PathBuf>) {
        self.emit(AppEvent::Draft(DraftEvent::RecipeWritten { path: path.into() }));
    }
}

impl EventEmitter for EventSender {
    fn event_sender(&self) -> Option<&EventSender> {
        Some(self)
    }
}

impl EventEmitter for Option<&EventSender> {
    fn event_sender(&self) -> Option<&EventSender> {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_emit_through_sender() {
        let (tx, mut rx) = channel();
        tx.emit_artifact_skipped("requests-2.0.0-py2-none-any.whl", "https://x/whl");
        tx.emit_operation_started("draft");

        match rx.recv().await {
            Some(AppEvent::Draft(DraftEvent::ArtifactSkipped { filename, url })) => {
                assert_eq!(filename, "requests-2.0.0-py2-none-any.whl");
                assert_eq!(url, "https://x/whl");
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(matches!(
            rx.recv().await,
            Some(AppEvent::General(GeneralEvent::OperationStarted { .. }))
        ));
    }

    #[test]
    fn test_none_emitter_is_silent() {
        let emitter: Option<&EventSender> = None;
        // Must not panic without a listener
        emitter.emit_operation_started("nobody hears this");
    }

    #[test]
    fn test_dropped_receiver_is_ignored() {
        let (tx, rx) = channel();
        drop(rx);
        tx.emit_operation_started("draft");
    }
}
