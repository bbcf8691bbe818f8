// Declare all domain modules
pub mod draft;
pub mod general;

pub use draft::*;
pub use general::*;

/// Top-level application event enum that aggregates all domain-specific events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// General utility events (warnings, debug output, operations)
    General(GeneralEvent),

    /// Recipe drafting events (version choice, artifacts, output)
    Draft(DraftEvent),
}
