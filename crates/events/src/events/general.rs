/// Lifecycle events for the drafting operation as a whole
#[derive(Debug, Clone)]
pub enum GeneralEvent {
    /// Generic operation started notification
    OperationStarted { operation: String },

    /// Generic operation completion with success status
    OperationCompleted { operation: String, success: bool },
}
