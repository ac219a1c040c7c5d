/// Error type for persistence operations.
///
/// Any of these aborts the triggering operation; the caller keeps its prior
/// in-memory state and surfaces the message as a transient notification.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not serialize value: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("storage backend failure: {0}")]
    Backend(String),
}
