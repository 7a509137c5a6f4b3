use thiserror::Error;

/// Failure while reading or writing client-side storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored value is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The browser refused the operation (quota, private mode, no window).
    #[error("web storage unavailable: {0}")]
    Unavailable(String),
}
