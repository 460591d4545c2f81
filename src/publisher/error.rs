/// Error types for event publishing.
#[derive(Debug, thiserror::Error)]
pub enum PublisherError {
    /// A required envelope field is missing. Raised before any I/O.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The payload could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The remote call failed. The underlying error is kept as the source.
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl PublisherError {
    /// Wraps any transport-level failure.
    pub fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport(Box::new(err))
    }
}
