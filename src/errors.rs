use thiserror::Error;

/// Result alias used by every provider operation.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// Malformed or unresolvable configuration, raised at init time.
    #[error("Bad config: {0}")]
    BadConfig(String),

    /// Caller supplied an argument the provider cannot act on.
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Kubernetes API failures, passed through unchanged.
    #[error(transparent)]
    Kube(#[from] kube::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any other backend failure.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl ProviderError {
    pub fn bad_config<S: Into<String>>(msg: S) -> Self {
        ProviderError::BadConfig(msg.into())
    }

    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        ProviderError::NotFound(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::NotFound(_))
    }

    pub fn is_bad_config(&self) -> bool {
        matches!(self, ProviderError::BadConfig(_))
    }
}
