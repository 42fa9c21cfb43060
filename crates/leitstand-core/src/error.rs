//! Error types for leitstand-core

/// Result type for leitstand-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving settings or loading UI metadata
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A module descriptor exists but could not be read or parsed
    #[error("Failed to load module '{module}': {reason}")]
    ModuleLoad { module: String, reason: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from leitstand-fs
    #[error(transparent)]
    Fs(#[from] leitstand_fs::Error),

    /// Model error from leitstand-model
    #[error(transparent)]
    Model(#[from] leitstand_model::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
