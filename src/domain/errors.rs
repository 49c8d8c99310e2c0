use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the encoder/model artifacts at startup.
/// All of these are fatal: the process must not present the form.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Artifact not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("Failed to read artifact {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to deserialize artifact {path:?}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("Artifact schema mismatch: {reason}")]
    SchemaMismatch { reason: String },
}

/// Errors raised while scoring a single record. These terminate the current
/// request only; the loaded artifacts stay valid.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Feature transform failed: {reason}")]
    Transform { reason: String },

    #[error("Scoring failed: {reason}")]
    Scoring { reason: String },
}
