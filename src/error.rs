//! Error types for seqae.

use burn::record::RecorderError;
use thiserror::Error;

/// Errors raised while building, running or restoring an autoencoder.
#[derive(Error, Debug)]
pub enum ModelError {
    /// A layer stack needs at least one layer
    #[error("layer count must be at least 1")]
    ZeroLayers,

    /// Every layer width must be positive
    #[error("width `{field}` must be positive")]
    ZeroWidth { field: &'static str },

    /// Trailing feature dimension of the input does not match the model
    #[error("feature width mismatch: expected {expected}, got {got}")]
    FeatureMismatch { expected: usize, got: usize },

    /// Input has no timesteps
    #[error("sequence has no timesteps")]
    EmptySequence,

    /// Input has no examples
    #[error("batch has no examples")]
    EmptyBatch,

    /// Loaded parameters do not fit the configured architecture
    #[error("architecture mismatch: {0}")]
    ArchitectureMismatch(String),

    /// Snapshot (de)serialisation failure
    #[error("recorder error: {0}")]
    Recorder(#[from] RecorderError),

    /// Config side-car could not be read
    #[error("config error: {0}")]
    Config(String),

    /// Filesystem failure while writing a bundle
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for seqae operations.
pub type Result<T> = std::result::Result<T, ModelError>;
