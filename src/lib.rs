//! # seqae - LSTM Sequence Autoencoder
//!
//! Compresses variable-length spectrogram frame sequences into fixed-size
//! latent vectors and reconstructs them, using the Burn framework.
//!
//! ## Features
//!
//! - **Width schedules**: layer widths interpolated evenly between endpoints
//! - **SequenceEncoder**: LSTM stack keeping only the last timestep
//! - **SequenceDecoder**: mirrored LSTM stack plus a per-timestep projection
//! - **Autoencoder**: `encode` / `embed` for embeddings, `forward` for reconstruction
//! - **Snapshots**: weight blobs restored against an out-of-band config
//! - **Seeded init**: every weight drawn from an explicit `StdRng`
//!
//! ## Quick Start
//!
//! ```rust
//! use burn::backend::NdArray;
//! use burn::tensor::Tensor;
//! use seqae::prelude::*;
//!
//! type Backend = NdArray<f32>;
//! let device = Default::default();
//!
//! let config = AutoencoderConfig::new(32, 16, 4)
//!     .with_encoder_layers(2)
//!     .with_seed(Some(7));
//! let model = config.init::<Backend>(&device).unwrap();
//!
//! let batch = Tensor::<Backend, 3>::zeros([2, 20, 32], &device);
//! let embedding = model.embed(batch).unwrap();
//! assert_eq!(embedding.dims(), [2, 4]);
//! ```

pub mod cells;
pub mod error;
pub mod init;
pub mod model;
pub mod prep;
pub mod rnn;
pub mod schedule;
pub mod snapshot;

pub use error::{ModelError, Result};

pub mod prelude {
    pub use crate::cells::LSTMCell;
    pub use crate::error::{ModelError, Result};
    pub use crate::model::{Autoencoder, AutoencoderConfig, SequenceDecoder, SequenceEncoder};
    pub use crate::rnn::Lstm;
    pub use crate::schedule::{decoder_schedule, encoder_schedule, plan_widths};
}
