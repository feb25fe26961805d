//! # Sequence Autoencoder
//!
//! Encoder, decoder and the composed autoencoder, all built from a
//! [`AutoencoderConfig`].
//!
//! ## Data Flow
//!
//! ```text
//! x [batch, time, input_size]
//!   │  SequenceEncoder: LSTM stack, keep last timestep only
//!   ▼
//! latent [batch, 1, encoding_size]
//!   │  repeat across the caller's `time`
//!   ▼
//! [batch, time, encoding_size]
//!   │  SequenceDecoder: LSTM stack, keep every timestep, then Linear
//!   ▼
//! reconstruction [batch, time, input_size]
//! ```
//!
//! ## Example
//!
//! ```rust
//! use burn::backend::NdArray;
//! use burn::tensor::Tensor;
//! use seqae::model::AutoencoderConfig;
//!
//! type Backend = NdArray<f32>;
//! let device = Default::default();
//!
//! let model = AutoencoderConfig::new(128, 64, 16)
//!     .with_encoder_layers(2)
//!     .with_seed(Some(1))
//!     .init::<Backend>(&device)
//!     .unwrap();
//!
//! let x = Tensor::<Backend, 3>::zeros([4, 50, 128], &device);
//! assert_eq!(model.encode(x.clone()).unwrap().dims(), [4, 1, 16]);
//! assert_eq!(model.forward(x).unwrap().dims(), [4, 50, 128]);
//! ```

pub mod autoencoder;
pub mod config;
pub mod decoder;
pub mod encoder;

pub use autoencoder::Autoencoder;
pub use config::AutoencoderConfig;
pub use decoder::SequenceDecoder;
pub use encoder::SequenceEncoder;

use crate::error::{ModelError, Result};
use crate::rnn::Lstm;
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

/// Reject inputs a layer stack cannot consume.
pub(crate) fn check_sequence<B: Backend>(x: &Tensor<B, 3>, feature_width: usize) -> Result<()> {
    let [batch, time, features] = x.dims();

    if features != feature_width {
        return Err(ModelError::FeatureMismatch {
            expected: feature_width,
            got: features,
        });
    }
    if batch == 0 {
        return Err(ModelError::EmptyBatch);
    }
    if time == 0 {
        return Err(ModelError::EmptySequence);
    }
    Ok(())
}

/// Compare a layer stack's weight shapes against the widths it should realise.
pub(crate) fn check_stack<B: Backend>(name: &str, layers: &[Lstm<B>], widths: &[usize]) -> Result<()> {
    let expected_layers = widths.len().saturating_sub(1);
    if layers.len() != expected_layers {
        return Err(ModelError::ArchitectureMismatch(format!(
            "{name} has {} recurrent layers, expected {expected_layers}",
            layers.len()
        )));
    }

    for (index, (layer, pair)) in layers.iter().zip(widths.windows(2)).enumerate() {
        let (input_dims, recurrent_dims) = layer.cell().weight_dims();
        let expected_input = [pair[0], 4 * pair[1]];
        let expected_recurrent = [pair[1], 4 * pair[1]];

        if input_dims != expected_input || recurrent_dims != expected_recurrent {
            return Err(ModelError::ArchitectureMismatch(format!(
                "{name} layer {index}: weights {input_dims:?}/{recurrent_dims:?}, \
                 expected {expected_input:?}/{expected_recurrent:?}"
            )));
        }
    }
    Ok(())
}
