//! Batch preparation
//!
//! Pure tensor transforms that turn individual spectrograms into the uniform
//! `[batch, time, features]` batches the autoencoder expects. Reading and
//! caching spectrograms is left to the caller.

use crate::error::{ModelError, Result};
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

/// Dynamic range, in decibels, of the spectrograms fed to the model.
pub const DB_RANGE: f32 = 80.0;

/// `[freq, time]` spectrogram to `[time, freq]` frame sequence.
pub fn frames_from_spectrogram<B: Backend>(spectrogram: Tensor<B, 2>) -> Tensor<B, 2> {
    spectrogram.swap_dims(0, 1)
}

/// Truncate or zero-pad (at the end) a `[time, features]` sequence to `length` frames.
pub fn limit_length<B: Backend>(sequence: Tensor<B, 2>, length: usize) -> Tensor<B, 2> {
    let [time, features] = sequence.dims();

    if time >= length {
        sequence.narrow(0, 0, length)
    } else {
        let padding = Tensor::zeros([length - time, features], &sequence.device());
        Tensor::cat(vec![sequence, padding], 0)
    }
}

/// Divide every value by `divisor`; use [`DB_RANGE`] for decibel spectrograms.
pub fn scale<B: Backend, const D: usize>(x: Tensor<B, D>, divisor: f32) -> Tensor<B, D> {
    x / divisor
}

/// Limit every sequence to `length` frames and stack them into one batch.
///
/// # Errors
/// [`ModelError::EmptyBatch`] for no sequences, [`ModelError::EmptySequence`]
/// for `length == 0`, [`ModelError::FeatureMismatch`] when feature widths differ.
pub fn collate<B: Backend>(sequences: Vec<Tensor<B, 2>>, length: usize) -> Result<Tensor<B, 3>> {
    let Some(first) = sequences.first() else {
        return Err(ModelError::EmptyBatch);
    };
    if length == 0 {
        return Err(ModelError::EmptySequence);
    }

    let [_, features] = first.dims();
    if let Some(other) = sequences.iter().find(|s| s.dims()[1] != features) {
        return Err(ModelError::FeatureMismatch {
            expected: features,
            got: other.dims()[1],
        });
    }

    let limited = sequences
        .into_iter()
        .map(|sequence| limit_length(sequence, length))
        .collect();

    Ok(Tensor::stack(limited, 0))
}
