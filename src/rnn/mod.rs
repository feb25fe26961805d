//! # RNN Layers for Sequence Processing
//!
//! Layers that run a cell over every timestep of a batch-first sequence.
//!
//! | Input | Output | Final state |
//! |-------|--------|-------------|
//! | `[batch, seq_len, input_size]` | `[batch, seq_len, hidden_size]` | `([batch, hidden_size], [batch, hidden_size])` |
//!
//! State is zeroed at the start of every call. Keeping only the last timestep
//! (as the encoder does) is the caller's job:
//!
//! ```rust
//! use burn::backend::NdArray;
//! use burn::tensor::Tensor;
//! use rand::{rngs::StdRng, SeedableRng};
//! use seqae::rnn::Lstm;
//!
//! type Backend = NdArray<f32>;
//! let device = Default::default();
//!
//! let lstm = Lstm::<Backend>::new(16, 8, &mut StdRng::seed_from_u64(0), &device);
//! let (output, _) = lstm.forward(Tensor::zeros([4, 10, 16], &device));
//!
//! assert_eq!(output.dims(), [4, 10, 8]);
//! assert_eq!(output.narrow(1, 9, 1).dims(), [4, 1, 8]);
//! ```

pub mod lstm;

pub use lstm::Lstm;
