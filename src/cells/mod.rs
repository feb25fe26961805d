//! # Recurrent Cells
//!
//! Single-timestep cells. The sequence layers in [`crate::rnn`] drive them
//! across the time dimension.
//!
//! ## Tensor Shapes
//!
//! | Tensor | Shape | Description |
//! |--------|-------|-------------|
//! | `input` | `[batch, input_size]` | Input features |
//! | `hidden_state` | `[batch, hidden_size]` | Previous hidden state |
//! | `cell_state` | `[batch, hidden_size]` | Previous cell memory |
//!
//! ## Example
//!
//! ```rust
//! use burn::backend::NdArray;
//! use burn::tensor::Tensor;
//! use rand::{rngs::StdRng, SeedableRng};
//! use seqae::cells::LSTMCell;
//!
//! type Backend = NdArray<f32>;
//! let device = Default::default();
//!
//! let cell = LSTMCell::<Backend>::new(16, 32, &mut StdRng::seed_from_u64(0), &device);
//! let input = Tensor::<Backend, 2>::zeros([4, 16], &device);
//!
//! let (h, c) = cell.forward(input, cell.zero_state(4, &device));
//! assert_eq!(h.dims(), [4, 32]);
//! assert_eq!(c.dims(), [4, 32]);
//! ```

pub mod lstm_cell;

pub use lstm_cell::LSTMCell;
