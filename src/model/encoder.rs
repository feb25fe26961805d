//! Sequence encoder
//!
//! Narrows a `[batch, time, input_size]` sequence through a stack of LSTM
//! layers and keeps only the final timestep of the last layer.

use super::{check_sequence, check_stack};
use crate::error::Result;
use crate::rnn::Lstm;
use crate::schedule::encoder_schedule;
use burn::module::Module;
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;
use rand::Rng;

/// Stack of LSTM layers reducing each sequence to one latent vector.
#[derive(Module, Debug)]
pub struct SequenceEncoder<B: Backend> {
    layers: Vec<Lstm<B>>,
    #[module(skip)]
    input_size: usize,
    #[module(skip)]
    encoding_size: usize,
}

impl<B: Backend> SequenceEncoder<B> {
    /// Create an encoder with `num_layers` LSTM layers.
    ///
    /// Layer `i` maps `widths[i]` to `widths[i + 1]` where `widths` is
    /// [`encoder_schedule`]`(input_size, first_layer_size, encoding_size, num_layers)`.
    pub fn new<R: Rng + ?Sized>(
        input_size: usize,
        first_layer_size: usize,
        encoding_size: usize,
        num_layers: usize,
        rng: &mut R,
        device: &B::Device,
    ) -> Result<Self> {
        let widths = encoder_schedule(input_size, first_layer_size, encoding_size, num_layers)?;

        let mut layers = Vec::with_capacity(num_layers);
        for pair in widths.windows(2) {
            layers.push(Lstm::new(pair[0], pair[1], &mut *rng, device));
        }

        Ok(Self {
            layers,
            input_size,
            encoding_size,
        })
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn encoding_size(&self) -> usize {
        self.encoding_size
    }

    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Realised widths: the input width then each layer's hidden width.
    pub fn widths(&self) -> Vec<usize> {
        std::iter::once(self.input_size)
            .chain(self.layers.iter().map(Lstm::hidden_size))
            .collect()
    }

    /// Encode a batch.
    ///
    /// # Arguments
    /// * `x` - Input tensor of shape `[batch, time, input_size]`
    ///
    /// # Returns
    /// Latent tensor of shape `[batch, 1, encoding_size]`, whatever `time` is.
    pub fn forward(&self, x: Tensor<B, 3>) -> Result<Tensor<B, 3>> {
        check_sequence(&x, self.input_size)?;
        let [_, seq_len, _] = x.dims();

        let mut x = x;
        for layer in &self.layers {
            let (output, _) = layer.forward(x);
            x = output;
        }

        Ok(x.narrow(1, seq_len - 1, 1))
    }

    pub(crate) fn check_widths(&self, widths: &[usize]) -> Result<()> {
        check_stack("encoder", &self.layers, widths)
    }
}
