//! Sequence decoder

use super::{check_sequence, check_stack};
use crate::error::{ModelError, Result};
use crate::init::seeded_linear;
use crate::rnn::Lstm;
use crate::schedule::decoder_schedule;
use burn::module::Module;
use burn::nn::Linear;
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;
use rand::Rng;

/// Stack of LSTM layers widening a repeated latent vector back to a sequence,
/// followed by a per-timestep projection to the output width.
///
/// With `num_layers` configured, the schedule has `num_layers` entries and only
/// the `num_layers - 1` transitions between them are recurrent. For a single
/// layer the projection reads the latent vector directly.
#[derive(Module, Debug)]
pub struct SequenceDecoder<B: Backend> {
    layers: Vec<Lstm<B>>,
    output_layer: Linear<B>,
    #[module(skip)]
    encoding_size: usize,
    #[module(skip)]
    output_size: usize,
}

impl<B: Backend> SequenceDecoder<B> {
    pub fn new<R: Rng + ?Sized>(
        output_size: usize,
        last_layer_size: usize,
        encoding_size: usize,
        num_layers: usize,
        rng: &mut R,
        device: &B::Device,
    ) -> Result<Self> {
        if output_size == 0 {
            return Err(ModelError::ZeroWidth {
                field: "output_size",
            });
        }
        let widths = decoder_schedule(encoding_size, last_layer_size, num_layers)?;

        let mut layers = Vec::with_capacity(num_layers - 1);
        for pair in widths.windows(2) {
            layers.push(Lstm::new(pair[0], pair[1], &mut *rng, device));
        }

        let projection_input = widths.last().copied().unwrap_or(encoding_size);
        let output_layer = seeded_linear(
            projection_input,
            output_size,
            projection_input,
            true,
            rng,
            device,
        );

        Ok(Self {
            layers,
            output_layer,
            encoding_size,
            output_size,
        })
    }

    pub fn encoding_size(&self) -> usize {
        self.encoding_size
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }

    /// Number of recurrent layers actually instantiated.
    pub fn num_recurrent_layers(&self) -> usize {
        self.layers.len()
    }

    /// Realised recurrent widths, starting at `encoding_size`.
    pub fn widths(&self) -> Vec<usize> {
        std::iter::once(self.encoding_size)
            .chain(self.layers.iter().map(Lstm::hidden_size))
            .collect()
    }

    /// Decode a repeated latent sequence.
    ///
    /// # Arguments
    /// * `x` - Shape `[batch, time, encoding_size]`
    ///
    /// # Returns
    /// Shape `[batch, time, output_size]`; every timestep is kept.
    pub fn forward(&self, x: Tensor<B, 3>) -> Result<Tensor<B, 3>> {
        check_sequence(&x, self.encoding_size)?;

        let mut x = x;
        for layer in &self.layers {
            let (output, _) = layer.forward(x);
            x = output;
        }

        Ok(self.output_layer.forward(x))
    }

    pub(crate) fn check_widths(&self, widths: &[usize]) -> Result<()> {
        check_stack("decoder", &self.layers, widths)?;

        let projection_input = widths.last().copied().unwrap_or(self.encoding_size);
        let expected = [projection_input, self.output_size];
        let actual = self.output_layer.weight.val().dims();
        if actual != expected {
            return Err(ModelError::ArchitectureMismatch(format!(
                "decoder projection: weights {actual:?}, expected {expected:?}"
            )));
        }
        if let Some(bias) = &self.output_layer.bias {
            let bias_dims = bias.val().dims();
            if bias_dims != [self.output_size] {
                return Err(ModelError::ArchitectureMismatch(format!(
                    "decoder projection: bias {bias_dims:?}, expected [{}]",
                    self.output_size
                )));
            }
        }
        Ok(())
    }
}
