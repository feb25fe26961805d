//! Encoder + decoder composition

use super::{AutoencoderConfig, SequenceDecoder, SequenceEncoder};
use crate::error::{ModelError, Result};
use burn::module::Module;
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

/// LSTM sequence autoencoder.
///
/// Owns one [`SequenceEncoder`] and one [`SequenceDecoder`]. The decoder
/// mirrors the encoder's schedule and reconstructs the input feature width.
/// Build one with [`AutoencoderConfig::init`].
#[derive(Module, Debug)]
pub struct Autoencoder<B: Backend> {
    encoder: SequenceEncoder<B>,
    decoder: SequenceDecoder<B>,
    #[module(skip)]
    first_layer_size: usize,
    #[module(skip)]
    encoder_layers: usize,
}

impl<B: Backend> Autoencoder<B> {
    pub(crate) fn from_parts(
        encoder: SequenceEncoder<B>,
        decoder: SequenceDecoder<B>,
        first_layer_size: usize,
        encoder_layers: usize,
    ) -> Self {
        Self {
            encoder,
            decoder,
            first_layer_size,
            encoder_layers,
        }
    }

    pub fn encoder(&self) -> &SequenceEncoder<B> {
        &self.encoder
    }

    pub fn decoder(&self) -> &SequenceDecoder<B> {
        &self.decoder
    }

    pub fn input_size(&self) -> usize {
        self.encoder.input_size()
    }

    pub fn first_layer_size(&self) -> usize {
        self.first_layer_size
    }

    pub fn encoding_size(&self) -> usize {
        self.encoder.encoding_size()
    }

    pub fn encoder_layers(&self) -> usize {
        self.encoder_layers
    }

    pub fn encoder_widths(&self) -> Vec<usize> {
        self.encoder.widths()
    }

    pub fn decoder_widths(&self) -> Vec<usize> {
        self.decoder.widths()
    }

    /// Compress each sequence to its latent vector.
    ///
    /// `[batch, time, input_size]` -> `[batch, 1, encoding_size]`. This is the
    /// same computation [`forward`](Self::forward) runs before decoding.
    pub fn encode(&self, x: Tensor<B, 3>) -> Result<Tensor<B, 3>> {
        self.encoder.forward(x)
    }

    /// [`encode`](Self::encode) with the singleton time dimension dropped.
    ///
    /// `[batch, time, input_size]` -> `[batch, encoding_size]`
    pub fn embed(&self, x: Tensor<B, 3>) -> Result<Tensor<B, 2>> {
        Ok(self.encode(x)?.squeeze_dim(1))
    }

    /// Full reconstruction.
    ///
    /// The latent vector is repeated across the time length of `x` itself, so
    /// the output always has the shape of the input.
    pub fn forward(&self, x: Tensor<B, 3>) -> Result<Tensor<B, 3>> {
        let [batch, seq_len, _] = x.dims();
        tracing::trace!(batch, seq_len, "autoencoder forward");

        let latent = self.encode(x)?;
        let repeated = latent.repeat_dim(1, seq_len);
        self.decoder.forward(repeated)
    }

    /// Verify the owned parameters have exactly the shapes `config` describes.
    ///
    /// The size fields are not part of a snapshot record, so on a model just
    /// restored from `config` only the weight-shape checks can fail.
    pub fn check_architecture(&self, config: &AutoencoderConfig) -> Result<()> {
        config.validate()?;

        let scalars = [
            ("input_size", self.input_size(), config.input_size),
            ("first_layer_size", self.first_layer_size, config.first_layer_size),
            ("encoding_size", self.encoding_size(), config.encoding_size),
            ("encoder_layers", self.encoder_layers, config.encoder_layers),
            ("output_size", self.decoder.output_size(), config.input_size),
        ];
        for (field, actual, expected) in scalars {
            if actual != expected {
                return Err(ModelError::ArchitectureMismatch(format!(
                    "{field} is {actual}, config says {expected}"
                )));
            }
        }

        self.encoder.check_widths(&config.encoder_widths()?)?;
        self.decoder.check_widths(&config.decoder_widths()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray<f32>;

    fn config() -> AutoencoderConfig {
        AutoencoderConfig::new(10, 6, 2)
            .with_encoder_layers(2)
            .with_seed(Some(11))
    }

    #[test]
    fn test_accessors() {
        let device = Default::default();
        let model = config().init::<TestBackend>(&device).unwrap();

        assert_eq!(model.input_size(), 10);
        assert_eq!(model.first_layer_size(), 6);
        assert_eq!(model.encoding_size(), 2);
        assert_eq!(model.encoder_layers(), 2);
        assert_eq!(model.encoder_widths(), vec![10, 6, 2]);
        assert_eq!(model.decoder_widths(), vec![2, 6]);
    }

    #[test]
    fn test_embed_drops_time_dimension() {
        let device = Default::default();
        let model = config().init::<TestBackend>(&device).unwrap();
        let x = Tensor::<TestBackend, 3>::ones([3, 5, 10], &device);

        assert_eq!(model.embed(x).unwrap().dims(), [3, 2]);
    }

    #[test]
    fn test_architecture_matches_own_config() {
        let device = Default::default();
        let model = config().init::<TestBackend>(&device).unwrap();

        assert!(model.check_architecture(&config()).is_ok());
        assert!(model
            .check_architecture(&config().with_encoder_layers(3))
            .is_err());
    }
}
