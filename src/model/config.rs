//! Autoencoder configuration

use super::{Autoencoder, SequenceDecoder, SequenceEncoder};
use crate::error::{self, ModelError};
use crate::init::rng_from_seed;
use crate::schedule::{decoder_schedule, encoder_schedule};
use burn::config::Config;
use burn::module::Module;
use burn::tensor::backend::Backend;
use rand::Rng;

/// Architecture of an [`Autoencoder`].
///
/// The first four fields fully determine the parameter shapes. They are not
/// part of a weight snapshot, so the same config must be supplied to load one.
#[derive(Config, Debug)]
pub struct AutoencoderConfig {
    /// Per-timestep feature width of the input sequences
    pub input_size: usize,
    /// Width of the first encoder layer (and last decoder layer)
    pub first_layer_size: usize,
    /// Width of the latent vector
    pub encoding_size: usize,
    /// Number of encoder layers; the decoder uses the same count
    #[config(default = 1)]
    pub encoder_layers: usize,
    /// Seed for weight initialisation, OS entropy when unset
    #[config(default = "None")]
    pub seed: Option<u64>,
}

impl AutoencoderConfig {
    /// Check the configuration describes a buildable network.
    pub fn validate(&self) -> error::Result<()> {
        if self.encoder_layers == 0 {
            return Err(ModelError::ZeroLayers);
        }
        for (field, value) in [
            ("input_size", self.input_size),
            ("first_layer_size", self.first_layer_size),
            ("encoding_size", self.encoding_size),
        ] {
            if value == 0 {
                return Err(ModelError::ZeroWidth { field });
            }
        }
        Ok(())
    }

    /// Encoder widths, `encoder_layers + 1` entries starting at `input_size`.
    pub fn encoder_widths(&self) -> error::Result<Vec<usize>> {
        encoder_schedule(
            self.input_size,
            self.first_layer_size,
            self.encoding_size,
            self.encoder_layers,
        )
    }

    /// Decoder recurrent widths, `encoder_layers` entries starting at `encoding_size`.
    pub fn decoder_widths(&self) -> error::Result<Vec<usize>> {
        decoder_schedule(self.encoding_size, self.first_layer_size, self.encoder_layers)
    }

    /// Build a model, seeding weights from [`seed`](Self::seed).
    pub fn init<B: Backend>(&self, device: &B::Device) -> error::Result<Autoencoder<B>> {
        let mut rng = rng_from_seed(self.seed);
        self.init_with_rng(&mut rng, device)
    }

    /// Build a model drawing every initial weight from `rng`.
    ///
    /// The encoder consumes the generator first, then the decoder.
    pub fn init_with_rng<B: Backend, R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        device: &B::Device,
    ) -> error::Result<Autoencoder<B>> {
        self.validate()?;

        let encoder = SequenceEncoder::new(
            self.input_size,
            self.first_layer_size,
            self.encoding_size,
            self.encoder_layers,
            rng,
            device,
        )?;
        let decoder = SequenceDecoder::new(
            self.input_size,
            self.first_layer_size,
            self.encoding_size,
            self.encoder_layers,
            rng,
            device,
        )?;

        let model = Autoencoder::from_parts(encoder, decoder, self.first_layer_size, self.encoder_layers);

        tracing::debug!(
            encoder = ?model.encoder_widths(),
            decoder = ?model.decoder_widths(),
            params = model.num_params(),
            "built autoencoder"
        );

        Ok(model)
    }
}
