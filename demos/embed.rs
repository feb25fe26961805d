//! Embedding Extraction Example
//!
//! Builds an autoencoder, prepares a batch of synthetic spectrograms of
//! different lengths and extracts one latent vector per clip.
//!
//! Run with `RUST_LOG=seqae=debug cargo run --example embed` to see the
//! layer schedules.

use burn::backend::NdArray;
use burn::tensor::{Distribution, Tensor};
use seqae::prelude::*;
use seqae::prep::{collate, frames_from_spectrogram, scale, DB_RANGE};
use tracing_subscriber::EnvFilter;

type Backend = NdArray<f32>;

fn main() -> seqae::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let device = Default::default();

    let n_mels = 128;
    let config = AutoencoderConfig::new(n_mels, 64, 16)
        .with_encoder_layers(2)
        .with_seed(Some(100));
    let model = config.init::<Backend>(&device)?;

    tracing::info!(
        encoder = ?model.encoder_widths(),
        decoder = ?model.decoder_widths(),
        "model ready"
    );

    // Spectrograms arrive as [freq, time] in decibels, -80..0
    let clips: Vec<Tensor<Backend, 2>> = [35, 50, 72]
        .into_iter()
        .map(|frames| {
            let spec = Tensor::random([n_mels, frames], Distribution::Uniform(-80.0, 0.0), &device);
            scale(frames_from_spectrogram(spec), DB_RANGE)
        })
        .collect();

    let batch = collate(clips, 50)?;
    tracing::info!(shape = ?batch.dims(), "collated batch");

    let embeddings = model.embed(batch.clone())?;
    let reconstruction = model.forward(batch.clone())?;
    let error: f32 = (reconstruction - batch).powf_scalar(2.0).mean().into_scalar();

    tracing::info!(shape = ?embeddings.dims(), "extracted embeddings");
    tracing::info!(mse = error, "reconstruction error of the untrained model");

    Ok(())
}
