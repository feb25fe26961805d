//! Parameter snapshots
//!
//! A snapshot holds the weights of an [`Autoencoder`] and nothing else. The
//! architecture values live in an [`AutoencoderConfig`] that the caller keeps
//! alongside; loading rebuilds the model from that config, restores the
//! weights into it and checks every parameter shape.
//!
//! ```rust
//! use burn::backend::NdArray;
//! use seqae::model::AutoencoderConfig;
//! use seqae::snapshot;
//!
//! type Backend = NdArray<f32>;
//! let device = Default::default();
//!
//! let config = AutoencoderConfig::new(8, 4, 2).with_seed(Some(3));
//! let model = config.init::<Backend>(&device).unwrap();
//!
//! let bytes = snapshot::to_bytes(model).unwrap();
//! let restored = snapshot::from_bytes::<Backend>(&config, bytes, &device).unwrap();
//! assert_eq!(restored.encoding_size(), 2);
//! ```

use crate::error::{ModelError, Result};
use crate::model::autoencoder::AutoencoderRecord;
use crate::model::{Autoencoder, AutoencoderConfig};
use burn::config::Config;
use burn::module::Module;
use burn::record::{BinBytesRecorder, FullPrecisionSettings, NamedMpkFileRecorder, Recorder};
use burn::tensor::backend::Backend;
use std::path::{Path, PathBuf};

/// File name of the config side-car inside a bundle directory.
pub const CONFIG_FILE: &str = "config.json";
/// File stem of the weights inside a bundle directory (the recorder adds `.mpk`).
pub const WEIGHTS_FILE: &str = "model";

/// Serialise the model weights to an in-memory blob.
pub fn to_bytes<B: Backend>(model: Autoencoder<B>) -> Result<Vec<u8>> {
    let recorder = BinBytesRecorder::<FullPrecisionSettings>::default();
    let bytes = recorder.record(model.into_record(), ())?;

    tracing::info!(bytes = bytes.len(), "serialised autoencoder snapshot");
    Ok(bytes)
}

/// Rebuild a model from `config` and a blob produced by [`to_bytes`].
pub fn from_bytes<B: Backend>(
    config: &AutoencoderConfig,
    bytes: Vec<u8>,
    device: &B::Device,
) -> Result<Autoencoder<B>> {
    let recorder = BinBytesRecorder::<FullPrecisionSettings>::default();
    let record: AutoencoderRecord<B> = recorder.load(bytes, device)?;

    restore(config, record, device)
}

/// Write the model weights to `path` in named MessagePack format.
pub fn save_file<B: Backend>(model: Autoencoder<B>, path: impl Into<PathBuf>) -> Result<()> {
    let path = path.into();
    let recorder = NamedMpkFileRecorder::<FullPrecisionSettings>::new();
    model.save_file(path.clone(), &recorder)?;

    tracing::info!(path = %path.display(), "saved autoencoder snapshot");
    Ok(())
}

/// Rebuild a model from `config` and a file written by [`save_file`].
pub fn load_file<B: Backend>(
    config: &AutoencoderConfig,
    path: impl Into<PathBuf>,
    device: &B::Device,
) -> Result<Autoencoder<B>> {
    let path = path.into();
    let recorder = NamedMpkFileRecorder::<FullPrecisionSettings>::new();
    let record: AutoencoderRecord<B> = recorder.load(path.clone(), device)?;

    tracing::info!(path = %path.display(), "loaded autoencoder snapshot");
    restore(config, record, device)
}

/// Write `config.json` and the weights side by side into `dir`.
pub fn save_bundle<B: Backend>(
    model: Autoencoder<B>,
    config: &AutoencoderConfig,
    dir: impl AsRef<Path>,
) -> Result<()> {
    let dir = dir.as_ref();
    model.check_architecture(config)?;

    std::fs::create_dir_all(dir)?;
    config.save(dir.join(CONFIG_FILE))?;
    save_file(model, dir.join(WEIGHTS_FILE))
}

/// Restore a model and its config from a directory written by [`save_bundle`].
pub fn load_bundle<B: Backend>(
    dir: impl AsRef<Path>,
    device: &B::Device,
) -> Result<(Autoencoder<B>, AutoencoderConfig)> {
    let dir = dir.as_ref();
    let config = AutoencoderConfig::load(dir.join(CONFIG_FILE))
        .map_err(|err| ModelError::Config(format!("{}: {err:?}", dir.join(CONFIG_FILE).display())))?;

    let model = load_file(&config, dir.join(WEIGHTS_FILE), device)?;
    Ok((model, config))
}

/// Build from `config` and load `record` into it.
///
/// Burn asserts on a layer-count mismatch inside `load_record`, so the counts
/// are compared before loading; the weight shapes are checked afterwards.
fn restore<B: Backend>(
    config: &AutoencoderConfig,
    record: AutoencoderRecord<B>,
    device: &B::Device,
) -> Result<Autoencoder<B>> {
    let model = config.init::<B>(device)?;

    let expected_encoder = config.encoder_layers;
    let expected_decoder = config.encoder_layers - 1;
    let found_encoder = record.encoder.layers.len();
    let found_decoder = record.decoder.layers.len();
    if found_encoder != expected_encoder || found_decoder != expected_decoder {
        let err = ModelError::ArchitectureMismatch(format!(
            "snapshot has {found_encoder} encoder / {found_decoder} decoder recurrent layers, \
             config expects {expected_encoder} / {expected_decoder}"
        ));
        tracing::warn!(error = %err, "snapshot does not fit the supplied config");
        return Err(err);
    }

    verified(model.load_record(record), config)
}

fn verified<B: Backend>(model: Autoencoder<B>, config: &AutoencoderConfig) -> Result<Autoencoder<B>> {
    if let Err(err) = model.check_architecture(config) {
        tracing::warn!(error = %err, "snapshot does not fit the supplied config");
        return Err(err);
    }
    Ok(model)
}
