//! Save and Load Example
//!
//! Snapshots hold weights only; the config travels next to them.

use burn::backend::NdArray;
use burn::tensor::Tensor;
use seqae::model::AutoencoderConfig;
use seqae::snapshot;

type Backend = NdArray<f32>;

fn main() -> seqae::Result<()> {
    tracing_subscriber::fmt().with_env_filter("seqae=info").init();

    let device = Default::default();
    let config = AutoencoderConfig::new(32, 16, 4)
        .with_encoder_layers(3)
        .with_seed(Some(12345));
    let model = config.init::<Backend>(&device)?;

    let input = Tensor::<Backend, 3>::ones([1, 10, 32], &device);
    let before = model.embed(input.clone())?;

    // In memory
    let bytes = snapshot::to_bytes(model.clone())?;
    let from_blob = snapshot::from_bytes::<Backend>(&config, bytes, &device)?;

    // On disk, with the config side-car
    let dir = std::env::temp_dir().join("seqae-save-load");
    snapshot::save_bundle(from_blob, &config, &dir)?;
    let (restored, restored_config) = snapshot::load_bundle::<Backend>(&dir, &device)?;

    let after = restored.embed(input)?;
    let drift: f32 = (before - after).abs().max().into_scalar();

    tracing::info!(
        dir = %dir.display(),
        layers = restored_config.encoder_layers,
        drift,
        "restored model"
    );

    // A config that does not match the weights is refused
    let wrong = AutoencoderConfig::new(32, 16, 8).with_encoder_layers(3);
    if let Err(err) = snapshot::load_file::<Backend>(&wrong, dir.join(snapshot::WEIGHTS_FILE), &device) {
        tracing::info!(%err, "mismatched config rejected");
    }

    Ok(())
}
