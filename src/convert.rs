//! Offline model conversion: trained ONNX in, serving-ready NNEF artifact out.
//!
//! Runs once before the server is ever started; the server only ever sees the
//! artifact this module writes.

use crate::config::ModelConfig;
use crate::preprocess::{CHANNELS, INPUT_HEIGHT, INPUT_WIDTH};
use crate::{Error, Result};
use tract_onnx::prelude::*;
use tracing::info;

/// Convert the trained model at `config.source_path` into an optimized NNEF
/// tarball at `config.artifact_path`, overwriting any existing artifact. Any
/// failure aborts the conversion with no partial output beyond the
/// half-written destination file.
pub fn run(config: &ModelConfig) -> Result<()> {
    info!(
        "Converting {} -> {}",
        config.source_path, config.artifact_path
    );

    let model = tract_onnx::onnx()
        .model_for_path(&config.source_path)
        .map_err(|e| {
            Error::model(format!(
                "failed to load trained model {}: {e}",
                config.source_path
            ))
        })?
        .with_input_fact(
            0,
            f32::fact(&[1, INPUT_HEIGHT, INPUT_WIDTH, CHANNELS]).into(),
        )
        .map_err(|e| Error::model(format!("failed to pin input shape: {e}")))?
        .into_typed()
        .map_err(|e| Error::model(format!("failed to type model: {e}")))?
        .into_decluttered()
        .map_err(|e| Error::model(format!("failed to declutter model: {e}")))?;

    let file = std::fs::File::create(&config.artifact_path)?;
    tract_nnef::nnef()
        .with_tract_core()
        .write_to_tar(&model, file)
        .map_err(|e| Error::model(format!("failed to write artifact: {e}")))?;

    info!("Wrote model artifact to {}", config.artifact_path);
    Ok(())
}
