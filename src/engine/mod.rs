use crate::{Error, Result};
use std::path::Path;
use tract_nnef::prelude::*;
use tracing::info;

pub use tract_nnef::prelude::Tensor;

/// Inference backend seam. The server only needs to feed one tensor in and
/// read one score vector out, so the whole engine sits behind this trait and
/// tests can substitute a canned implementation.
pub trait Classifier: Send + Sync {
    /// Run one inference pass and return the flattened output vector.
    fn run(&self, input: Tensor) -> Result<Vec<f32>>;

    /// Number of scores the model produces per input.
    fn output_len(&self) -> usize;
}

/// Tract-backed engine. Loads the NNEF artifact produced by
/// `fruitsight-convert` once and keeps the optimized execution plan alive for
/// the life of the process.
pub struct TractEngine {
    plan: TypedRunnableModel<TypedModel>,
    output_len: usize,
}

impl TractEngine {
    pub fn load(path: &Path) -> Result<Self> {
        let model = tract_nnef::nnef()
            .with_tract_core()
            .model_for_path(path)
            .map_err(|e| {
                Error::model(format!(
                    "failed to load model artifact {}: {e}",
                    path.display()
                ))
            })?;

        let model = model
            .into_optimized()
            .map_err(|e| Error::model(format!("failed to optimize model: {e}")))?;

        let output_len = model
            .output_fact(0)
            .map_err(|e| Error::model(format!("model has no output fact: {e}")))?
            .shape
            .as_concrete()
            .map(|dims| dims.iter().product())
            .ok_or_else(|| Error::model("model output shape is not fully determined"))?;

        let plan = model
            .into_runnable()
            .map_err(|e| Error::model(format!("failed to build execution plan: {e}")))?;

        info!(
            "Loaded model artifact {} ({} output classes)",
            path.display(),
            output_len
        );

        Ok(Self { plan, output_len })
    }
}

impl Classifier for TractEngine {
    fn run(&self, input: Tensor) -> Result<Vec<f32>> {
        let outputs = self
            .plan
            .run(tvec!(input.into()))
            .map_err(|e| Error::model(format!("inference failed: {e}")))?;

        let view = outputs[0]
            .to_array_view::<f32>()
            .map_err(|e| Error::model(format!("unexpected output dtype: {e}")))?;

        Ok(view.iter().copied().collect())
    }

    fn output_len(&self) -> usize {
        self.output_len
    }
}

/// Index of the maximum score, ties broken by first occurrence.
pub fn argmax(scores: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &score) in scores.iter().enumerate() {
        match best {
            None => best = Some((i, score)),
            Some((_, top)) if score > top => best = Some((i, score)),
            _ => {}
        }
    }
    best.map(|(i, _)| i)
}
