use fruitsight::engine::{Classifier, Tensor};
use fruitsight::{Error, Result};

/// Canned engine: returns a fixed score vector for every input, after
/// checking the input tensor has the shape the real model expects.
pub struct MockEngine {
    pub scores: Vec<f32>,
}

impl Classifier for MockEngine {
    fn run(&self, input: Tensor) -> Result<Vec<f32>> {
        assert_eq!(input.shape(), &[1, 200, 200, 3]);
        Ok(self.scores.clone())
    }

    fn output_len(&self) -> usize {
        self.scores.len()
    }
}

/// Engine whose every invoke fails, for exercising the 500 path.
pub struct FailingEngine;

impl Classifier for FailingEngine {
    fn run(&self, _input: Tensor) -> Result<Vec<f32>> {
        Err(Error::model("mock inference failure"))
    }

    fn output_len(&self) -> usize {
        6
    }
}
