//! The shared global model.

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerFlError, Result};

/// Ordered model weights. Replaced wholesale by each aggregation round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlobalModel {
    weights: Vec<f32>,
}

impl GlobalModel {
    /// Random initial model: `dim` weights uniform in `[0, 1]`.
    pub fn random(dim: usize) -> Result<Self> {
        if dim == 0 {
            return Err(LedgerFlError::EmptyModel);
        }
        let mut rng = rand::thread_rng();
        Ok(Self {
            weights: (0..dim).map(|_| rng.gen_range(0.0..=1.0)).collect(),
        })
    }

    /// Wrap an existing weight vector.
    pub fn from_weights(weights: Vec<f32>) -> Result<Self> {
        if weights.is_empty() {
            return Err(LedgerFlError::EmptyModel);
        }
        Ok(Self { weights })
    }

    /// The weights as a slice.
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Number of weights.
    pub fn dim(&self) -> usize {
        self.weights.len()
    }

    /// Copy of the weights as an ndarray vector.
    pub fn to_array(&self) -> Array1<f32> {
        Array1::from_vec(self.weights.clone())
    }
}

impl From<Array1<f32>> for GlobalModel {
    fn from(weights: Array1<f32>) -> Self {
        Self {
            weights: weights.to_vec(),
        }
    }
}
