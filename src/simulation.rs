//! Stand-in for participant-side local training.
//!
//! Real training is out of scope; a participant's contribution is an opaque
//! vector of the model's dimension.

use rand::Rng;

/// Produces opaque model updates for simulated participants.
#[derive(Clone, Debug)]
pub struct LocalTrainer {
    dim: usize,
}

impl LocalTrainer {
    /// Trainer producing `dim`-weight updates.
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    /// Simulate a training pass for `participant_id`.
    ///
    /// Returns `dim` values uniform in `[0, 1]`.
    pub fn prepare_model_update(&self, participant_id: &str) -> Vec<f32> {
        tracing::trace!(participant_id, dim = self.dim, "Local training");
        let mut rng = rand::thread_rng();
        (0..self.dim).map(|_| rng.gen_range(0.0..=1.0)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_shape() {
        let trainer = LocalTrainer::new(10);
        let update = trainer.prepare_model_update("Dana");
        assert_eq!(update.len(), 10);
        assert!(update.iter().all(|w| (0.0..=1.0).contains(w)));
    }
}
