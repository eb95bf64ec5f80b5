//! Ledger-wide federated averaging.
//!
//! Sums every payload on the ledger coordinate-wise and divides by a
//! configurable [`Denominator`]. The default divides by the full ledger
//! length (genesis and payload-free blocks included), which biases the
//! aggregate toward zero; [`Denominator::PayloadCount`] gives the plain mean.

use ndarray::Array1;
use rayon::prelude::*;

use super::Denominator;
use crate::error::{LedgerFlError, Result};
use crate::ledger::Ledger;

/// Aggregate all model updates on `ledger` into a `dim`-weight model.
///
/// Blocks without a payload contribute nothing to the sum. Every payload
/// must have exactly `dim` weights.
///
/// # Arguments
///
/// * `ledger` - Ledger snapshot to fold
/// * `dim` - Global model dimension
/// * `denominator` - What to divide the coordinate sums by
pub fn aggregate(ledger: &Ledger, dim: usize, denominator: Denominator) -> Result<Array1<f32>> {
    if dim == 0 {
        return Err(LedgerFlError::EmptyModel);
    }

    let mut updates: Vec<&[f32]> = Vec::new();
    for (block, payload) in ledger.payloads() {
        if payload.model_update.len() != dim {
            return Err(LedgerFlError::DimensionMismatch {
                block: block.index,
                expected: dim,
                actual: payload.model_update.len(),
            });
        }
        updates.push(&payload.model_update);
    }

    let divisor = match denominator {
        Denominator::LedgerLength => ledger.len(),
        Denominator::PayloadCount => updates.len(),
    };
    if divisor == 0 {
        return Ok(Array1::zeros(dim));
    }
    let divisor = divisor as f32;

    let result_vec: Vec<f32> = (0..dim)
        .into_par_iter()
        .map(|j| updates.iter().map(|update| update[j]).sum::<f32>() / divisor)
        .collect();

    Ok(Array1::from_vec(result_vec))
}
