//! Distance computations between weight vectors.
//!
//! Used by benchmarking and the aggregation audit log. Compares the common
//! prefix when lengths differ; callers that care about length mismatch check
//! it first.

/// L∞ (Chebyshev) distance: the largest per-coordinate absolute difference.
pub fn linf_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0f32, f32::max)
}
