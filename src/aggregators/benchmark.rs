//! Drift benchmarking between successive global models.
//!
//! A worst-case, per-weight gate: a single weight moving by more than the
//! tolerance fails the whole comparison.

use crate::math::norms::linf_distance;

/// Default per-weight drift tolerance.
pub const DEFAULT_DRIFT_TOLERANCE: f32 = 0.1;

/// Whether `candidate` stays within `tolerance` of `baseline` on every weight.
///
/// Returns `false` on a length mismatch.
pub fn benchmark(candidate: &[f32], baseline: &[f32], tolerance: f32) -> bool {
    if candidate.len() != baseline.len() {
        return false;
    }
    candidate
        .iter()
        .zip(baseline.iter())
        .all(|(c, b)| (c - b).abs() <= tolerance)
}

/// Largest per-weight change between `candidate` and `baseline`.
///
/// Infinite on a length mismatch.
pub fn max_drift(candidate: &[f32], baseline: &[f32]) -> f32 {
    if candidate.len() != baseline.len() {
        return f32::INFINITY;
    }
    linf_distance(candidate, baseline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_passes() {
        let model = vec![0.3f32; 10];
        assert!(benchmark(&model, &model, DEFAULT_DRIFT_TOLERANCE));
    }

    #[test]
    fn test_single_weight_drift_fails() {
        let baseline = vec![0.5f32; 10];
        let mut candidate = baseline.clone();
        candidate[7] += 0.11;
        assert!(!benchmark(&candidate, &baseline, DEFAULT_DRIFT_TOLERANCE));
    }

    #[test]
    fn test_small_drift_everywhere_passes() {
        let baseline = vec![0.5f32; 10];
        let candidate = vec![0.55f32; 10];
        assert!(benchmark(&candidate, &baseline, DEFAULT_DRIFT_TOLERANCE));
    }

    #[test]
    fn test_length_mismatch_fails() {
        assert!(!benchmark(&[0.5, 0.5], &[0.5], DEFAULT_DRIFT_TOLERANCE));
        assert_eq!(max_drift(&[0.5, 0.5], &[0.5]), f32::INFINITY);
    }

    #[test]
    fn test_max_drift() {
        assert!((max_drift(&[0.1, 0.9], &[0.2, 0.5]) - 0.4).abs() < 1e-6);
    }
}
