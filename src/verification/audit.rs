//! Aggregation history.
//!
//! Records one entry per aggregation round so drift and participation can be
//! analysed after the fact.

use serde::{Deserialize, Serialize};

use crate::aggregators::Denominator;

/// Metadata for a single aggregation round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AggregationAuditEntry {
    /// Round number (0-indexed).
    pub round: usize,
    /// Ledger length when the round was computed, genesis included.
    pub ledger_len: usize,
    /// Number of payload-bearing blocks folded into the aggregate.
    pub n_payloads: usize,
    /// Denominator used for averaging.
    pub denominator: Denominator,
    /// Largest per-weight change relative to the previous global model.
    pub max_drift: f32,
    /// Whether the benchmark gate passed.
    pub within_tolerance: bool,
}

/// Append-only audit log of aggregation rounds.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AuditLog {
    entries: Vec<AggregationAuditEntry>,
}

impl AuditLog {
    /// Create a new, empty audit log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry to the log.
    pub fn push(&mut self, entry: AggregationAuditEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[AggregationAuditEntry] {
        &self.entries
    }

    /// Number of recorded rounds.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rounds that tripped the drift gate.
    pub fn flagged(&self) -> impl Iterator<Item = &AggregationAuditEntry> {
        self.entries.iter().filter(|e| !e.within_tolerance)
    }

    /// Serialize the audit log to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(round: usize, within_tolerance: bool) -> AggregationAuditEntry {
        AggregationAuditEntry {
            round,
            ledger_len: round + 2,
            n_payloads: round + 1,
            denominator: Denominator::LedgerLength,
            max_drift: if within_tolerance { 0.05 } else { 0.3 },
            within_tolerance,
        }
    }

    #[test]
    fn test_audit_log_push_and_len() {
        let mut log = AuditLog::new();
        assert!(log.is_empty());

        log.push(entry(0, true));

        assert_eq!(log.len(), 1);
        assert!(!log.is_empty());
        assert_eq!(log.entries()[0].round, 0);
        assert_eq!(log.entries()[0].n_payloads, 1);
    }

    #[test]
    fn test_flagged_rounds() {
        let mut log = AuditLog::new();
        for i in 0..5 {
            log.push(entry(i, i % 2 == 0));
        }
        let flagged: Vec<usize> = log.flagged().map(|e| e.round).collect();
        assert_eq!(flagged, vec![1, 3]);
    }

    #[test]
    fn test_audit_log_json() {
        let mut log = AuditLog::new();
        log.push(entry(3, false));
        let json = log.to_json().unwrap();
        let restored: AuditLog = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.entries(), log.entries());
    }
}
