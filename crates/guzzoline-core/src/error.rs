//! Error types for guzzoline-core
//!
//! The taxonomy is deliberately small: every fault is local and synchronous,
//! raised at the point of computation and never swallowed into a default
//! value. Batched folds report per-record failures through [`AuditReport`]
//! instead of aborting on the first bad record.

use thiserror::Error;

/// Core error type for accounting and roll-up operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Malformed input (negative token counts, bad timestamps)
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// Status value outside the recognized bucket set
    #[error("unknown bead status: {status:?}")]
    UnknownStatus { status: String },

    /// Bead type outside both classification sets
    #[error("unknown bead kind: {kind:?}")]
    UnknownKind { kind: String },
}

/// One record skipped during a batched fold
#[derive(Debug, Clone)]
pub struct AuditError {
    /// Identifier of the record that failed (bead id or polecat name)
    pub record_id: String,
    pub message: String,
}

/// Report of records skipped during a batched fold
///
/// Batched aggregations process what they can: a record that fails
/// classification or validation is excluded from the totals and listed
/// here, so one bad record never takes down a fleet-wide roll-up.
#[derive(Debug, Default)]
pub struct AuditReport {
    pub errors: Vec<AuditError>,
    pub records_processed: usize,
    pub records_failed: usize,
}

impl AuditReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a record that folded cleanly
    pub fn record_ok(&mut self) {
        self.records_processed += 1;
    }

    /// Record a skipped record with the error that excluded it
    pub fn record_failure(&mut self, record_id: impl Into<String>, error: &CoreError) {
        let record_id = record_id.into();
        tracing::warn!("Skipping record {}: {}", record_id, error);
        self.errors.push(AuditError {
            record_id,
            message: error.to_string(),
        });
        self.records_failed += 1;
    }

    /// Returns true if every record folded cleanly
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Merge another report into this one
    pub fn merge(&mut self, other: AuditReport) {
        self.errors.extend(other.errors);
        self.records_processed += other.records_processed;
        self.records_failed += other.records_failed;
    }
}
