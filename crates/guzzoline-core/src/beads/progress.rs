//! Epic progress roll-ups
//!
//! Counts an epic's children into five status buckets and derives a
//! completion percentage. An unknown status is a fault, not a skip: a
//! silently dropped child would under-count the epic on the dashboard.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{AuditReport, CoreError};
use crate::models::Bead;

/// Recognized bead statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BeadStatus {
    Open,
    InProgress,
    /// A polecat is actively holding the bead; counts as in-progress
    Hooked,
    Blocked,
    Deferred,
    Closed,
}

impl BeadStatus {
    /// Parse a raw status string from the tracker
    pub fn parse(status: &str) -> Result<Self, CoreError> {
        match status.to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "in_progress" => Ok(Self::InProgress),
            "hooked" => Ok(Self::Hooked),
            "blocked" => Ok(Self::Blocked),
            "deferred" => Ok(Self::Deferred),
            "closed" => Ok(Self::Closed),
            _ => Err(CoreError::UnknownStatus {
                status: status.to_string(),
            }),
        }
    }
}

/// Roll-up of an epic's children by status bucket
///
/// The five bucket counts always sum to `total`, and `percent_complete` is
/// `round(closed / total * 100)`, or 0 for an empty epic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpicProgress {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub blocked: usize,
    pub deferred: usize,
    pub closed: usize,
    pub percent_complete: u8,
}

impl EpicProgress {
    fn count(&mut self, status: BeadStatus) {
        self.total += 1;
        match status {
            BeadStatus::Open => self.open += 1,
            BeadStatus::InProgress | BeadStatus::Hooked => self.in_progress += 1,
            BeadStatus::Blocked => self.blocked += 1,
            BeadStatus::Deferred => self.deferred += 1,
            BeadStatus::Closed => self.closed += 1,
        }
        self.percent_complete = percent(self.closed, self.total);
    }
}

fn percent(closed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (closed as f64 / total as f64 * 100.0).round() as u8
}

/// Roll up one epic's children
///
/// An empty child list yields the all-zero roll-up with 0 percent.
///
/// # Errors
///
/// `CoreError::UnknownStatus` on the first child whose status falls
/// outside the recognized set.
pub fn calculate_epic_progress(children: &[Bead]) -> Result<EpicProgress, CoreError> {
    let mut progress = EpicProgress::default();
    for child in children {
        progress.count(BeadStatus::parse(&child.status)?);
    }
    Ok(progress)
}

/// Roll up progress for every epic in a snapshot, keyed by parent id
///
/// Beads without a parent are not children of anything and are ignored.
/// Children with unrecognized statuses are excluded from their epic's
/// counts and reported by bead id; the batch never aborts on one bad
/// record, so a single mis-entered status cannot blank out a fleet-wide
/// progress view.
pub fn progress_by_epic(beads: &[Bead]) -> (BTreeMap<String, EpicProgress>, AuditReport) {
    let mut by_epic: BTreeMap<String, EpicProgress> = BTreeMap::new();
    let mut report = AuditReport::new();

    for bead in beads {
        let Some(parent) = bead.parent.as_deref() else {
            continue;
        };
        match BeadStatus::parse(&bead.status) {
            Ok(status) => {
                by_epic.entry(parent.to_string()).or_default().count(status);
                report.record_ok();
            }
            Err(err) => report.record_failure(&bead.id, &err),
        }
    }

    (by_epic, report)
}
