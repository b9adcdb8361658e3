//! Bead records from the tracker CLI snapshot
//!
//! Beads arrive as already-parsed JSON with camelCase fields. Kind and
//! status stay raw strings here; the classifier and progress stages parse
//! them and fail loudly on values outside the recognized sets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single issue-tracker record (work item or communication record)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bead {
    pub id: String,

    /// Raw kind string ("task", "bug", "mail", ...)
    #[serde(rename = "type")]
    pub kind: String,

    /// Raw status string ("open", "in_progress", ...)
    #[serde(default)]
    pub status: String,

    /// Parent reference (convoy or epic id); a reference, not ownership
    #[serde(default)]
    pub parent: Option<String>,

    /// Ids this bead depends on
    #[serde(default)]
    pub depends_on: BTreeSet<String>,

    pub updated_at: DateTime<Utc>,
}

impl Bead {
    /// Grouping key for convoy partitioning
    pub fn convoy_key(&self) -> Option<&str> {
        self.parent.as_deref()
    }
}
