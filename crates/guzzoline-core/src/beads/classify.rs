//! Bead kind classification and staleness
//!
//! Two closed kind sets: work items (task, bug, feature, epic) and
//! communication records (mail, handoff, message, convoy). Anything else
//! is a data-quality fault surfaced to the caller; silently re-routing an
//! unknown record would corrupt the dashboard's counts.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::error::CoreError;

/// Communication beads untouched this long auto-collapse in the UI
pub const STALE_THRESHOLD_DAYS: i64 = 7;

/// Default staleness threshold (7 days)
pub fn stale_threshold() -> Duration {
    Duration::days(STALE_THRESHOLD_DAYS)
}

/// Recognized bead kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BeadKind {
    Task,
    Bug,
    Feature,
    Epic,
    Mail,
    Handoff,
    Message,
    Convoy,
}

impl BeadKind {
    /// True for kinds that represent tracked work
    pub fn is_work_item(self) -> bool {
        matches!(self, Self::Task | Self::Bug | Self::Feature | Self::Epic)
    }

    /// True for mail-like records that group and collapse separately
    pub fn is_communication(self) -> bool {
        !self.is_work_item()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Bug => "bug",
            Self::Feature => "feature",
            Self::Epic => "epic",
            Self::Mail => "mail",
            Self::Handoff => "handoff",
            Self::Message => "message",
            Self::Convoy => "convoy",
        }
    }
}

/// Classify a raw kind string from the tracker
///
/// Case-insensitive. Unrecognized kinds are an error so callers can
/// surface a data-quality problem instead of mis-routing the record.
pub fn classify(kind: &str) -> Result<BeadKind, CoreError> {
    match kind.to_lowercase().as_str() {
        "task" => Ok(BeadKind::Task),
        "bug" => Ok(BeadKind::Bug),
        "feature" => Ok(BeadKind::Feature),
        "epic" => Ok(BeadKind::Epic),
        "mail" => Ok(BeadKind::Mail),
        "handoff" => Ok(BeadKind::Handoff),
        "message" => Ok(BeadKind::Message),
        "convoy" => Ok(BeadKind::Convoy),
        _ => Err(CoreError::UnknownKind {
            kind: kind.to_string(),
        }),
    }
}

/// Staleness check against an explicit clock
///
/// Monotonic in `now`: once a bead goes stale it stays stale as time
/// advances. Only used to flag communication beads for auto-collapse;
/// nothing is ever deleted.
pub fn is_stale_at(updated_at: DateTime<Utc>, now: DateTime<Utc>, threshold: Duration) -> bool {
    now - updated_at > threshold
}

/// Staleness check against the current time
pub fn is_stale(updated_at: DateTime<Utc>, threshold: Duration) -> bool {
    is_stale_at(updated_at, Utc::now(), threshold)
}
