//! Bead classification, convoy grouping, and progress roll-ups

pub mod classify;
pub mod convoy;
pub mod progress;

pub use classify::{classify, is_stale, is_stale_at, stale_threshold, BeadKind};
pub use convoy::{group_by_convoy, ConvoyGroup};
pub use progress::{calculate_epic_progress, progress_by_epic, BeadStatus, EpicProgress};
