//! Data models for tracker snapshots and accounting outputs

pub mod bead;
pub mod usage;

pub use bead::Bead;
pub use usage::{CostBreakdown, FleetUsage, TokenCounts, UsageRecord};
