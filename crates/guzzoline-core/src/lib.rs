//! guzzoline-core - Usage-cost accounting and progress roll-ups
//!
//! The numeric core behind the Gas Town fleet dashboard: converts polecat
//! token telemetry into cent-denominated cost breakdowns, folds them into
//! worker/rig/convoy totals, and rolls hierarchical bead state up into epic
//! progress. Everything here is a pure, synchronous transformation over an
//! already-parsed snapshot; fetching, serialization, and rendering live
//! with the callers.

pub mod beads;
pub mod error;
pub mod format;
pub mod models;
pub mod pricing;
pub mod rollup;

pub use beads::{
    calculate_epic_progress, classify, group_by_convoy, progress_by_epic, BeadKind, BeadStatus,
    ConvoyGroup, EpicProgress,
};
pub use error::{AuditError, AuditReport, CoreError};
pub use format::{format_cost, format_tokens};
pub use models::{Bead, CostBreakdown, FleetUsage, TokenCounts, UsageRecord};
pub use pricing::{calculate_cost, calculate_cost_for_model, get_model_pricing, ModelPricing};
pub use rollup::{
    cost_per_token, estimate_cost, rollup_fleet, sum_cost_breakdowns, sum_token_counts,
    FleetRollup, UsageBucket,
};
