//! Token usage and cost records
//!
//! [`TokenCounts`] is the single optional-to-zero normalization point:
//! absent wire fields default to zero at deserialization and nothing
//! downstream re-checks for missing values. Counts are signed so that
//! negative telemetry can be rejected as `InvalidInput` by the cost
//! calculator instead of disappearing at parse time.

use serde::{Deserialize, Serialize};

/// One token-usage observation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCounts {
    #[serde(default)]
    pub input: i64,
    #[serde(default)]
    pub output: i64,
    #[serde(default)]
    pub cache_read: i64,
}

impl TokenCounts {
    pub const ZERO: Self = Self {
        input: 0,
        output: 0,
        cache_read: 0,
    };

    pub fn new(input: i64, output: i64, cache_read: i64) -> Self {
        Self {
            input,
            output,
            cache_read,
        }
    }

    /// Total tokens across all classes
    pub fn total(&self) -> i64 {
        self.input + self.output + self.cache_read
    }

    /// Field-wise sum
    pub fn add(&self, other: &Self) -> Self {
        Self {
            input: self.input + other.input,
            output: self.output + other.output,
            cache_read: self.cache_read + other.cache_read,
        }
    }

    /// Name of the first negative field, if any
    pub(crate) fn negative_field(&self) -> Option<&'static str> {
        if self.input < 0 {
            Some("input")
        } else if self.output < 0 {
            Some("output")
        } else if self.cache_read < 0 {
            Some("cacheRead")
        } else {
            None
        }
    }
}

/// Cost of one usage observation, in integer cents
///
/// Components are rounded to cents individually and `total_cost` is the sum
/// of the rounded components, so a displayed breakdown always reconciles
/// with the displayed total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub input_cost: i64,
    pub output_cost: i64,
    pub cache_read_cost: i64,
    pub total_cost: i64,
}

impl CostBreakdown {
    pub const ZERO: Self = Self {
        input_cost: 0,
        output_cost: 0,
        cache_read_cost: 0,
        total_cost: 0,
    };

    /// Field-wise sum
    pub fn add(&self, other: &Self) -> Self {
        Self {
            input_cost: self.input_cost + other.input_cost,
            output_cost: self.output_cost + other.output_cost,
            cache_read_cost: self.cache_read_cost + other.cache_read_cost,
            total_cost: self.total_cost + other.total_cost,
        }
    }
}

/// One telemetry observation attributed to a worker
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRecord {
    pub polecat: String,
    pub rig: String,
    #[serde(default)]
    pub convoy: Option<String>,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub tokens: TokenCounts,
}

/// Aggregated usage for one fold bucket (a polecat, rig, convoy, or the fleet)
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetUsage {
    pub tokens: TokenCounts,
    pub cost: CostBreakdown,
    pub records: usize,
}
