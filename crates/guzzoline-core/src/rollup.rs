//! Fleet-level usage roll-ups
//!
//! Folds per-call usage records into fleet, per-polecat, per-rig, and
//! per-convoy totals. The sums are field-wise and order-independent;
//! bucket listing order is first-seen so two runs over the same snapshot
//! render identically. Records that fail cost validation are skipped and
//! reported, never aborting the fold.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{AuditReport, CoreError};
use crate::models::{CostBreakdown, FleetUsage, TokenCounts, UsageRecord};
use crate::pricing::{self, ModelPricing};

/// Field-wise sum of token counts (identity: all-zero)
pub fn sum_token_counts<'a, I>(counts: I) -> TokenCounts
where
    I: IntoIterator<Item = &'a TokenCounts>,
{
    counts
        .into_iter()
        .fold(TokenCounts::ZERO, |acc, c| acc.add(c))
}

/// Field-wise sum of cost breakdowns (identity: all-zero)
pub fn sum_cost_breakdowns<'a, I>(costs: I) -> CostBreakdown
where
    I: IntoIterator<Item = &'a CostBreakdown>,
{
    costs
        .into_iter()
        .fold(CostBreakdown::ZERO, |acc, c| acc.add(c))
}

/// Average cents per token across all classes
///
/// Defined as 0.0 when there are no tokens, so a freshly hooked polecat
/// with an empty window never produces a divide-by-zero fault.
pub fn cost_per_token(cost: &CostBreakdown, tokens: &TokenCounts) -> f64 {
    let total = tokens.total();
    if total == 0 {
        return 0.0;
    }
    cost.total_cost as f64 / total as f64
}

/// Forward cost estimate for projected usage
///
/// Runs the same calculator as live accounting so estimates and actuals
/// stay comparable.
pub fn estimate_cost(
    projected: &TokenCounts,
    pricing: &ModelPricing,
) -> Result<CostBreakdown, CoreError> {
    pricing::calculate_cost(projected, pricing)
}

/// One named fold bucket
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageBucket {
    pub key: String,
    pub usage: FleetUsage,
}

/// Fleet roll-up: whole-fleet total plus per-key buckets
///
/// Buckets appear in first-seen order of their key. Records attributed to
/// no convoy count toward the fleet total but no convoy bucket.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetRollup {
    pub fleet: FleetUsage,
    pub by_polecat: Vec<UsageBucket>,
    pub by_rig: Vec<UsageBucket>,
    pub by_convoy: Vec<UsageBucket>,
}

fn bucket_mut<'a>(
    buckets: &'a mut Vec<UsageBucket>,
    index: &mut HashMap<String, usize>,
    key: &str,
) -> &'a mut FleetUsage {
    let idx = *index.entry(key.to_string()).or_insert_with(|| {
        buckets.push(UsageBucket {
            key: key.to_string(),
            usage: FleetUsage::default(),
        });
        buckets.len() - 1
    });
    &mut buckets[idx].usage
}

fn accumulate(usage: &mut FleetUsage, tokens: &TokenCounts, cost: &CostBreakdown) {
    usage.tokens = usage.tokens.add(tokens);
    usage.cost = usage.cost.add(cost);
    usage.records += 1;
}

/// Fold usage records into a fleet roll-up
///
/// Each record is priced through the embedded rate card for its model.
/// Records with invalid token counts are excluded from every bucket and
/// listed in the report.
pub fn rollup_fleet(records: &[UsageRecord]) -> (FleetRollup, AuditReport) {
    let mut rollup = FleetRollup::default();
    let mut report = AuditReport::new();

    let mut polecat_index = HashMap::new();
    let mut rig_index = HashMap::new();
    let mut convoy_index = HashMap::new();

    for record in records {
        let cost = match pricing::calculate_cost_for_model(&record.tokens, &record.model) {
            Ok(cost) => cost,
            Err(err) => {
                report.record_failure(&record.polecat, &err);
                continue;
            }
        };
        report.record_ok();

        accumulate(&mut rollup.fleet, &record.tokens, &cost);
        accumulate(
            bucket_mut(&mut rollup.by_polecat, &mut polecat_index, &record.polecat),
            &record.tokens,
            &cost,
        );
        accumulate(
            bucket_mut(&mut rollup.by_rig, &mut rig_index, &record.rig),
            &record.tokens,
            &cost,
        );
        if let Some(convoy) = record.convoy.as_deref() {
            accumulate(
                bucket_mut(&mut rollup.by_convoy, &mut convoy_index, convoy),
                &record.tokens,
                &cost,
            );
        }
    }

    (rollup, report)
}
