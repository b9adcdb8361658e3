//! Embedded rate card for polecat models
//!
//! All rates are dollars per million tokens. The fleet runs a small set of
//! model families, so the table matches by lowercase substring: a dated id
//! like "claude-sonnet-4-5-20250929" resolves to its family rates. Unknown
//! models fall back to the designated default card rather than erroring;
//! an unrecognized model is a pricing gap, not a data-quality fault.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Pricing for one model family ($/M tokens)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelPricing {
    /// Price per million input tokens ($/M)
    pub input_per_million: f64,
    /// Price per million output tokens ($/M)
    pub output_per_million: f64,
    /// Price per million cache-read tokens ($/M)
    pub cache_read_per_million: f64,
}

impl ModelPricing {
    /// Designated default card for unknown models
    ///
    /// Matches the mid-tier family most polecats run:
    /// input $3/M, output $15/M, cache read $0.30/M.
    pub fn default_rates() -> Self {
        Self {
            input_per_million: 3.0,
            output_per_million: 15.0,
            cache_read_per_million: 0.30,
        }
    }
}

/// Embedded pricing table
///
/// Matched in order by lowercase substring; first match wins.
static PRICING_TABLE: Lazy<Vec<(&'static str, ModelPricing)>> = Lazy::new(|| {
    vec![
        (
            "opus",
            ModelPricing {
                input_per_million: 15.0,
                output_per_million: 75.0,
                cache_read_per_million: 1.5, // 10% of input
            },
        ),
        (
            "sonnet",
            ModelPricing {
                input_per_million: 3.0,
                output_per_million: 15.0,
                cache_read_per_million: 0.30,
            },
        ),
        (
            "haiku",
            ModelPricing {
                input_per_million: 0.25,
                output_per_million: 1.25,
                cache_read_per_million: 0.03,
            },
        ),
    ]
});

/// Get pricing for a model id
///
/// Returns the default card when the model matches no known family.
pub fn get_model_pricing(model: &str) -> ModelPricing {
    let model_lower = model.to_lowercase();
    PRICING_TABLE
        .iter()
        .find(|(family, _)| model_lower.contains(family))
        .map(|(_, pricing)| *pricing)
        .unwrap_or_else(|| {
            tracing::debug!("No pricing entry for model {:?}, using default rates", model);
            ModelPricing::default_rates()
        })
}
