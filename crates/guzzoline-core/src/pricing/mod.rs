//! Cost accounting for polecat token usage
//!
//! Converts raw token counts into cent-denominated cost breakdowns under
//! the embedded rate card. Each component is rounded to the nearest cent
//! independently (half away from zero) and the total is the sum of the
//! rounded components. Re-rounding the total from the unrounded aggregate
//! is a breaking behavioral change: dashboards comparing breakdown against
//! total would disagree by a cent.
//!
//! # Examples
//!
//! ```
//! use guzzoline_core::models::TokenCounts;
//! use guzzoline_core::pricing::{calculate_cost, ModelPricing};
//!
//! // 2M input + 500K output at the default card: 600¢ + 750¢ = 1350¢
//! let tokens = TokenCounts::new(2_000_000, 500_000, 0);
//! let cost = calculate_cost(&tokens, &ModelPricing::default_rates()).unwrap();
//! assert_eq!(cost.total_cost, 1350);
//! ```

pub mod embedded;

pub use embedded::{get_model_pricing, ModelPricing};

use crate::error::CoreError;
use crate::models::{CostBreakdown, TokenCounts};

/// Cents for one token class, rounded half away from zero
fn class_cents(tokens: i64, rate_per_million: f64) -> i64 {
    (tokens as f64 / 1_000_000.0 * rate_per_million * 100.0).round() as i64
}

/// Calculate the cost breakdown for one usage observation
///
/// # Errors
///
/// Returns `CoreError::InvalidInput` if any token count is negative.
pub fn calculate_cost(
    tokens: &TokenCounts,
    pricing: &ModelPricing,
) -> Result<CostBreakdown, CoreError> {
    if let Some(field) = tokens.negative_field() {
        return Err(CoreError::InvalidInput {
            message: format!("negative token count in field {field}"),
        });
    }

    let input_cost = class_cents(tokens.input, pricing.input_per_million);
    let output_cost = class_cents(tokens.output, pricing.output_per_million);
    let cache_read_cost = class_cents(tokens.cache_read, pricing.cache_read_per_million);

    Ok(CostBreakdown {
        input_cost,
        output_cost,
        cache_read_cost,
        total_cost: input_cost + output_cost + cache_read_cost,
    })
}

/// Calculate cost using the embedded rate card for `model`
pub fn calculate_cost_for_model(
    tokens: &TokenCounts,
    model: &str,
) -> Result<CostBreakdown, CoreError> {
    calculate_cost(tokens, &get_model_pricing(model))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_card_example() {
        // 2M input × $3/M = $6.00, 500K output × $15/M = $7.50
        let tokens = TokenCounts::new(2_000_000, 500_000, 0);
        let cost = calculate_cost(&tokens, &ModelPricing::default_rates()).unwrap();
        assert_eq!(cost.input_cost, 600);
        assert_eq!(cost.output_cost, 750);
        assert_eq!(cost.cache_read_cost, 0);
        assert_eq!(cost.total_cost, 1350);
    }

    #[test]
    fn test_zero_tokens_zero_cost() {
        let cost = calculate_cost(&TokenCounts::ZERO, &ModelPricing::default_rates()).unwrap();
        assert_eq!(cost, CostBreakdown::ZERO);
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        // 5000 tokens × $1/M × 100 = 0.5¢ exactly, rounds up to 1¢
        let pricing = ModelPricing {
            input_per_million: 1.0,
            output_per_million: 1.0,
            cache_read_per_million: 1.0,
        };
        let cost = calculate_cost(&TokenCounts::new(5_000, 0, 0), &pricing).unwrap();
        assert_eq!(cost.input_cost, 1);
    }

    #[test]
    fn test_total_is_sum_of_rounded_components() {
        // Each component rounds up from 0.5¢; a total rounded once from the
        // unrounded aggregate (1.5¢ -> 2¢) would disagree with the breakdown.
        let pricing = ModelPricing {
            input_per_million: 1.0,
            output_per_million: 1.0,
            cache_read_per_million: 1.0,
        };
        let cost = calculate_cost(&TokenCounts::new(5_000, 5_000, 5_000), &pricing).unwrap();
        assert_eq!(cost.input_cost, 1);
        assert_eq!(cost.output_cost, 1);
        assert_eq!(cost.cache_read_cost, 1);
        assert_eq!(cost.total_cost, 3);
    }

    #[test]
    fn test_breakdown_invariant_holds() {
        let cases = [
            TokenCounts::new(0, 0, 0),
            TokenCounts::new(1, 1, 1),
            TokenCounts::new(123_456, 78_910, 1_112_131),
            TokenCounts::new(2_000_000, 500_000, 10_000_000),
        ];
        for tokens in cases {
            let cost = calculate_cost_for_model(&tokens, "claude-opus-4").unwrap();
            assert_eq!(
                cost.total_cost,
                cost.input_cost + cost.output_cost + cost.cache_read_cost
            );
        }
    }

    #[test]
    fn test_negative_count_is_invalid_input() {
        let err = calculate_cost(
            &TokenCounts::new(-1, 0, 0),
            &ModelPricing::default_rates(),
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput { .. }));
    }

    #[test]
    fn test_cache_read_priced_at_cache_rate() {
        // 10M cache-read × $0.30/M = $3.00
        let tokens = TokenCounts::new(0, 0, 10_000_000);
        let cost = calculate_cost_for_model(&tokens, "sonnet-4").unwrap();
        assert_eq!(cost.cache_read_cost, 300);
        assert_eq!(cost.total_cost, 300);
    }
}
