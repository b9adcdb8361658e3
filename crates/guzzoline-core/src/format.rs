//! Display formatting for costs and token counts
//!
//! The thresholds here are part of the numeric contract consumers rely on:
//! sub-cent costs show a less-than indicator instead of a misleading
//! "$0.00", and precision tapers as magnitude grows so fleet totals stay
//! readable next to per-call costs.

/// Format a cost (in cents) for display
///
/// Zero is "$0.00"; positive costs below one cent render as "<$0.01".
/// Under $1 keeps two decimals, under $100 one, whole dollars above.
pub fn format_cost(cents: f64) -> String {
    if cents == 0.0 {
        return "$0.00".to_string();
    }
    if cents < 1.0 {
        return "<$0.01".to_string();
    }
    let dollars = cents / 100.0;
    if dollars < 1.0 {
        format!("${:.2}", dollars)
    } else if dollars < 100.0 {
        format!("${:.1}", dollars)
    } else {
        format!("${:.0}", dollars)
    }
}

/// Abbreviate a token count for display
pub fn format_tokens(tokens: i64) -> String {
    if tokens >= 1_000_000 {
        format!("{:.1}M", tokens as f64 / 1_000_000.0)
    } else if tokens >= 1_000 {
        format!("{:.1}K", tokens as f64 / 1_000.0)
    } else {
        tokens.to_string()
    }
}
