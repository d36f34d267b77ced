//! Y-axis upper bound for the current chart.
//!
//! Percent charts always top out at 100. Vote charts take the tallest stacked
//! bar (grouped by year nationally, by state and year otherwise) and round it
//! up to the next multiple of a divisor that fits the scale of the view.

use std::collections::HashMap;

use super::aggregate::AggregatedRow;
use super::dataset::Year;

/// Rounding step for the national view.
pub const NATIONAL_DIVISOR: u64 = 100_000_000;
/// Rounding step for per-state facets.
pub const STATE_DIVISOR: u64 = 10_000_000;
/// Upper bound of every percent-normalized axis.
pub const PERCENT_MAX: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    None,
    Percent,
}

pub fn divisor(collapse_states: bool) -> u64 {
    if collapse_states {
        NATIONAL_DIVISOR
    } else {
        STATE_DIVISOR
    }
}

/// Computes the axis bound. Never zero: an empty selection (or one whose
/// bars are all zero) falls back to the divisor itself.
pub fn compute_y_max(
    rows: &[AggregatedRow],
    normalization: Normalization,
    collapse_states: bool,
) -> u64 {
    if normalization == Normalization::Percent {
        return PERCENT_MAX;
    }

    let step = divisor(collapse_states);
    let mut bars: HashMap<(Option<&str>, Year), u64> = HashMap::new();
    for row in rows {
        let state = if collapse_states {
            None
        } else {
            row.state.as_deref()
        };
        *bars.entry((state, row.year)).or_default() += row.votes;
    }

    match bars.into_values().max() {
        Some(tallest) if tallest > 0 => tallest.div_ceil(step) * step,
        _ => step,
    }
}
