//! Filter, aggregate, scale and build: the whole recomputation in one call.

use tracing::debug;

use super::aggregate::aggregate;
use super::dataset::Dataset;
use super::filter::select;
use super::scale::compute_y_max;
use super::selection::Selection;
use crate::chart::{self, ChartSpec};

/// Derives a fresh chart from the dataset and the current selection.
pub fn recompute(dataset: &Dataset, selection: &Selection) -> ChartSpec {
    let subset = select(
        dataset,
        &selection.states,
        &selection.years,
        &selection.parties,
    );
    let collapse_states = selection.aggregation.collapses_states();
    let normalization = selection.vote_display.normalization();

    let rows = aggregate(&subset, collapse_states);
    let y_max = compute_y_max(&rows, normalization, collapse_states);

    debug!(
        selected = subset.len(),
        rows = rows.len(),
        y_max,
        ?normalization,
        collapse_states,
        "chart recomputed"
    );

    chart::build(
        rows,
        y_max,
        normalization,
        collapse_states,
        selection.facet_columns,
    )
}
