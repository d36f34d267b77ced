//! Chart specification builder.
//!
//! [`build`] turns aggregated rows plus the display modes into an immutable
//! [`ChartSpec`]. It keeps the declarative fields a charting engine
//! would need (fields, color map, facet settings, axis bound, titles, hover
//! template) and also the resolved stacked bars, so renderers don't have to
//! repeat the grouping or the percent normalization.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::aggregate::AggregatedRow;
use crate::core::dataset::{Party, Year};
use crate::core::format::{format_percent, format_thousands};
use crate::core::scale::Normalization;

pub const TITLE: &str = "US Presidential Election, Popular Vote";

const X_FIELD: &str = "Year";
const Y_FIELD: &str = "Votes";
const COLOR_FIELD: &str = "Party";
const FACET_FIELD: &str = "State";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub rows: Vec<AggregatedRow>,
    pub x_field: &'static str,
    pub y_field: &'static str,
    pub color_field: &'static str,
    pub color_map: Vec<LegendEntry>,
    pub normalization: Normalization,
    pub facet_by: Option<&'static str>,
    pub facet_column_limit: u8,
    pub y_max: u64,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub hover_template: HoverTemplate,
    pub facets: Vec<Facet>,
    pub grid: FacetGrid,
    pub x_axis: XAxisSpec,
    pub y_axis: YAxisSpec,
    /// Parties present in the data, in stacking order.
    pub legend: Vec<LegendEntry>,
}

impl ChartSpec {
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Every year that has a bar in some facet, ascending. Facets share this
    /// x-axis.
    pub fn categories(&self) -> Vec<Year> {
        let mut years: Vec<Year> = self
            .facets
            .iter()
            .flat_map(|facet| facet.bars.iter().map(|bar| bar.year))
            .collect();
        years.sort();
        years.dedup();
        years
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub party: Party,
    pub color: &'static str,
}

impl From<Party> for LegendEntry {
    fn from(party: Party) -> Self {
        Self {
            party,
            color: party.color(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverFormat {
    Integer,
    Percent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoverTemplate {
    pub label: &'static str,
    pub format: HoverFormat,
    /// Engine-style template string, e.g. `Votes: %{y:,d}`.
    pub template: &'static str,
}

impl HoverTemplate {
    fn for_normalization(normalization: Normalization) -> Self {
        match normalization {
            Normalization::None => Self {
                label: "Votes",
                format: HoverFormat::Integer,
                template: "%{fullData.name}<br>Year: %{x}<br>Votes: %{y:,d}",
            },
            Normalization::Percent => Self {
                label: "Vote Share",
                format: HoverFormat::Percent,
                template: "%{fullData.name}<br>Year: %{x}<br>Vote Share: %{y:.1f}%",
            },
        }
    }

    /// Formats one segment's hover text. Lines are newline-separated.
    pub fn render(&self, party: Party, year: Year, votes: u64, value: f64) -> String {
        let shown = match self.format {
            HoverFormat::Integer => format_thousands(votes),
            HoverFormat::Percent => format_percent(value),
        };
        format!("{party}\nYear: {year}\n{}: {shown}", self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Facet {
    /// Annotation as a charting engine labels it, e.g. `State=CA`.
    pub annotation: Option<String>,
    /// Displayed facet title: the bare state code.
    pub title: Option<String>,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub year: Year,
    pub total_votes: u64,
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub party: Party,
    pub votes: u64,
    /// Plotted height: raw votes, or percent of the bar.
    pub value: f64,
    pub hover: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FacetGrid {
    pub columns: usize,
    pub rows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct XAxisSpec {
    pub title: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YAxisSpec {
    pub title: Option<&'static str>,
    pub range: [u64; 2],
    pub ticks: Option<Vec<u64>>,
}

/// Drops a `field=` prefix from a facet annotation: `State=CA` -> `CA`.
pub fn strip_field_prefix(annotation: &str) -> &str {
    annotation.rsplit('=').next().unwrap_or(annotation)
}

pub fn subtitle(normalization: Normalization, collapse_states: bool) -> &'static str {
    match (normalization, collapse_states) {
        (Normalization::None, false) => "Votes by Year and State",
        (Normalization::None, true) => "Votes by Year",
        (Normalization::Percent, false) => "Relative % of votes by Year and State",
        (Normalization::Percent, true) => "Relative % of votes by Year",
    }
}

type BarTotals = BTreeMap<Year, BTreeMap<Party, u64>>;

pub fn build(
    rows: Vec<AggregatedRow>,
    y_max: u64,
    normalization: Normalization,
    collapse_states: bool,
    facet_column_limit: u8,
) -> ChartSpec {
    let hover_template = HoverTemplate::for_normalization(normalization);

    // Facets keep first-appearance order; national mode has a single one.
    let mut groups: Vec<(Option<&str>, BarTotals)> = Vec::new();
    for row in &rows {
        let key = if collapse_states {
            None
        } else {
            row.state.as_deref()
        };
        let idx = match groups.iter().position(|(existing, _)| *existing == key) {
            Some(idx) => idx,
            None => {
                groups.push((key, BTreeMap::new()));
                groups.len() - 1
            }
        };
        *groups[idx]
            .1
            .entry(row.year)
            .or_default()
            .entry(row.party)
            .or_default() += row.votes;
    }

    let facets: Vec<Facet> = groups
        .into_iter()
        .map(|(state, totals)| {
            let annotation = state.map(|code| format!("{FACET_FIELD}={code}"));
            let title = annotation
                .as_deref()
                .map(|text| strip_field_prefix(text).to_string());
            Facet {
                annotation,
                title,
                bars: bars(totals, normalization, &hover_template),
            }
        })
        .collect();

    let mut present: Vec<Party> = rows.iter().map(|row| row.party).collect();
    present.sort();
    present.dedup();

    let grid = if facets.is_empty() {
        FacetGrid {
            columns: 0,
            rows: 0,
        }
    } else {
        let columns = usize::from(facet_column_limit.max(1)).min(facets.len());
        FacetGrid {
            columns,
            rows: facets.len().div_ceil(columns),
        }
    };

    let (x_axis, y_axis) = if collapse_states {
        (
            XAxisSpec {
                title: Some(X_FIELD),
            },
            YAxisSpec {
                title: Some(hover_template.label),
                range: [0, y_max],
                ticks: None,
            },
        )
    } else {
        (
            XAxisSpec { title: None },
            YAxisSpec {
                title: None,
                range: [0, y_max],
                ticks: Some(vec![0, y_max / 2, y_max]),
            },
        )
    };

    ChartSpec {
        x_field: X_FIELD,
        y_field: Y_FIELD,
        color_field: COLOR_FIELD,
        color_map: Party::ALL.into_iter().map(LegendEntry::from).collect(),
        normalization,
        facet_by: (!collapse_states).then_some(FACET_FIELD),
        facet_column_limit,
        y_max,
        title: TITLE,
        subtitle: subtitle(normalization, collapse_states),
        hover_template,
        facets,
        grid,
        x_axis,
        y_axis,
        legend: present.into_iter().map(LegendEntry::from).collect(),
        rows,
    }
}

fn bars(totals: BarTotals, normalization: Normalization, hover: &HoverTemplate) -> Vec<Bar> {
    totals
        .into_iter()
        .map(|(year, by_party)| {
            let total_votes: u64 = by_party.values().sum();
            let segments = by_party
                .into_iter()
                .map(|(party, votes)| {
                    let value = match normalization {
                        Normalization::None => votes as f64,
                        Normalization::Percent if total_votes == 0 => 0.0,
                        Normalization::Percent => votes as f64 * 100.0 / total_votes as f64,
                    };
                    Segment {
                        party,
                        votes,
                        value,
                        hover: hover.render(party, year, votes, value),
                    }
                })
                .collect();
            Bar {
                year,
                total_votes,
                segments,
            }
        })
        .collect()
}
