//! Optional collapse of the state dimension into national totals.

use std::collections::BTreeMap;

use serde::Serialize;

use super::dataset::{ElectionRecord, Party, Year};

/// A chart input row. `state` is `None` once states have been collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedRow {
    pub state: Option<String>,
    pub year: Year,
    pub candidate: String,
    pub party: Party,
    pub votes: u64,
}

impl From<&ElectionRecord> for AggregatedRow {
    fn from(record: &ElectionRecord) -> Self {
        Self {
            state: Some(record.state.clone()),
            year: record.year,
            candidate: record.candidate.clone(),
            party: record.party,
            votes: record.votes,
        }
    }
}

/// Passes rows through per state, or sums votes per `(candidate, party, year)`
/// ordered by year, then party, then candidate.
pub fn aggregate(subset: &[&ElectionRecord], collapse_states: bool) -> Vec<AggregatedRow> {
    if !collapse_states {
        return subset.iter().map(|record| AggregatedRow::from(*record)).collect();
    }

    let mut groups: BTreeMap<(Year, Party, &str), u64> = BTreeMap::new();
    for record in subset {
        *groups
            .entry((record.year, record.party, record.candidate.as_str()))
            .or_default() += record.votes;
    }

    groups
        .into_iter()
        .map(|((year, party, candidate), votes)| AggregatedRow {
            state: None,
            year,
            candidate: candidate.to_string(),
            party,
            votes,
        })
        .collect()
}
