//! Row selection by state, year and party membership.

use std::collections::BTreeSet;

use super::dataset::{Dataset, ElectionRecord, Party, Year};

/// Keeps the records whose state, year and party are all selected, in
/// dataset order. An empty set on any dimension selects nothing.
pub fn select<'a>(
    dataset: &'a Dataset,
    states: &BTreeSet<String>,
    years: &BTreeSet<Year>,
    parties: &BTreeSet<Party>,
) -> Vec<&'a ElectionRecord> {
    dataset
        .records()
        .iter()
        .filter(|record| {
            states.contains(&record.state)
                && years.contains(&record.year)
                && parties.contains(&record.party)
        })
        .collect()
}
