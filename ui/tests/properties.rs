//! Property checks for the pure pipeline stages.

use std::collections::BTreeSet;

use proptest::prelude::*;

use ui::core::aggregate::aggregate;
use ui::core::dataset::{Dataset, ElectionRecord, Party, Year};
use ui::core::filter::select;
use ui::core::reference::YEARS;
use ui::core::scale::{compute_y_max, divisor, Normalization, NATIONAL_DIVISOR, STATE_DIVISOR};
use ui::core::selection::{Aggregation, VoteDisplay};

const STATE_POOL: [&str; 5] = ["AZ", "CA", "DC", "PA", "TX"];

fn record() -> impl Strategy<Value = ElectionRecord> {
    (
        0..STATE_POOL.len(),
        0..YEARS.len(),
        0..Party::ALL.len(),
        0..3usize,
        0u64..40_000_000,
    )
        .prop_map(|(state, year, party, candidate, votes)| {
            ElectionRecord::new(
                STATE_POOL[state],
                YEARS[year].0,
                format!("Candidate {candidate}"),
                Party::ALL[party],
                votes,
            )
        })
}

fn dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(record(), 0..60).prop_map(Dataset::from_records)
}

fn state_set() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set(prop::sample::select(STATE_POOL.to_vec()), 0..=STATE_POOL.len())
        .prop_map(|codes| codes.into_iter().map(String::from).collect())
}

fn year_set() -> impl Strategy<Value = BTreeSet<Year>> {
    prop::collection::btree_set(prop::sample::select(YEARS.to_vec()), 0..=YEARS.len())
}

fn party_set() -> impl Strategy<Value = BTreeSet<Party>> {
    prop::collection::btree_set(prop::sample::select(Party::ALL.to_vec()), 0..=Party::ALL.len())
}

proptest! {
    #[test]
    fn prop_filter_keeps_exactly_the_matching_rows(
        data in dataset(),
        states in state_set(),
        years in year_set(),
        parties in party_set(),
    ) {
        let subset = select(&data, &states, &years, &parties);

        let expected: Vec<&ElectionRecord> = data
            .records()
            .iter()
            .filter(|r| states.contains(&r.state) && years.contains(&r.year) && parties.contains(&r.party))
            .collect();
        prop_assert_eq!(subset, expected);
    }

    #[test]
    fn prop_empty_dimension_selects_nothing(data in dataset(), states in state_set(), years in year_set()) {
        prop_assert!(select(&data, &states, &years, &BTreeSet::new()).is_empty());
        let every_party: BTreeSet<Party> = Party::ALL.into_iter().collect();
        prop_assert!(select(&data, &BTreeSet::new(), &years, &every_party).is_empty());
    }

    #[test]
    fn prop_collapsing_states_preserves_vote_totals(data in dataset()) {
        let subset: Vec<&ElectionRecord> = data.records().iter().collect();
        let before: u64 = subset.iter().map(|r| r.votes).sum();

        let national = aggregate(&subset, true);
        let after: u64 = national.iter().map(|r| r.votes).sum();
        prop_assert_eq!(before, after);
        prop_assert!(national.iter().all(|r| r.state.is_none()));
        prop_assert!(national.windows(2).all(|w| (w[0].year, w[0].party) <= (w[1].year, w[1].party)));

        let per_state = aggregate(&subset, false);
        prop_assert_eq!(per_state.len(), subset.len());
    }

    #[test]
    fn prop_y_max_is_a_positive_multiple_covering_every_bar(data in dataset(), collapse in any::<bool>()) {
        let subset: Vec<&ElectionRecord> = data.records().iter().collect();
        let rows = aggregate(&subset, collapse);
        let step = divisor(collapse);

        let y_max = compute_y_max(&rows, Normalization::None, collapse);
        prop_assert!(y_max > 0);
        prop_assert_eq!(y_max % step, 0);

        let tallest = rows.iter().map(|r| r.votes).sum::<u64>();
        prop_assert!(y_max <= tallest.max(1).div_ceil(step) * step);
    }

    #[test]
    fn prop_y_max_is_monotonic_in_votes(
        data in dataset(),
        collapse in any::<bool>(),
        bump in 0u64..200_000_000,
        pick in any::<prop::sample::Index>(),
    ) {
        let subset: Vec<&ElectionRecord> = data.records().iter().collect();
        let mut rows = aggregate(&subset, collapse);
        let before = compute_y_max(&rows, Normalization::None, collapse);

        if !rows.is_empty() {
            let idx = pick.index(rows.len());
            rows[idx].votes += bump;
        }
        let after = compute_y_max(&rows, Normalization::None, collapse);
        prop_assert!(after >= before);
    }

    #[test]
    fn prop_percent_axis_is_fixed(data in dataset(), collapse in any::<bool>()) {
        let subset: Vec<&ElectionRecord> = data.records().iter().collect();
        let rows = aggregate(&subset, collapse);
        prop_assert_eq!(compute_y_max(&rows, Normalization::Percent, collapse), 100);
    }

    #[test]
    fn prop_two_clicks_return_to_the_same_mode(clicks in 0u64..1_000) {
        prop_assert_eq!(VoteDisplay::from_clicks(clicks), VoteDisplay::from_clicks(clicks + 2));
        prop_assert_eq!(Aggregation::from_clicks(clicks), Aggregation::from_clicks(clicks + 2));
        prop_assert_eq!(
            VoteDisplay::from_clicks(clicks).label(),
            VoteDisplay::from_clicks(clicks).toggled().toggled().label()
        );
        prop_assert_ne!(Aggregation::from_clicks(clicks), Aggregation::from_clicks(clicks + 1));
    }
}

#[test]
fn empty_rows_fall_back_to_the_divisor() {
    assert_eq!(compute_y_max(&[], Normalization::None, true), NATIONAL_DIVISOR);
    assert_eq!(compute_y_max(&[], Normalization::None, false), STATE_DIVISOR);
    assert_eq!(compute_y_max(&[], Normalization::Percent, true), 100);
    assert_eq!(compute_y_max(&[], Normalization::Percent, false), 100);
}
