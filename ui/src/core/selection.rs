//! User-facing selection state and the two display toggles.
//!
//! Each toggle is a two-state machine driven only by clicks: every click
//! flips it, nothing else does. An even click count is the default state.

use std::collections::BTreeSet;

use super::dataset::{Party, Year};
use super::reference::{self, SWING_STATES, YEARS};
use super::scale::Normalization;

pub const FACET_COLUMNS_MIN: u8 = 1;
pub const FACET_COLUMNS_MAX: u8 = 20;
pub const FACET_COLUMNS_DEFAULT: u8 = 10;

/// Votes-vs-percent toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoteDisplay {
    /// Even click count.
    #[default]
    Percent,
    /// Odd click count.
    Votes,
}

impl VoteDisplay {
    pub fn from_clicks(clicks: u64) -> Self {
        if clicks % 2 == 0 {
            Self::Percent
        } else {
            Self::Votes
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Percent => Self::Votes,
            Self::Votes => Self::Percent,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Percent => "By Percent",
            Self::Votes => "By Votes",
        }
    }

    pub fn normalization(self) -> Normalization {
        match self {
            Self::Percent => Normalization::Percent,
            Self::Votes => Normalization::None,
        }
    }
}

/// Per-state facets vs national aggregate toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aggregation {
    /// Even click count.
    #[default]
    PerState,
    /// Odd click count.
    National,
}

impl Aggregation {
    pub fn from_clicks(clicks: u64) -> Self {
        if clicks % 2 == 0 {
            Self::PerState
        } else {
            Self::National
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::PerState => Self::National,
            Self::National => Self::PerState,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::PerState => "By State",
            Self::National => "National",
        }
    }

    pub fn collapses_states(self) -> bool {
        self == Self::National
    }
}

/// Everything the user can change. Owned by the dashboard, read by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub states: BTreeSet<String>,
    pub years: BTreeSet<Year>,
    pub parties: BTreeSet<Party>,
    pub vote_display: VoteDisplay,
    pub aggregation: Aggregation,
    pub facet_columns: u8,
}

impl Default for Selection {
    fn default() -> Self {
        let mut selection = Self {
            states: BTreeSet::new(),
            years: BTreeSet::new(),
            parties: BTreeSet::new(),
            vote_display: VoteDisplay::default(),
            aggregation: Aggregation::default(),
            facet_columns: FACET_COLUMNS_DEFAULT,
        };
        selection.add_all_states();
        selection.add_all_years();
        selection.add_all_parties();
        selection
    }
}

impl Selection {
    /// All 50 states; DC stays out.
    pub fn add_all_states(&mut self) {
        self.states = reference::selectable_states().map(String::from).collect();
    }

    pub fn remove_all_states(&mut self) {
        self.states.clear();
    }

    /// Replaces the state selection with the swing states.
    pub fn add_swing_states(&mut self) {
        self.states = SWING_STATES.iter().map(|code| code.to_string()).collect();
    }

    pub fn add_all_years(&mut self) {
        self.years = YEARS.into_iter().collect();
    }

    pub fn remove_all_years(&mut self) {
        self.years.clear();
    }

    pub fn add_all_parties(&mut self) {
        self.parties = Party::ALL.into_iter().collect();
    }

    pub fn toggle_state(&mut self, code: &str) {
        if !self.states.remove(code) {
            self.states.insert(code.to_string());
        }
    }

    pub fn toggle_year(&mut self, year: Year) {
        if !self.years.remove(&year) {
            self.years.insert(year);
        }
    }

    pub fn toggle_party(&mut self, party: Party) {
        if !self.parties.remove(&party) {
            self.parties.insert(party);
        }
    }

    pub fn click_vote_toggle(&mut self) {
        self.vote_display = self.vote_display.toggled();
    }

    pub fn click_aggregation_toggle(&mut self) {
        self.aggregation = self.aggregation.toggled();
    }

    pub fn set_facet_columns(&mut self, columns: u32) {
        let clamped = columns.clamp(FACET_COLUMNS_MIN.into(), FACET_COLUMNS_MAX.into());
        self.facet_columns = clamped as u8;
    }
}
