//! The election dataset: typed records, CSV loading and the sentinel filter.
//!
//! The source file carries precomputed `"Total"` rows (per state and per
//! year). Those rows are dropped at load time so that nothing downstream can
//! sum them a second time; a [`Dataset`] never contains one.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, info};

use super::error::DatasetError;

/// Marker used by the source data for precomputed aggregate rows.
pub const TOTAL_SENTINEL: &str = "Total";

const COLUMN_STATE: &str = "State";
const COLUMN_YEAR: &str = "Year";
const COLUMN_CANDIDATE: &str = "Candidate";
const COLUMN_PARTY: &str = "Party";
const COLUMN_VOTES: &str = "Votes";

/// Party grouping used for series colors. Variant order matches the
/// alphabetical order of the source labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Party {
    Democrat,
    Republican,
    #[serde(rename = "Third Party")]
    ThirdParty,
}

impl Party {
    pub const ALL: [Party; 3] = [Party::Democrat, Party::Republican, Party::ThirdParty];

    pub fn label(self) -> &'static str {
        match self {
            Party::Democrat => "Democrat",
            Party::Republican => "Republican",
            Party::ThirdParty => "Third Party",
        }
    }

    /// Fixed series color, identical across every chart variant.
    pub fn color(self) -> &'static str {
        match self {
            Party::Democrat => "#00AEF3",
            Party::Republican => "#E9141D",
            Party::ThirdParty => "#007D10",
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Party {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Party::ALL
            .into_iter()
            .find(|party| party.label() == raw)
            .ok_or(())
    }
}

/// Election year, written as four digits in the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Year(pub u16);

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl FromStr for Year {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.len() != 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(());
        }
        raw.parse().map(Year).map_err(|_| ())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElectionRecord {
    pub state: String,
    pub year: Year,
    pub candidate: String,
    pub party: Party,
    pub votes: u64,
}

impl ElectionRecord {
    pub fn new(
        state: impl Into<String>,
        year: u16,
        candidate: impl Into<String>,
        party: Party,
        votes: u64,
    ) -> Self {
        Self {
            state: state.into(),
            year: Year(year),
            candidate: candidate.into(),
            party,
            votes,
        }
    }

    fn is_sentinel(&self) -> bool {
        self.state == TOTAL_SENTINEL || self.candidate == TOTAL_SENTINEL
    }
}

/// Immutable, sentinel-free table of election records in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<ElectionRecord>,
}

impl Dataset {
    pub fn from_records(records: Vec<ElectionRecord>) -> Self {
        let records = records
            .into_iter()
            .filter(|record| !record.is_sentinel())
            .collect();
        Self { records }
    }

    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "reading election dataset");
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let columns = Columns::locate(csv.headers()?)?;

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for row in csv.records() {
            let row = row?;
            let line = row.position().map(|pos| pos.line()).unwrap_or_default();
            let field = |idx: usize| row.get(idx).unwrap_or_default();

            let state = field(columns.state);
            let candidate = field(columns.candidate);
            let party = field(columns.party);
            if [state, candidate, party].contains(&TOTAL_SENTINEL) {
                skipped += 1;
                continue;
            }

            let year_raw = field(columns.year);
            let year = year_raw.parse().map_err(|_| DatasetError::InvalidYear {
                line,
                value: year_raw.to_string(),
            })?;
            let votes_raw = field(columns.votes);
            let votes = votes_raw.parse().map_err(|_| DatasetError::InvalidVotes {
                line,
                value: votes_raw.to_string(),
            })?;
            let party = party.parse().map_err(|_| DatasetError::UnknownParty {
                line,
                value: party.to_string(),
            })?;

            records.push(ElectionRecord {
                state: state.to_string(),
                year,
                candidate: candidate.to_string(),
                party,
                votes,
            });
        }

        info!(
            loaded = records.len(),
            skipped_totals = skipped,
            "election dataset loaded"
        );
        Ok(Self { records })
    }

    pub fn records(&self) -> &[ElectionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct state codes in first-seen order.
    pub fn states(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.state.as_str()) {
                seen.push(record.state.as_str());
            }
        }
        seen
    }
}

struct Columns {
    state: usize,
    year: usize,
    candidate: usize,
    party: usize,
    votes: usize,
}

impl Columns {
    fn locate(headers: &csv::StringRecord) -> Result<Self, DatasetError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or(DatasetError::MissingColumn(name))
        };

        Ok(Self {
            state: find(COLUMN_STATE)?,
            year: find(COLUMN_YEAR)?,
            candidate: find(COLUMN_CANDIDATE)?,
            party: find(COLUMN_PARTY)?,
            votes: find(COLUMN_VOTES)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
State,Year,Candidate,Party,Votes
CA,2020,Joe Biden,Democrat,1000
CA,2020,Donald Trump,Republican,500
CA,2020,Total,Total,1500
Total,2020,Joe Biden,Democrat,1000
TX,2020,Jo Jorgensen,Third Party,25
";

    #[test]
    fn loads_rows_and_drops_totals() {
        let dataset = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 3);
        assert!(dataset
            .records()
            .iter()
            .all(|r| r.state != TOTAL_SENTINEL && r.candidate != TOTAL_SENTINEL));
        assert_eq!(dataset.records()[2].party, Party::ThirdParty);
        assert_eq!(dataset.states(), vec!["CA", "TX"]);
    }

    #[test]
    fn column_order_does_not_matter() {
        let csv = "Votes,Party,Candidate,Year,State\n7,Republican,X,2008,OH\n";
        let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(
            dataset.records()[0],
            ElectionRecord::new("OH", 2008, "X", Party::Republican, 7)
        );
    }

    #[test]
    fn missing_column_is_fatal() {
        let csv = "State,Year,Candidate,Votes\nCA,2020,X,1\n";
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn("Party")));
    }

    #[test]
    fn non_integer_votes_are_fatal() {
        let csv = "State,Year,Candidate,Party,Votes\nCA,2020,X,Democrat,12.5\n";
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
        match err {
            DatasetError::InvalidVotes { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "12.5");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn negative_votes_are_fatal() {
        let csv = "State,Year,Candidate,Party,Votes\nCA,2020,X,Democrat,-3\n";
        assert!(matches!(
            Dataset::from_reader(csv.as_bytes()),
            Err(DatasetError::InvalidVotes { .. })
        ));
    }

    #[test]
    fn unknown_party_is_fatal() {
        let csv = "State,Year,Candidate,Party,Votes\nCA,2020,X,Whig,3\n";
        assert!(matches!(
            Dataset::from_reader(csv.as_bytes()),
            Err(DatasetError::UnknownParty { .. })
        ));
    }

    #[test]
    fn year_must_have_four_digits() {
        assert_eq!("2016".parse::<Year>(), Ok(Year(2016)));
        assert!("16".parse::<Year>().is_err());
        assert!("20x6".parse::<Year>().is_err());
        assert_eq!(Year(2004).to_string(), "2004");
    }

    #[test]
    fn from_records_applies_sentinel_filter() {
        let dataset = Dataset::from_records(vec![
            ElectionRecord::new("CA", 2020, "A", Party::Democrat, 1),
            ElectionRecord::new("Total", 2020, "A", Party::Democrat, 1),
            ElectionRecord::new("CA", 2020, "Total", Party::Democrat, 1),
        ]);
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn party_order_matches_labels() {
        let mut labels: Vec<_> = Party::ALL.iter().map(|p| p.label()).collect();
        labels.sort();
        assert_eq!(labels, vec!["Democrat", "Republican", "Third Party"]);
        assert!(Party::Democrat < Party::Republican && Party::Republican < Party::ThirdParty);
    }
}
