//! Static reference data: state codes and names, election years, swing states.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::dataset::Year;

/// All 51 state/territory codes (including DC) with their full names.
pub const STATES: [(&str, &str); 51] = [
    ("AK", "Alaska"),
    ("AL", "Alabama"),
    ("AR", "Arkansas"),
    ("AZ", "Arizona"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DC", "Washington DC"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("IA", "Iowa"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("MA", "Massachusetts"),
    ("MD", "Maryland"),
    ("ME", "Maine"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MO", "Missouri"),
    ("MS", "Mississippi"),
    ("MT", "Montana"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("NE", "Nebraska"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NV", "Nevada"),
    ("NY", "New York"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VA", "Virginia"),
    ("VT", "Vermont"),
    ("WA", "Washington"),
    ("WI", "Wisconsin"),
    ("WV", "West Virginia"),
    ("WY", "Wyoming"),
];

/// Election years covered by the dataset, ascending.
pub const YEARS: [Year; 6] = [
    Year(2004),
    Year(2008),
    Year(2012),
    Year(2016),
    Year(2020),
    Year(2024),
];

/// Competitive states of the 2024 cycle.
pub const SWING_STATES: [&str; 7] = ["AZ", "GA", "MI", "NC", "NV", "PA", "WI"];

/// Excluded from the "all states" selection.
pub const DISTRICT_OF_COLUMBIA: &str = "DC";

static NAME_BY_CODE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| STATES.iter().copied().collect());

static CODE_BY_NAME: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| STATES.iter().map(|&(code, name)| (name, code)).collect());

pub fn state_name(code: &str) -> Option<&'static str> {
    NAME_BY_CODE.get(code).copied()
}

pub fn state_code(name: &str) -> Option<&'static str> {
    CODE_BY_NAME.get(name).copied()
}

/// The 50 codes offered in the state picker (everything but DC), in table order.
pub fn selectable_states() -> impl Iterator<Item = &'static str> {
    STATES
        .iter()
        .map(|&(code, _)| code)
        .filter(|code| *code != DISTRICT_OF_COLUMBIA)
}
