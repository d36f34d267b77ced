//! Pure, platform-agnostic core: dataset, selection state and the
//! filter → aggregate → scale pipeline feeding the chart builder.

pub mod aggregate;
pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod format;
pub mod pipeline;
pub mod reference;
pub mod scale;
pub mod selection;
