//! Declarative chart description and its SVG rendering adapter.

mod spec;
pub mod svg;

pub use spec::{
    build, strip_field_prefix, subtitle, Bar, ChartSpec, Facet, FacetGrid, HoverFormat,
    HoverTemplate, LegendEntry, Segment, XAxisSpec, YAxisSpec, TITLE,
};
