use dioxus::prelude::*;

use crate::chart::{svg, ChartSpec};
use crate::core::format::format_thousands;

#[component]
pub fn ChartPanel(spec: ChartSpec) -> Element {
    let markup = svg::render(&spec);
    let facet_count = spec.facets.len();
    let year_count = spec.categories().len();
    let total_votes = format_thousands(spec.rows.iter().map(|row| row.votes).sum());

    let scope = if spec.facet_by.is_some() {
        format!("{facet_count} states · {year_count} elections")
    } else {
        format!("National · {year_count} elections")
    };

    rsx! {
        section { class: "dashboard-card dashboard-chart",
            div { class: "dashboard-card__header",
                h2 { "Popular vote" }
                if !spec.is_empty() {
                    span { class: "dashboard-card__meta", "{scope} · {total_votes} votes" }
                }
            }
            div { class: "dashboard-chart__canvas", dangerous_inner_html: "{markup}" }
        }
    }
}
