use dioxus::prelude::*;

use crate::dashboard::Dashboard;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Explore US Presidential Election Results, 2004-2024" }
            p {
                "Compare the popular vote by state and year, switch between raw votes and vote share, "
                "or collapse every state into national totals."
            }
            Dashboard {}
        }
    }
}
