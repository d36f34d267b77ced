use dioxus::prelude::*;

const AP_NEWS_URL: &str = "https://apnews.com/projects/election-results-2024/";
const FEC_URL: &str = "https://www.fec.gov/introduction-campaign-finance/election-results-and-voting-information/#election-results";

#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "page page-about",
            h1 { "About the data" }
            p {
                "The 2024 general election has not been officially reported by all states, so minor vote tally changes are possible. "
                "2024 tallies are based on "
                a { href: AP_NEWS_URL, class: "page-about__link", "AP News" }
                " as of 22-Nov-2024. The remaining vote tallies are based on the "
                a { href: FEC_URL, class: "page-about__link", "Federal Election Commission reports" }
                "."
            }
            p {
                "State and national totals shown on the dashboard are computed from candidate rows; "
                "the precomputed total rows in the source file are never summed."
            }
        }
    }
}
