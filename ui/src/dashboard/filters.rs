use dioxus::prelude::*;

use crate::core::dataset::Party;
use crate::core::reference::{selectable_states, YEARS};
use crate::core::selection::{Selection, FACET_COLUMNS_MAX, FACET_COLUMNS_MIN};

#[component]
pub fn FilterPanel(selection: Signal<Selection>) -> Element {
    let mut selection = selection;
    let current = selection();

    let vote_label = current.vote_display.label();
    let aggregation_label = current.aggregation.label();
    let facet_columns = current.facet_columns;
    let facets_disabled = current.aggregation.collapses_states();

    rsx! {
        section { class: "dashboard-card dashboard-filters",
            div { class: "dashboard-filters__group",
                h4 { "Vote Summary" }
                div { class: "dashboard-filters__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary dashboard-filters__toggle",
                        onclick: move |_| selection.write().click_vote_toggle(),
                        "{vote_label}"
                    }
                    button {
                        r#type: "button",
                        class: "button button--accent dashboard-filters__toggle",
                        onclick: move |_| selection.write().click_aggregation_toggle(),
                        "{aggregation_label}"
                    }
                }
            }

            div { class: "dashboard-filters__group",
                h4 { "States Selected" }
                div { class: "dashboard-filters__options dashboard-filters__options--states",
                    for code in selectable_states() {
                        label { key: "{code}", class: "dashboard-filters__option",
                            input {
                                r#type: "checkbox",
                                checked: current.states.contains(code),
                                onchange: move |_| selection.write().toggle_state(code),
                            }
                            "{code}"
                        }
                    }
                }
                div { class: "dashboard-filters__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: move |_| selection.write().add_all_states(),
                        "Add All"
                    }
                    button {
                        r#type: "button",
                        class: "button button--danger",
                        onclick: move |_| selection.write().remove_all_states(),
                        "Remove All"
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| selection.write().add_swing_states(),
                        "2024 Swing States"
                    }
                }
            }

            div { class: "dashboard-filters__group",
                h4 { "Years Selected" }
                div { class: "dashboard-filters__options",
                    for year in YEARS {
                        label { key: "{year}", class: "dashboard-filters__option",
                            input {
                                r#type: "checkbox",
                                checked: current.years.contains(&year),
                                onchange: move |_| selection.write().toggle_year(year),
                            }
                            "{year}"
                        }
                    }
                }
                div { class: "dashboard-filters__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: move |_| selection.write().add_all_years(),
                        "Add All"
                    }
                    button {
                        r#type: "button",
                        class: "button button--danger",
                        onclick: move |_| selection.write().remove_all_years(),
                        "Remove All"
                    }
                }
            }

            div { class: "dashboard-filters__group",
                h4 { "Parties Selected" }
                div { class: "dashboard-filters__options",
                    for party in Party::ALL {
                        label { key: "{party}", class: "dashboard-filters__option",
                            span {
                                class: "dashboard-filters__swatch",
                                style: format!("background: {}", party.color()),
                            }
                            input {
                                r#type: "checkbox",
                                checked: current.parties.contains(&party),
                                onchange: move |_| selection.write().toggle_party(party),
                            }
                            "{party}"
                        }
                    }
                }
            }

            div { class: "dashboard-filters__group",
                h4 { "Max Columns" }
                input {
                    r#type: "number",
                    class: "dashboard-filters__columns",
                    min: "{FACET_COLUMNS_MIN}",
                    max: "{FACET_COLUMNS_MAX}",
                    value: "{facet_columns}",
                    disabled: facets_disabled,
                    oninput: move |evt: FormEvent| {
                        if let Ok(columns) = evt.value().trim().parse::<u32>() {
                            selection.write().set_facet_columns(columns);
                        }
                    },
                }
            }
        }
    }
}
