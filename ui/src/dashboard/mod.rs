use std::sync::Arc;

use dioxus::prelude::*;

use crate::core::{dataset::Dataset, pipeline, selection::Selection};

mod chart_panel;
pub use chart_panel::ChartPanel;

mod filters;
pub use filters::FilterPanel;

mod export;
pub use export::ExportPanel;

/// Process-wide inputs handed to the app at launch: the loaded dataset and
/// the selection the dashboard opens with.
#[derive(Debug, Clone)]
pub struct AppData {
    pub dataset: Arc<Dataset>,
    pub initial_selection: Selection,
}

impl AppData {
    pub fn new(dataset: Dataset, initial_selection: Selection) -> Self {
        Self {
            dataset: Arc::new(dataset),
            initial_selection,
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    let app = use_context::<AppData>();
    let initial = app.initial_selection.clone();
    let selection = use_signal(move || initial);

    // Re-derived on every render; nothing from the previous chart is reused.
    let spec = pipeline::recompute(&app.dataset, &selection.read());

    rsx! {
        div { class: "dashboard",
            ChartPanel { spec: spec.clone() }
            div { class: "dashboard__panels",
                FilterPanel { selection }
                ExportPanel { spec }
            }
        }
    }
}
