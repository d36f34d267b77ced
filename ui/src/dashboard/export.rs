use std::path::PathBuf;

use dioxus::prelude::*;
use tracing::{info, warn};

use crate::chart::{svg, ChartSpec};
use crate::core::error::ExportError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ExportKind {
    Json,
    Csv,
    Svg,
    Png,
}

impl ExportKind {
    fn working_label(self) -> &'static str {
        match self {
            ExportKind::Json => "Preparing JSON",
            ExportKind::Csv => "Preparing CSV",
            ExportKind::Svg => "Preparing SVG",
            ExportKind::Png => "Rendering PNG",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            ExportKind::Json => "json",
            ExportKind::Csv => "csv",
            ExportKind::Svg => "svg",
            ExportKind::Png => "png",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(&'static str),
    Done(String),
    Error(String),
}

#[component]
pub fn ExportPanel(spec: ChartSpec) -> Element {
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);
    let row_count = spec.rows.len();

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => {
            Some(("dashboard-card__meta".to_string(), format!("{label}…")))
        }
        ExportStatus::Done(message) => Some((
            "dashboard-card__meta dashboard-card__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "dashboard-card__meta dashboard-card__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    rsx! {
        section { class: "dashboard-card dashboard-export",
            div { class: "dashboard-card__header",
                h2 { "Export" }
            }

            if row_count == 0 {
                p { class: "dashboard-card__placeholder", "Select at least one state, year and party to export the chart." }
            } else {
                p { "Save the current chart as JSON, CSV, SVG or PNG." }

                div { class: "dashboard-export__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        disabled: busy(),
                        onclick: export_handler(ExportKind::Json, spec.clone(), status, busy),
                        "Export JSON"
                    }
                    button {
                        r#type: "button",
                        class: "button",
                        disabled: busy(),
                        onclick: export_handler(ExportKind::Csv, spec.clone(), status, busy),
                        "Export CSV"
                    }
                    button {
                        r#type: "button",
                        class: "button",
                        disabled: busy(),
                        onclick: export_handler(ExportKind::Svg, spec.clone(), status, busy),
                        "Export SVG"
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        disabled: busy(),
                        onclick: export_handler(ExportKind::Png, spec.clone(), status, busy),
                        "Export PNG"
                    }
                }

                if let Some((class_name, message)) = feedback {
                    p { class: "{class_name}", "{message}" }
                }
            }
        }
    }
}

fn export_handler(
    kind: ExportKind,
    spec: ChartSpec,
    mut status: Signal<ExportStatus>,
    mut busy: Signal<bool>,
) -> impl FnMut(MouseEvent) + 'static {
    move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        status.set(ExportStatus::Working(kind.working_label()));

        match futures::executor::block_on(perform_export(kind, &spec)) {
            Ok(message) => {
                info!(?kind, "chart exported");
                status.set(ExportStatus::Done(message));
            }
            Err(err) => {
                warn!(?kind, %err, "chart export failed");
                status.set(ExportStatus::Error(err.to_string()));
            }
        }
        busy.set(false);
    }
}

async fn perform_export(kind: ExportKind, spec: &ChartSpec) -> Result<String, ExportError> {
    let bytes = match kind {
        ExportKind::Json => {
            let json = serde_json::to_string_pretty(spec)?;
            copy_to_clipboard(json.clone()).await?;
            json.into_bytes()
        }
        ExportKind::Csv => build_csv(spec)?,
        ExportKind::Svg => svg::render(spec).into_bytes(),
        ExportKind::Png => build_png(&svg::render(spec))?,
    };

    let filename = format!("votescope-chart-{}.{}", timestamp_slug(), kind.extension());
    let path = save_bytes(&filename, &bytes).await?;

    Ok(match kind {
        ExportKind::Json => format!("JSON copied and saved to {}", path.display()),
        _ => format!("Saved to {}", path.display()),
    })
}

/// Aggregated chart rows in the dataset's column layout. `State` is blank for
/// national totals.
pub(crate) fn build_csv(spec: &ChartSpec) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["State", "Year", "Candidate", "Party", "Votes"])?;
    for row in &spec.rows {
        writer.write_record([
            row.state.clone().unwrap_or_default(),
            row.year.to_string(),
            row.candidate.clone(),
            row.party.to_string(),
            row.votes.to_string(),
        ])?;
    }
    writer.into_inner().map_err(|err| err.into_error().into())
}

fn build_png(markup: &str) -> Result<Vec<u8>, ExportError> {
    use resvg::{tiny_skia, usvg};

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(markup, &options)
        .map_err(|err| ExportError::Render(err.to_string()))?;
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| ExportError::Render("chart has no area".to_string()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|err| ExportError::Render(err.to_string()))
}

fn timestamp_slug() -> String {
    use time::{macros::format_description, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into())
}

async fn copy_to_clipboard(payload: String) -> Result<(), ExportError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(payload)?;
    Ok(())
}

async fn save_bytes(filename: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
    let dir = export_dir()?;
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(filename);
    std::fs::write(&path, bytes)?;
    Ok(path)
}

fn export_dir() -> Result<PathBuf, ExportError> {
    let dirs = directories::ProjectDirs::from("org", "Votescope", "Votescope")
        .ok_or(ExportError::NoExportDir)?;
    Ok(dirs.data_dir().join("exports"))
}
