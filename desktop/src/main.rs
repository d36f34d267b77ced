#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::dpi::LogicalSize, tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
#[cfg(feature = "desktop")]
use ui::core::{config::DashboardConfig, dataset::Dataset};
#[cfg(feature = "desktop")]
use ui::dashboard::AppData;

use ui::views::{About, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop stylesheet.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resource_dir();
    let config = DashboardConfig::from_env(&resource_dir);

    dioxus::logger::init(config.log_level).ok();
    config.log_ignored();

    let dataset = match Dataset::from_path(&config.dataset_path) {
        Ok(dataset) => dataset,
        Err(err) => {
            tracing::error!(path = %config.dataset_path.display(), "failed to load dataset: {err}");
            eprintln!("votescope: {err}");
            std::process::exit(1);
        }
    };

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Votescope – v{}", env!("CARGO_PKG_VERSION")))
                        .with_inner_size(LogicalSize::new(1280.0, 900.0)),
                )
                .with_resource_directory(resource_dir),
        )
        .with_context(AppData::new(dataset, config.initial_selection()))
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    eprintln!("votescope-desktop was built without the `desktop` feature");
}

fn nav_dashboard(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_about(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::About {}, "{label}" })
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        dashboard: nav_dashboard,
        about: nav_about,
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> { }
    }
}

/// Debug builds read straight from the crate; packaged builds look next to
/// the executable.
#[cfg(feature = "desktop")]
fn resource_dir() -> PathBuf {
    if cfg!(debug_assertions) {
        return PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets");
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
        .unwrap_or_else(|| PathBuf::from("assets"))
}

/// Wraps the shared navbar so it can render the desktop `Route` outlet.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
