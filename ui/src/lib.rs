//! Shared UI crate for Votescope: the pure chart pipeline plus the Dioxus
//! dashboard built on top of it.

pub mod chart;
pub mod core;
pub mod dashboard;
pub mod views;

pub mod components {
    // Application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
