//! Shared UI crate for AdGauge. Campaign logic, export and every view live
//! here; the `web` and `desktop` crates only supply routing and launch.

use dioxus::prelude::*;

pub mod context;
pub mod core;
pub mod export;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod comparison;
    pub use comparison::ComparisonList;

    mod export_button;
    pub use export_button::ExportButton;

    mod metrics_chart;
    pub use metrics_chart::MetricsChart;
}

/// Shared theme (ui/assets/theme/main.css). Desktop embeds the same file.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
