#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::dpi::LogicalSize, tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::context::{use_language_provider, use_session_provider};
use ui::i18n;
use ui::views::{Analysis, Campaign, Learn, Tab};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Campaign {},
    #[route("/analysis")]
    Analysis {},
    #[route("/learn")]
    Learn {},
}

impl From<Tab> for Route {
    fn from(tab: Tab) -> Self {
        match tab {
            Tab::Campaign => Route::Campaign {},
            Tab::Analysis => Route::Analysis {},
            Tab::Learn => Route::Learn {},
        }
    }
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("AdGauge – v{}", env!("CARGO_PKG_VERSION")))
                        .with_inner_size(LogicalSize::new(960.0, 820.0)),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn tab_link(tab: Tab, label: &str) -> Element {
    rsx!(Link { class: "navbar__link", active_class: "active", to: Route::from(tab), "{label}" })
}

#[component]
fn App() -> Element {
    i18n::init();

    // AppNavbar (shared) updates this via context on language selection.
    let lang_code = use_language_provider();
    use_session_provider();
    register_nav(NavBuilder { link: tab_link });

    let dir = i18n::text_direction(&lang_code());

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper forces a full remount on language change.
        div {
            key: "{lang_code()}",
            class: "app-shell",
            dir: "{dir}",
            lang: "{lang_code()}",
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop layout: the shared navbar above the routed page.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
