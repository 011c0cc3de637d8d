use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::context::{use_language_provider, use_session_provider};
use ui::i18n;
use ui::views::{Analysis, Campaign, Learn, Tab};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
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

fn tab_link(tab: Tab, label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        active_class: "active",
        to: Route::from(tab),
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();
    register_nav(NavBuilder { link: tab_link });

    let lang_code = use_language_provider();
    use_session_provider();
    let dir = i18n::text_direction(&lang_code());

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        // Keyed by language so every view re-renders its translated strings.
        div {
            key: "{lang_code()}",
            class: "app-shell",
            dir: "{dir}",
            lang: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Web layout: the shared navbar above the routed page.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
