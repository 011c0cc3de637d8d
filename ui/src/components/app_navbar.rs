use crate::i18n;
use crate::t;
use crate::views::Tab;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms register a `NavBuilder` so `ui` can render tab links without
/// knowing each platform's `Route` enum.
///
/// The closure receives the tab and its localized label and must return a
/// `Link` (or an element styled as one) that already contains the label:
/// ```ignore
/// fn tab_link(tab: Tab, label: &str) -> Element {
///     rsx!(Link { class: "navbar__link", to: Route::from(tab), "{label}" })
/// }
/// register_nav(NavBuilder { link: tab_link });
/// ```
pub struct NavBuilder {
    pub link: fn(tab: Tab, label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal provided by the platform root, if any.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let mut current_lang = use_signal(i18n::current_language);
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    #[cfg(debug_assertions)]
    tracing::debug!(lang = %lang_marker, "AppNavbar render");

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!("couldn't switch language to {val}: {err}"),
        }
    };

    let links: Option<Vec<Element>> = NAV_BUILDER.get().map(|b| {
        Tab::ALL
            .into_iter()
            .map(|tab| (b.link)(tab, &tab.label()))
            .collect()
    });

    let title = t!("app-title");
    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker keeps a reactive dependency on the global language signal.
            div { style: "display:none", "{lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "{title}" }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if let Some(links) = links {
                    nav { class: "navbar__links",
                        for link in links {
                            {link}
                        }
                    }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in langs() {
                                option {
                                    key: "{code}",
                                    value: "{code}",
                                    selected: code == current_lang(),
                                    "{code}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
