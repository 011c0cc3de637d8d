use dioxus::prelude::*;

use crate::t;

const VIDEO_CTR: &str = "https://www.youtube.com/embed/7uD_XIgkME0";
const VIDEO_CPM_CPC: &str = "https://www.youtube.com/embed/B9g3J3Pb4Is";

#[component]
pub fn Learn() -> Element {
    let ctr_title = t!("video-ctr-title");
    let cpm_cpc_title = t!("video-cpm-cpc-title");

    rsx! {
        section { class: "page page-learn",
            h1 { {t!("tab-learn")} }

            div { class: "card learn",
                h2 { {t!("learn-definitions")} }
                ul { class: "learn__definitions",
                    li { strong { "CTR: " } {t!("learn-ctr")} }
                    li { strong { "CPC: " } {t!("learn-cpc")} }
                    li { strong { "CPM: " } {t!("learn-cpm")} }
                    li { strong { "ROAS: " } {t!("learn-roas")} }
                }

                h2 { {t!("learn-videos")} }
                div { class: "learn__videos",
                    iframe {
                        class: "learn__video",
                        height: "200",
                        src: VIDEO_CTR,
                        title: "{ctr_title}",
                        allowfullscreen: true,
                    }
                    iframe {
                        class: "learn__video",
                        height: "200",
                        src: VIDEO_CPM_CPC,
                        title: "{cpm_cpc_title}",
                        allowfullscreen: true,
                    }
                }
            }
        }
    }
}
