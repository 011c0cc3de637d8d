use dioxus::prelude::*;

use crate::core::format::format_metric;
use crate::core::snapshot::ComparisonRow;
use crate::t;

#[component]
pub fn ComparisonList(rows: Vec<ComparisonRow>, currency: String) -> Element {
    let versus = t!("comparison-versus");
    let lines: Vec<(&'static str, String, String)> = rows
        .iter()
        .map(|row| {
            (
                row.kind.abbreviation(),
                format_metric(row.kind, &row.current, &currency),
                format_metric(row.kind, &row.saved, &currency),
            )
        })
        .collect();

    rsx! {
        div { class: "comparison",
            h2 { {t!("comparison-heading")} }
            ul { class: "comparison__list",
                for (name, current, saved) in lines {
                    li { key: "{name}", class: "comparison__row",
                        strong { "{name}:" }
                        " {current} "
                        span { class: "comparison__versus", "{versus}" }
                        " {saved}"
                    }
                }
            }
        }
    }
}
