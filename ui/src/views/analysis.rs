use dioxus::prelude::*;

use crate::components::{ComparisonList, ExportButton, MetricsChart};
use crate::context::use_session;
use crate::core::advice::classify_metric;
use crate::core::format::format_metric;
use crate::core::MetricKind;
use crate::export::ExportTable;
use crate::t;

#[component]
pub fn Analysis() -> Element {
    let mut session = use_session();
    let (metrics, recommendations, comparison, campaign_type) = {
        let current = session.read();
        (
            current.metrics(),
            current.recommendations(),
            current.comparison_rows(),
            current.campaign_type(),
        )
    };
    let currency = t!("currency-unit");

    let lines: Vec<(MetricKind, String, String, String)> = MetricKind::ALL
        .into_iter()
        .map(|kind| {
            let performance = classify_metric(&metrics, kind);
            (
                kind,
                format_metric(kind, metrics.get(kind), &currency),
                performance.css_class().to_string(),
                performance.label(),
            )
        })
        .collect();

    let export_table = ExportTable::from_metrics(&metrics, campaign_type);

    rsx! {
        section { class: "page page-analysis",
            h1 { {t!("tab-analysis")} }

            div { class: "card analysis",
                ul { class: "metric-list",
                    for (kind, display, class_name, verdict) in lines {
                        li {
                            key: "{kind.abbreviation()}",
                            class: "metric {class_name}",
                            title: "{verdict}",
                            strong { class: "metric__name", "{kind.abbreviation()}:" }
                            " "
                            span { class: "metric__value", "{display}" }
                        }
                    }
                }

                div { class: "analysis__recommendations",
                    h2 { {t!("recommendations-heading")} }
                    ul {
                        for (idx, rec) in recommendations.into_iter().enumerate() {
                            li { key: "{idx}", {rec.message()} }
                        }
                    }
                }

                MetricsChart { metrics: metrics.clone() }

                div { class: "analysis__actions",
                    ExportButton { table: export_table }
                    button {
                        r#type: "button",
                        class: "button",
                        onclick: move |_| session.with_mut(|s| s.save_comparison()),
                        {t!("action-save-comparison")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| session.with_mut(|s| s.clear_comparison()),
                        {t!("action-clear-comparison")}
                    }
                }

                if let Some(rows) = comparison {
                    ComparisonList { rows, currency: currency.clone() }
                }
            }
        }
    }
}
