use dioxus::prelude::*;

use crate::core::chart::ChartModel;
use crate::core::DerivedMetrics;
use crate::t;

/// Bar chart of the four derived metrics on a shared 0-based axis.
#[component]
pub fn MetricsChart(metrics: DerivedMetrics) -> Element {
    let model = ChartModel::from_metrics(&metrics);
    let aria = t!("chart-aria");

    let ticks: Vec<(String, String)> = model
        .ticks
        .iter()
        .map(|tick| (tick.label.clone(), format!("bottom: {:.1}%", tick.offset_pct)))
        .collect();
    let bars: Vec<(&'static str, String, String)> = model
        .bars
        .iter()
        .map(|bar| {
            (
                bar.kind.abbreviation(),
                format!("height: {:.1}%", bar.height_pct),
                bar.value.to_string(),
            )
        })
        .collect();

    rsx! {
        div { class: "metrics-chart",
            h2 { {t!("chart-heading")} }
            div {
                class: "metrics-chart__plot",
                role: "img",
                aria_label: "{aria}",
                div { class: "metrics-chart__axis",
                    for (label, style) in ticks {
                        span {
                            key: "{label}",
                            class: "metrics-chart__tick",
                            style: "{style}",
                            "{label}"
                        }
                    }
                }
                div { class: "metrics-chart__bars",
                    for (name, style, value) in bars {
                        div { key: "{name}", class: "metrics-chart__column",
                            div { class: "metrics-chart__track",
                                div {
                                    class: "metrics-chart__bar",
                                    style: "{style}",
                                    title: "{value}",
                                }
                            }
                            span { class: "metrics-chart__label", "{name}" }
                        }
                    }
                }
            }
        }
    }
}
