//! Layout model for the metrics bar chart.
//!
//! The view only positions elements; scaling and tick placement live here so
//! they can be tested without a renderer.

use super::format::format_tick;
use super::metrics::{DerivedMetrics, MetricKind};

const TICK_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub kind: MetricKind,
    pub value: f64,
    /// Bar height relative to the axis maximum, 0–100.
    pub height_pct: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartTick {
    pub label: String,
    /// Offset from the axis origin, 0–100.
    pub offset_pct: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub bars: Vec<ChartBar>,
    pub ticks: Vec<ChartTick>,
    pub axis_max: f64,
}

impl ChartModel {
    pub fn from_metrics(metrics: &DerivedMetrics) -> Self {
        let values: Vec<(MetricKind, f64)> = MetricKind::ALL
            .into_iter()
            .map(|kind| (kind, metrics.get(kind).value().max(0.0)))
            .collect();

        let peak = values.iter().map(|(_, v)| *v).fold(0.0, f64::max);
        let axis_max = nice_ceiling(peak);

        let bars = values
            .into_iter()
            .map(|(kind, value)| ChartBar {
                kind,
                value,
                height_pct: (value / axis_max * 100.0).clamp(0.0, 100.0),
            })
            .collect();

        let ticks = (0..TICK_COUNT)
            .map(|idx| {
                let fraction = idx as f64 / (TICK_COUNT - 1) as f64;
                ChartTick {
                    label: format_tick(axis_max * fraction),
                    offset_pct: fraction * 100.0,
                }
            })
            .collect();

        Self {
            bars,
            ticks,
            axis_max,
        }
    }
}

/// Smallest of 1, 2, 2.5, 5 or 10 × 10^k that is ≥ `value`; never below 1.
fn nice_ceiling(value: f64) -> f64 {
    if !value.is_finite() || value <= 1.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .map(|step| step * magnitude)
        .find(|candidate| *candidate >= value)
        .unwrap_or(10.0 * magnitude)
}
