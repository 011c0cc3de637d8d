//! Formatting helpers for presenting metrics.

use super::metrics::{MetricKind, MetricUnit, MetricValue};

/// Currency code printed next to monetary metrics in exports.
pub const CURRENCY_CODE: &str = "EGP";

pub fn format_percent(value: &MetricValue) -> String {
    format!("{value}%")
}

pub fn format_currency(value: &MetricValue, unit: &str) -> String {
    format!("{value} {unit}")
}

/// Render `value` with the unit its metric carries, using `currency` for
/// monetary ratios.
pub fn format_metric(kind: MetricKind, value: &MetricValue, currency: &str) -> String {
    match kind.unit() {
        MetricUnit::Percent => format_percent(value),
        MetricUnit::Currency => format_currency(value, currency),
        MetricUnit::Ratio => value.to_string(),
    }
}

/// Compact axis label: integers without decimals, otherwise up to three
/// so quarter steps of 2.5 (0.625, 1.875) print exactly.
pub fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.3}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_units() {
        let v = MetricValue::from_ratio(2.5);
        assert_eq!(format_metric(MetricKind::Ctr, &v, CURRENCY_CODE), "2.50%");
        assert_eq!(format_metric(MetricKind::Cpc, &v, CURRENCY_CODE), "2.50 EGP");
        assert_eq!(format_metric(MetricKind::Roas, &v, CURRENCY_CODE), "2.50");
        assert_eq!(
            format_metric(MetricKind::Cpm, &MetricValue::sentinel(), "جنيه"),
            "0 جنيه"
        );
    }

    #[test]
    fn ticks_drop_trailing_zeros() {
        assert_eq!(format_tick(10.0), "10");
        assert_eq!(format_tick(0.5), "0.5");
        assert_eq!(format_tick(0.25), "0.25");
        assert_eq!(format_tick(12.5), "12.5");
        assert_eq!(format_tick(0.625), "0.625");
    }
}
