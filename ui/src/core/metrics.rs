//! Derived ratio calculations for a campaign.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::counters::CampaignCounters;

/// A ratio rendered with two fractional digits, or the zero-sentinel `"0"`
/// when the ratio was undefined (its divisor guard failed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricValue(String);

impl MetricValue {
    pub const ZERO_SENTINEL: &'static str = "0";

    pub fn sentinel() -> Self {
        Self(Self::ZERO_SENTINEL.to_string())
    }

    /// Round the exact binary value half away from zero to two decimals and
    /// render with exactly two fractional digits. Non-finite or out-of-range
    /// ratios become the sentinel.
    pub fn from_ratio(value: f64) -> Self {
        let Some(exact) = Decimal::from_f64_retain(value) else {
            return Self::sentinel();
        };
        let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        // Avoid "-0.00" for tiny negative ratios.
        let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };
        Self(format!("{rounded:.2}"))
    }

    pub fn is_sentinel(&self) -> bool {
        self.0 == Self::ZERO_SENTINEL
    }

    /// Numeric value, `0.0` for the sentinel.
    pub fn value(&self) -> f64 {
        self.0.parse().unwrap_or(0.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MetricValue {
    fn default() -> Self {
        Self::sentinel()
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub ctr: MetricValue,
    pub cpc: MetricValue,
    pub cpm: MetricValue,
    pub roas: MetricValue,
}

impl DerivedMetrics {
    pub fn from_counters(counters: &CampaignCounters) -> Self {
        let parsed = counters.parsed();

        let ctr = guarded(parsed.impressions > 0.0, || {
            parsed.clicks / parsed.impressions * 100.0
        });
        let cpc = guarded(parsed.clicks > 0.0, || parsed.cost / parsed.clicks);
        let cpm = guarded(parsed.impressions > 0.0, || {
            parsed.cost / parsed.impressions * 1000.0
        });
        let roas = guarded(parsed.cost > 0.0 && parsed.conversions > 0.0, || {
            parsed.conversions / parsed.cost
        });

        Self { ctr, cpc, cpm, roas }
    }

    pub fn get(&self, kind: MetricKind) -> &MetricValue {
        match kind {
            MetricKind::Ctr => &self.ctr,
            MetricKind::Cpc => &self.cpc,
            MetricKind::Cpm => &self.cpm,
            MetricKind::Roas => &self.roas,
        }
    }
}

fn guarded(defined: bool, ratio: impl FnOnce() -> f64) -> MetricValue {
    if defined {
        MetricValue::from_ratio(ratio())
    } else {
        MetricValue::sentinel()
    }
}

/// The four tracked ratios, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Ctr,
    Cpc,
    Cpm,
    Roas,
}

impl MetricKind {
    pub const ALL: [MetricKind; 4] = [
        MetricKind::Ctr,
        MetricKind::Cpc,
        MetricKind::Cpm,
        MetricKind::Roas,
    ];

    pub fn abbreviation(self) -> &'static str {
        match self {
            MetricKind::Ctr => "CTR",
            MetricKind::Cpc => "CPC",
            MetricKind::Cpm => "CPM",
            MetricKind::Roas => "ROAS",
        }
    }

    /// Classification threshold.
    pub fn threshold(self) -> f64 {
        match self {
            MetricKind::Ctr => 1.0,
            MetricKind::Cpc => 1.0,
            MetricKind::Cpm => 30.0,
            MetricKind::Roas => 1.0,
        }
    }

    pub fn higher_is_better(self) -> bool {
        matches!(self, MetricKind::Ctr | MetricKind::Roas)
    }

    pub fn unit(self) -> MetricUnit {
        match self {
            MetricKind::Ctr => MetricUnit::Percent,
            MetricKind::Cpc | MetricKind::Cpm => MetricUnit::Currency,
            MetricKind::Roas => MetricUnit::Ratio,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricUnit {
    Percent,
    Currency,
    Ratio,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counters(impressions: &str, clicks: &str, cost: &str, conversions: &str) -> CampaignCounters {
        CampaignCounters {
            reach: String::new(),
            impressions: impressions.into(),
            clicks: clicks.into(),
            conversions: conversions.into(),
            cost: cost.into(),
        }
    }

    #[test]
    fn reference_campaign() {
        let metrics = DerivedMetrics::from_counters(&counters("1000", "20", "50", "5"));
        assert_eq!(metrics.ctr.as_str(), "2.00");
        assert_eq!(metrics.cpc.as_str(), "2.50");
        assert_eq!(metrics.cpm.as_str(), "50.00");
        assert_eq!(metrics.roas.as_str(), "0.10");
    }

    #[test]
    fn zero_impressions_zero_ctr_and_cpm() {
        for (clicks, cost, conversions) in [("0", "0", "0"), ("15", "80", "3"), ("", "1", "9")] {
            let metrics = DerivedMetrics::from_counters(&counters("0", clicks, cost, conversions));
            assert_eq!(metrics.ctr.as_str(), "0");
            assert_eq!(metrics.cpm.as_str(), "0");
        }
    }

    #[test]
    fn zero_clicks_zero_cpc() {
        let metrics = DerivedMetrics::from_counters(&counters("500", "0", "120", "4"));
        assert!(metrics.cpc.is_sentinel());
        // CTR is defined (impressions > 0) but computes to zero.
        assert_eq!(metrics.ctr.as_str(), "0.00");
        assert!(!metrics.ctr.is_sentinel());
    }

    #[test]
    fn roas_needs_cost_and_conversions() {
        let no_cost = DerivedMetrics::from_counters(&counters("100", "10", "0", "4"));
        let no_conversions = DerivedMetrics::from_counters(&counters("100", "10", "25", ""));
        assert!(no_cost.roas.is_sentinel());
        assert!(no_conversions.roas.is_sentinel());
    }

    #[test]
    fn all_blank_is_all_sentinel() {
        let metrics = DerivedMetrics::from_counters(&CampaignCounters::default());
        assert_eq!(metrics, DerivedMetrics::default());
        for kind in MetricKind::ALL {
            assert!(metrics.get(kind).is_sentinel());
        }
    }

    #[test]
    fn invalid_text_treated_as_zero() {
        let metrics = DerivedMetrics::from_counters(&counters("lots", "20", "50", "5"));
        assert!(metrics.ctr.is_sentinel());
        assert_eq!(metrics.cpc.as_str(), "2.50");
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(MetricValue::from_ratio(0.125).as_str(), "0.13");
        assert_eq!(MetricValue::from_ratio(1.0 / 3.0).as_str(), "0.33");
        assert_eq!(MetricValue::from_ratio(2.0 / 3.0).as_str(), "0.67");
        assert_eq!(MetricValue::from_ratio(-0.001).as_str(), "0.00");
        assert_eq!(MetricValue::from_ratio(-0.125).as_str(), "-0.13");
    }

    #[test]
    fn values_just_below_a_tie_round_down() {
        // 3/40 and 9/200 are stored slightly below 0.075 and 0.045.
        let a = DerivedMetrics::from_counters(&counters("100", "40", "3", ""));
        let b = DerivedMetrics::from_counters(&counters("100", "200", "9", ""));
        assert_eq!((a.cpc.as_str(), b.cpc.as_str()), ("0.07", "0.04"));
        assert_eq!(MetricValue::from_ratio(1.005).as_str(), "1.00");
    }

    #[test]
    fn non_finite_ratios_fall_back_to_sentinel() {
        assert!(MetricValue::from_ratio(f64::INFINITY).is_sentinel());
        assert!(MetricValue::from_ratio(f64::NAN).is_sentinel());
    }

    #[test]
    fn negative_numerators_pass_through() {
        let metrics = DerivedMetrics::from_counters(&counters("1000", "10", "-50", "2"));
        assert_eq!(metrics.cpc.as_str(), "-5.00");
        assert_eq!(metrics.cpm.as_str(), "-50.00");
        // Non-positive cost fails the ROAS guard.
        assert!(metrics.roas.is_sentinel());
    }

    #[test]
    fn calculation_is_idempotent() {
        let input = counters("4321", "87", "19.99", "3");
        assert_eq!(
            DerivedMetrics::from_counters(&input),
            DerivedMetrics::from_counters(&input)
        );
    }

    #[test]
    fn sentinel_value_is_zero() {
        assert_eq!(MetricValue::sentinel().value(), 0.0);
        assert_eq!(MetricValue::from_ratio(2.5).value(), 2.5);
    }
}
