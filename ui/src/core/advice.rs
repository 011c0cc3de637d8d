//! Advisory rules and traffic-light classification over derived metrics.
//!
//! Both helpers are pure; localized strings are resolved at the edge via
//! [`Recommendation::message`] and [`Performance::label`].

use super::metrics::{DerivedMetrics, MetricKind, MetricValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    CtrWeak,
    CpcHigh,
    CpmHigh,
    RoasWeak,
    /// Emitted alone when no other rule fires.
    Healthy,
}

impl Recommendation {
    pub fn message(self) -> String {
        match self {
            Recommendation::CtrWeak => crate::t!("rec-ctr-weak"),
            Recommendation::CpcHigh => crate::t!("rec-cpc-high"),
            Recommendation::CpmHigh => crate::t!("rec-cpm-high"),
            Recommendation::RoasWeak => crate::t!("rec-roas-weak"),
            Recommendation::Healthy => crate::t!("rec-healthy"),
        }
    }
}

/// Evaluate the fixed rule set in order. Never returns an empty list.
pub fn recommendations(metrics: &DerivedMetrics) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if metrics.ctr.value() < MetricKind::Ctr.threshold() {
        recs.push(Recommendation::CtrWeak);
    }
    if metrics.cpc.value() > MetricKind::Cpc.threshold() {
        recs.push(Recommendation::CpcHigh);
    }
    if metrics.cpm.value() > MetricKind::Cpm.threshold() {
        recs.push(Recommendation::CpmHigh);
    }
    if metrics.roas.value() < MetricKind::Roas.threshold() {
        recs.push(Recommendation::RoasWeak);
    }

    if recs.is_empty() {
        recs.push(Recommendation::Healthy);
    }
    recs
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Performance {
    Good,
    Bad,
    Neutral,
}

impl Performance {
    pub fn css_class(self) -> &'static str {
        match self {
            Performance::Good => "metric--good",
            Performance::Bad => "metric--bad",
            Performance::Neutral => "metric--neutral",
        }
    }

    pub fn label(self) -> String {
        match self {
            Performance::Good => crate::t!("performance-good"),
            Performance::Bad => crate::t!("performance-bad"),
            Performance::Neutral => crate::t!("performance-neutral"),
        }
    }
}

/// Neutral for the zero-sentinel regardless of threshold or direction,
/// otherwise good/bad against `threshold` (inclusive).
pub fn classify(value: &MetricValue, threshold: f64, higher_is_better: bool) -> Performance {
    if value.is_sentinel() {
        return Performance::Neutral;
    }
    let v = value.value();
    let good = if higher_is_better {
        v >= threshold
    } else {
        v <= threshold
    };
    if good {
        Performance::Good
    } else {
        Performance::Bad
    }
}

pub fn classify_metric(metrics: &DerivedMetrics, kind: MetricKind) -> Performance {
    classify(metrics.get(kind), kind.threshold(), kind.higher_is_better())
}
