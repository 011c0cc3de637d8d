//! Single-slot holder for a metrics set saved for side-by-side comparison.
//! Never persisted.

use super::metrics::{DerivedMetrics, MetricKind, MetricValue};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonSlot {
    saved: Option<DerivedMetrics>,
}

impl ComparisonSlot {
    /// Overwrites any previously saved snapshot.
    pub fn save(&mut self, metrics: &DerivedMetrics) {
        self.saved = Some(metrics.clone());
    }

    pub fn clear(&mut self) {
        self.saved = None;
    }

    pub fn get(&self) -> Option<&DerivedMetrics> {
        self.saved.as_ref()
    }

    /// Current vs saved values in display order, or `None` when empty.
    pub fn rows(&self, current: &DerivedMetrics) -> Option<Vec<ComparisonRow>> {
        let saved = self.saved.as_ref()?;
        Some(
            MetricKind::ALL
                .into_iter()
                .map(|kind| ComparisonRow {
                    kind,
                    current: current.get(kind).clone(),
                    saved: saved.get(kind).clone(),
                })
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub kind: MetricKind,
    pub current: MetricValue,
    pub saved: MetricValue,
}
