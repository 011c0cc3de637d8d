//! Platform-agnostic campaign logic: inputs, derived metrics, advice,
//! comparison and persistence.

pub mod advice;
pub mod chart;
pub mod counters;
pub mod format;
pub mod metrics;
pub mod platform;
pub mod session;
pub mod snapshot;
pub mod storage;

pub use counters::{CampaignCounters, CampaignType, CounterField};
pub use metrics::{DerivedMetrics, MetricKind, MetricValue};
pub use session::CampaignSession;
