//! Session state behind the campaign views.
//!
//! `CampaignSession` owns the raw counters, the campaign type and the
//! comparison slot. Every mutation of persisted state is mirrored to the
//! injected store immediately; write failures are logged and otherwise
//! ignored.

use std::rc::Rc;

use super::advice::{self, Recommendation};
use super::counters::{CampaignCounters, CampaignType, CounterField};
use super::metrics::DerivedMetrics;
use super::snapshot::{ComparisonRow, ComparisonSlot};
use super::storage::{self, KeyValueStore};

#[derive(Clone)]
pub struct CampaignSession {
    counters: CampaignCounters,
    campaign_type: CampaignType,
    comparison: ComparisonSlot,
    store: Rc<dyn KeyValueStore>,
}

impl CampaignSession {
    /// Start a session from whatever `store` holds, defaulting missing parts.
    pub fn restore(store: Rc<dyn KeyValueStore>) -> Self {
        let stored = storage::load_campaign(&*store);
        Self {
            counters: stored.counters.unwrap_or_default(),
            campaign_type: stored.campaign_type.unwrap_or_default(),
            comparison: ComparisonSlot::default(),
            store,
        }
    }

    pub fn counters(&self) -> &CampaignCounters {
        &self.counters
    }

    pub fn campaign_type(&self) -> CampaignType {
        self.campaign_type
    }

    pub fn update_field(&mut self, field: CounterField, raw: impl Into<String>) {
        self.counters.set(field, raw);
        self.persist();
    }

    pub fn set_campaign_type(&mut self, campaign_type: CampaignType) {
        self.campaign_type = campaign_type;
        self.persist();
    }

    pub fn metrics(&self) -> DerivedMetrics {
        DerivedMetrics::from_counters(&self.counters)
    }

    pub fn recommendations(&self) -> Vec<Recommendation> {
        advice::recommendations(&self.metrics())
    }

    pub fn save_comparison(&mut self) {
        let metrics = self.metrics();
        self.comparison.save(&metrics);
    }

    pub fn clear_comparison(&mut self) {
        self.comparison.clear();
    }

    pub fn comparison(&self) -> Option<&DerivedMetrics> {
        self.comparison.get()
    }

    pub fn comparison_rows(&self) -> Option<Vec<ComparisonRow>> {
        self.comparison.rows(&self.metrics())
    }

    fn persist(&self) {
        if let Err(err) = storage::save_campaign(&*self.store, &self.counters, self.campaign_type) {
            tracing::warn!("failed to persist campaign inputs: {err}");
        }
    }
}

impl PartialEq for CampaignSession {
    fn eq(&self, other: &Self) -> bool {
        self.counters == other.counters
            && self.campaign_type == other.campaign_type
            && self.comparison == other.comparison
            && Rc::ptr_eq(&self.store, &other.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::{MemoryStore, StorageError, CAMPAIGN_TYPE_KEY, COUNTERS_KEY};

    fn fresh() -> (MemoryStore, CampaignSession) {
        let store = MemoryStore::new();
        let session = CampaignSession::restore(Rc::new(store.clone()));
        (store, session)
    }

    #[test]
    fn defaults_when_store_is_empty() {
        let (store, session) = fresh();
        assert_eq!(session.counters(), &CampaignCounters::default());
        assert_eq!(session.campaign_type(), CampaignType::Traffic);
        assert!(session.comparison().is_none());
        // Restoring alone writes nothing.
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn every_mutation_is_persisted() {
        let (store, mut session) = fresh();

        session.update_field(CounterField::Clicks, "20");
        let stored = store.snapshot();
        assert!(stored[COUNTERS_KEY].contains("\"clicks\":\"20\""));
        assert_eq!(stored[CAMPAIGN_TYPE_KEY], "traffic");

        session.set_campaign_type(CampaignType::Sales);
        assert_eq!(store.snapshot()[CAMPAIGN_TYPE_KEY], "sales");
    }

    #[test]
    fn new_session_restores_previous_inputs() {
        let (store, mut session) = fresh();
        session.update_field(CounterField::Impressions, "1000");
        session.update_field(CounterField::Clicks, "20");
        session.update_field(CounterField::Cost, "50");
        session.update_field(CounterField::Conversions, "5");
        session.set_campaign_type(CampaignType::Video);

        let restored = CampaignSession::restore(Rc::new(store));
        assert_eq!(restored.counters(), session.counters());
        assert_eq!(restored.campaign_type(), CampaignType::Video);
        assert_eq!(restored.metrics().cpm.as_str(), "50.00");
    }

    #[test]
    fn comparison_is_transient() {
        let (store, mut session) = fresh();
        session.update_field(CounterField::Impressions, "1000");
        session.update_field(CounterField::Clicks, "20");
        session.save_comparison();
        assert_eq!(session.comparison(), Some(&session.metrics()));

        // Snapshot keeps the values from save time.
        session.update_field(CounterField::Clicks, "40");
        assert_eq!(session.comparison().map(|m| m.ctr.as_str()), Some("2.00"));
        let rows = session.comparison_rows().expect("rows present");
        assert_eq!(rows[0].current.as_str(), "4.00");

        let restored = CampaignSession::restore(Rc::new(store));
        assert!(restored.comparison().is_none());

        session.clear_comparison();
        assert!(session.comparison().is_none());
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("offline".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write("quota exceeded".into()))
        }
    }

    #[test]
    fn storage_failures_do_not_interrupt_the_session() {
        let mut session = CampaignSession::restore(Rc::new(FailingStore));
        session.update_field(CounterField::Cost, "75");
        assert_eq!(session.counters().cost, "75");
        assert_eq!(
            session.recommendations(),
            vec![Recommendation::CtrWeak, Recommendation::RoasWeak]
        );
    }
}
