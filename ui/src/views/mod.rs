//! Page components. Each platform maps its router's routes onto these, one
//! per [`Tab`].

mod analysis;
pub use analysis::Analysis;

mod campaign;
pub use campaign::Campaign;

mod learn;
pub use learn::Learn;

/// The three top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Campaign,
    Analysis,
    Learn,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Campaign, Tab::Analysis, Tab::Learn];

    pub fn label(self) -> String {
        match self {
            Tab::Campaign => crate::t!("tab-campaign"),
            Tab::Analysis => crate::t!("tab-analysis"),
            Tab::Learn => crate::t!("tab-learn"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_labels_are_distinct() {
        crate::i18n::init();
        let mut labels: Vec<_> = Tab::ALL.iter().map(|t| t.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Tab::ALL.len());
    }
}
