//! Raw campaign inputs as typed by the user.
//!
//! Values stay as text until a calculation needs them so the form can echo
//! back exactly what was entered (including partial input such as `"12."`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignCounters {
    #[serde(default)]
    pub reach: String,
    #[serde(default)]
    pub impressions: String,
    #[serde(default)]
    pub clicks: String,
    #[serde(default)]
    pub conversions: String,
    #[serde(default)]
    pub cost: String,
}

impl CampaignCounters {
    pub fn get(&self, field: CounterField) -> &str {
        match field {
            CounterField::Reach => &self.reach,
            CounterField::Impressions => &self.impressions,
            CounterField::Clicks => &self.clicks,
            CounterField::Conversions => &self.conversions,
            CounterField::Cost => &self.cost,
        }
    }

    pub fn set(&mut self, field: CounterField, raw: impl Into<String>) {
        let slot = match field {
            CounterField::Reach => &mut self.reach,
            CounterField::Impressions => &mut self.impressions,
            CounterField::Clicks => &mut self.clicks,
            CounterField::Conversions => &mut self.conversions,
            CounterField::Cost => &mut self.cost,
        };
        *slot = raw.into();
    }

    /// Numeric view of every field, coerced with [`coerce_number`].
    pub fn parsed(&self) -> ParsedCounters {
        ParsedCounters {
            reach: coerce_number(&self.reach),
            impressions: coerce_number(&self.impressions),
            clicks: coerce_number(&self.clicks),
            conversions: coerce_number(&self.conversions),
            cost: coerce_number(&self.cost),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParsedCounters {
    pub reach: f64,
    pub impressions: f64,
    pub clicks: f64,
    pub conversions: f64,
    pub cost: f64,
}

/// Form fields in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterField {
    Reach,
    Impressions,
    Clicks,
    Conversions,
    Cost,
}

impl CounterField {
    pub const ALL: [CounterField; 5] = [
        CounterField::Reach,
        CounterField::Impressions,
        CounterField::Clicks,
        CounterField::Conversions,
        CounterField::Cost,
    ];

    /// Stable identifier used for the input `name`/`id` attributes.
    pub fn key(self) -> &'static str {
        match self {
            CounterField::Reach => "reach",
            CounterField::Impressions => "impressions",
            CounterField::Clicks => "clicks",
            CounterField::Conversions => "conversions",
            CounterField::Cost => "cost",
        }
    }
}

/// Lenient text → number conversion. Blank, malformed and non-finite input
/// all become `0.0`; surrounding whitespace is ignored.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Campaign objective. Purely descriptive; calculations ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignType {
    #[default]
    Traffic,
    Messages,
    Leads,
    Sales,
    Video,
}

impl CampaignType {
    pub const ALL: [CampaignType; 5] = [
        CampaignType::Traffic,
        CampaignType::Messages,
        CampaignType::Leads,
        CampaignType::Sales,
        CampaignType::Video,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CampaignType::Traffic => "traffic",
            CampaignType::Messages => "messages",
            CampaignType::Leads => "leads",
            CampaignType::Sales => "sales",
            CampaignType::Video => "video",
        }
    }

    /// Localized option label.
    pub fn label(self) -> String {
        match self {
            CampaignType::Traffic => crate::t!("campaign-type-traffic"),
            CampaignType::Messages => crate::t!("campaign-type-messages"),
            CampaignType::Leads => crate::t!("campaign-type-leads"),
            CampaignType::Sales => crate::t!("campaign-type-sales"),
            CampaignType::Video => crate::t!("campaign-type-video"),
        }
    }
}

impl fmt::Display for CampaignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown campaign type `{0}`")]
pub struct UnknownCampaignType(pub String);

impl FromStr for CampaignType {
    type Err = UnknownCampaignType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CampaignType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s.trim())
            .ok_or_else(|| UnknownCampaignType(s.to_string()))
    }
}
