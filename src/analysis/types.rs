//! Report types produced by an analysis run.
//!
//! These are the JSON schema of the report layer; absent sections are
//! omitted rather than serialized as null.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::reference::{FoodEnhancer, FoodInhibitor, SupplementForm};

/// Placeholder for guidance fields the reference tables leave unset.
pub const DEFAULT_GUIDANCE: &str = "consult per-supplement guidance";

/// Pharmaceutical forms sorted by bioavailability, plus the table's
/// curated picks.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FormRanking {
    /// Descending by bioavailability; ties keep table order.
    pub ranked: Vec<SupplementForm>,
    pub optimal: String,
    pub best_value: String,
    /// Top form vs the 1.0 baseline, e.g. "46.0x vs standard form".
    pub baseline_ratio: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimingReport {
    pub optimal_window: String,
    pub ideal_clock_time: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub factors: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub special_adjustments: BTreeMap<String, String>,
    pub rationale: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FoodInteractionReport {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enhancers: Vec<FoodEnhancer>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inhibitors: Vec<FoodInhibitor>,
    pub meal_timing: String,
}

/// Catalog enhancer matched to the analyzed supplement.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EnhancerMatch {
    pub name: String,
    pub absorption_increase: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typical_dose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mechanism: Option<String>,
    pub essential: bool,
}

/// Catalog inhibitor matched to the analyzed supplement.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "category", rename_all = "kebab-case")]
pub enum InhibitorMatch {
    TransporterCompetition {
        interaction: String,
        absorption_reduction: String,
        mitigation: String,
    },
    NaturalChelator {
        name: String,
        sources: Vec<String>,
        absorption_reduction: String,
        mitigations: Vec<String>,
    },
}

impl InhibitorMatch {
    /// Catalog key the match came from; used for frequency statistics.
    pub fn key(&self) -> &str {
        match self {
            InhibitorMatch::TransporterCompetition { interaction, .. } => interaction,
            InhibitorMatch::NaturalChelator { name, .. } => name,
        }
    }
}

/// Profile-driven recommendations.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub form: String,
    pub timing: String,
    pub dose_adjustment: String,
    pub precautions: Vec<String>,
    pub monitoring: Vec<String>,
}

/// Complete analysis for one supplement. Owned by the caller and never
/// mutated after construction.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnalysisResult {
    pub supplement: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forms: Option<FormRanking>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<TimingReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_interactions: Option<FoodInteractionReport>,
    pub enhancers: Vec<EnhancerMatch>,
    pub inhibitors: Vec<InhibitorMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Recommendation>,
    pub score: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inhibitor_match_serializes_with_category_tag() {
        let m = InhibitorMatch::TransporterCompetition {
            interaction: "iron_vs_zinc".to_string(),
            absorption_reduction: "40-60%".to_string(),
            mitigation: "separate doses by 2h".to_string(),
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["category"], "transporter-competition");
        assert_eq!(json["interaction"], "iron_vs_zinc");

        let m = InhibitorMatch::NaturalChelator {
            name: "phytates".to_string(),
            sources: vec!["Legumes".to_string()],
            absorption_reduction: "40-80%".to_string(),
            mitigations: vec!["soaking".to_string()],
        };
        assert_eq!(serde_json::to_value(&m).unwrap()["category"], "natural-chelator");
        assert_eq!(m.key(), "phytates");
    }
}
