//! Scans the cross-supplement catalogs for entries that apply to one
//! supplement.
//!
//! Two matching modes are in play, preserved from the curated tables:
//! `applies_to`/`affects` lists hold exact supplement names and are matched
//! case-sensitively; combo and competition keys (`vitamin_c_for_iron`,
//! `iron_vs_zinc`) are matched by case-insensitive substring of the
//! supplement name, so a compound key matches every supplement it names.
//! The substring mode can over- or under-match names that happen to appear
//! inside unrelated keys; callers get exactly what the tables imply.

use crate::reference::{EnhancerCatalog, InhibitorCatalog};

use super::types::{EnhancerMatch, InhibitorMatch};

pub fn match_enhancers(catalog: &EnhancerCatalog, supplement: &str) -> Vec<EnhancerMatch> {
    let mut matches = Vec::new();

    for entry in &catalog.universal {
        if entry.applies_to.iter().any(|s| s == supplement) {
            matches.push(EnhancerMatch {
                name: entry.name.clone(),
                absorption_increase: entry.absorption_increase.clone(),
                typical_dose: Some(entry.typical_dose.clone()),
                mechanism: Some(entry.mechanism.clone()),
                essential: false,
            });
        }
    }

    let lowered = supplement.to_lowercase();
    for combo in &catalog.specific {
        if combo.key.to_lowercase().contains(&lowered) {
            matches.push(EnhancerMatch {
                name: combo.key.clone(),
                absorption_increase: combo.absorption_increase.clone(),
                typical_dose: combo.optimal_dose.clone(),
                mechanism: None,
                essential: combo.essential,
            });
        }
    }

    matches
}

pub fn match_inhibitors(catalog: &InhibitorCatalog, supplement: &str) -> Vec<InhibitorMatch> {
    let mut matches = Vec::new();

    let lowered = supplement.to_lowercase();
    for entry in &catalog.competition {
        if entry.key.to_lowercase().contains(&lowered) {
            matches.push(InhibitorMatch::TransporterCompetition {
                interaction: entry.key.clone(),
                absorption_reduction: entry.absorption_reduction.clone(),
                mitigation: entry.mitigation.clone(),
            });
        }
    }

    for chelator in &catalog.chelators {
        if chelator.affects.iter().any(|s| s == supplement) {
            matches.push(InhibitorMatch::NaturalChelator {
                name: chelator.name.clone(),
                sources: chelator.sources.clone(),
                absorption_reduction: chelator.absorption_reduction.clone(),
                mitigations: chelator.mitigations.clone(),
            });
        }
    }

    matches
}
