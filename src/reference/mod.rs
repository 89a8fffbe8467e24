//! Curated reference tables and the store that owns them.
//!
//! All tables are built in code, once, and never mutated afterwards. The
//! store is handed to the analysis core by shared reference; nothing in the
//! crate writes to it after construction.

pub mod catalogs;
pub mod factors;
pub mod forms;
pub mod interactions;
pub mod timing;

pub use catalogs::{
    ComboEnhancer, EnhancerCatalog, InhibitorCatalog, MedicationInteraction, NaturalChelator,
    TransporterCompetition, UniversalEnhancer,
};
pub use factors::{AgeBracket, ConditionFactor, IndividualFactors, LifestyleFactor};
pub use forms::{SupplementForm, SupplementFormSet};
pub use interactions::{FoodEnhancer, FoodInhibitor, FoodInteractionProfile};
pub use timing::TimingProfile;

use std::collections::BTreeMap;

/// Owned String vector from literals; the data builders lean on this.
pub(crate) fn svec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Immutable collection of every reference table the analyzer consults.
///
/// Per-supplement tables (forms, timing, food interactions) are keyed by the
/// exact supplement name. The enhancer/inhibitor catalogs are ordered lists;
/// the matcher depends on their insertion order.
#[derive(Debug, Clone)]
pub struct ReferenceStore {
    forms: BTreeMap<String, SupplementFormSet>,
    timing: BTreeMap<String, TimingProfile>,
    interactions: BTreeMap<String, FoodInteractionProfile>,
    enhancers: EnhancerCatalog,
    inhibitors: InhibitorCatalog,
    factors: IndividualFactors,
}

impl ReferenceStore {
    /// Build the store from the built-in curated tables.
    pub fn builtin() -> Self {
        Self {
            forms: forms::builtin_forms(),
            timing: timing::builtin_timing(),
            interactions: interactions::builtin_interactions(),
            enhancers: catalogs::builtin_enhancers(),
            inhibitors: catalogs::builtin_inhibitors(),
            factors: factors::builtin_factors(),
        }
    }

    /// Pharmaceutical-form table for one supplement, if curated.
    pub fn forms_for(&self, supplement: &str) -> Option<&SupplementFormSet> {
        self.forms.get(supplement)
    }

    /// Circadian timing profile for one supplement, if curated.
    pub fn timing_for(&self, supplement: &str) -> Option<&TimingProfile> {
        self.timing.get(supplement)
    }

    /// Food-interaction profile for one supplement, if curated.
    pub fn interactions_for(&self, supplement: &str) -> Option<&FoodInteractionProfile> {
        self.interactions.get(supplement)
    }

    /// The absorption enhancer and inhibitor catalogs the matcher scans.
    pub fn enhancers_and_inhibitors(&self) -> (&EnhancerCatalog, &InhibitorCatalog) {
        (&self.enhancers, &self.inhibitors)
    }

    /// Individual factor tables (age brackets, GI conditions, lifestyle).
    /// Also defines the tag vocabulary accepted by profile validation.
    pub fn individual_factors(&self) -> &IndividualFactors {
        &self.factors
    }

    /// All per-supplement form tables, keyed by supplement name.
    pub fn forms(&self) -> &BTreeMap<String, SupplementFormSet> {
        &self.forms
    }

    /// All timing profiles, keyed by supplement name.
    pub fn timing(&self) -> &BTreeMap<String, TimingProfile> {
        &self.timing
    }

    /// All food-interaction profiles, keyed by supplement name.
    pub fn interactions(&self) -> &BTreeMap<String, FoodInteractionProfile> {
        &self.interactions
    }

    /// Check table invariants. Returns all violations at once (not just the
    /// first), in the same style as profile validation.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for (name, set) in &self.forms {
            if set.forms.is_empty() {
                errors.push(format!("forms[{}]: form list is empty", name));
                continue;
            }
            let mut seen_ids = std::collections::HashSet::new();
            for form in &set.forms {
                if form.bioavailability <= 0.0 {
                    errors.push(format!(
                        "forms[{}].{}: bioavailability must be positive, got {}",
                        name, form.id, form.bioavailability
                    ));
                }
                if !seen_ids.insert(form.id.as_str()) {
                    errors.push(format!("forms[{}]: duplicate form id '{}'", name, form.id));
                }
            }
            if set.form(&set.optimal).is_none() {
                errors.push(format!(
                    "forms[{}].optimal: unknown form id '{}'",
                    name, set.optimal
                ));
            }
            if set.form(&set.best_value).is_none() {
                errors.push(format!(
                    "forms[{}].best_value: unknown form id '{}'",
                    name, set.best_value
                ));
            }
        }

        for (name, profile) in &self.timing {
            if profile.optimal_window.trim().is_empty() {
                errors.push(format!("timing[{}]: optimal_window is empty", name));
            }
        }

        for enhancer in &self.enhancers.universal {
            if enhancer.applies_to.is_empty() {
                errors.push(format!(
                    "enhancers.universal[{}]: applies_to is empty",
                    enhancer.name
                ));
            }
        }
        for chelator in &self.inhibitors.chelators {
            if chelator.affects.is_empty() {
                errors.push(format!(
                    "inhibitors.chelators[{}]: affects is empty",
                    chelator.name
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_store_validates() {
        let store = ReferenceStore::builtin();
        assert_eq!(store.validate(), Ok(()));
    }

    #[test]
    fn test_builtin_table_sizes() {
        let store = ReferenceStore::builtin();
        assert_eq!(store.forms().len(), 7);
        assert_eq!(store.timing().len(), 9);
        assert_eq!(store.interactions().len(), 6);

        let (enhancers, inhibitors) = store.enhancers_and_inhibitors();
        assert_eq!(enhancers.universal.len(), 3);
        assert_eq!(enhancers.specific.len(), 5);
        assert_eq!(inhibitors.competition.len(), 3);
        assert_eq!(inhibitors.chelators.len(), 3);
        assert_eq!(inhibitors.medications.len(), 2);
    }

    #[test]
    fn test_lookup_known_supplement() {
        let store = ReferenceStore::builtin();
        assert!(store.forms_for("Curcumin").is_some());
        assert!(store.timing_for("Curcumin").is_some());
        assert!(store.interactions_for("Curcumin").is_some());
    }

    #[test]
    fn test_lookup_unknown_supplement_is_none() {
        let store = ReferenceStore::builtin();
        assert!(store.forms_for("MagicDust").is_none());
        assert!(store.timing_for("MagicDust").is_none());
        assert!(store.interactions_for("MagicDust").is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let store = ReferenceStore::builtin();
        assert!(store.forms_for("curcumin").is_none());
        assert!(store.forms_for("CURCUMIN").is_none());
    }

    #[test]
    fn test_partial_coverage() {
        let store = ReferenceStore::builtin();
        // Melatonin is curated for timing only.
        assert!(store.timing_for("Melatonin").is_some());
        assert!(store.forms_for("Melatonin").is_none());
        assert!(store.interactions_for("Melatonin").is_none());
        // Calcium is curated for food interactions only.
        assert!(store.interactions_for("Calcium").is_some());
        assert!(store.forms_for("Calcium").is_none());
        assert!(store.timing_for("Calcium").is_none());
    }

    #[test]
    fn test_validate_reports_bad_optimal_id() {
        let mut store = ReferenceStore::builtin();
        let set = store.forms.get_mut("Zinc").unwrap();
        set.optimal = "zinc_imaginary".to_string();

        let errors = store.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("forms[Zinc].optimal"));
        assert!(errors[0].contains("zinc_imaginary"));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut store = ReferenceStore::builtin();
        store.forms.get_mut("Zinc").unwrap().optimal = "nope".to_string();
        store.forms.get_mut("Iron").unwrap().best_value = "nope".to_string();

        let errors = store.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
