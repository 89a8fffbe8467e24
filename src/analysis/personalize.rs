//! Profile-driven recommendation rules.

use serde::Serialize;

use crate::reference::IndividualFactors;

use super::types::Recommendation;

/// Validated user profile. Construct through [`validate_profile`] so the
/// tags are guaranteed to belong to the reference vocabulary.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserProfile {
    pub age: u32,
    pub gastro_conditions: Vec<String>,
    pub lifestyle: Vec<String>,
}

impl UserProfile {
    fn has_condition(&self, tag: &str) -> bool {
        self.gastro_conditions.iter().any(|t| t == tag)
    }

    fn has_lifestyle(&self, tag: &str) -> bool {
        self.lifestyle.iter().any(|t| t == tag)
    }
}

/// Check raw profile input against the reference vocabulary. All violations
/// are collected so the user sees every problem at once.
pub fn validate_profile(
    factors: &IndividualFactors,
    age: i64,
    gastro_conditions: &[String],
    lifestyle: &[String],
) -> Result<UserProfile, Vec<String>> {
    let mut errors = Vec::new();

    if !(0..=130).contains(&age) {
        errors.push(format!("profile: age {} is out of range (0-130)", age));
    }

    for tag in gastro_conditions {
        if !factors.is_known_gastro_tag(tag) {
            errors.push(format!(
                "profile: unknown gastro condition '{}' (known: {})",
                tag,
                factors.gastro_tags().join(", ")
            ));
        }
    }

    for tag in lifestyle {
        if !factors.is_known_lifestyle_tag(tag) {
            errors.push(format!(
                "profile: unknown lifestyle tag '{}' (known: {})",
                tag,
                factors.lifestyle_tags().join(", ")
            ));
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(UserProfile {
        age: age as u32,
        gastro_conditions: gastro_conditions.to_vec(),
        lifestyle: lifestyle.to_vec(),
    })
}

/// Apply the recommendation rules to a profile.
///
/// Rules run in a fixed order; a later rule may overwrite a scalar field
/// set by an earlier one, while list fields only ever append.
pub fn personalize(profile: &UserProfile) -> Recommendation {
    let mut rec = Recommendation {
        form: "standard".to_string(),
        timing: "per label".to_string(),
        dose_adjustment: "standard dose".to_string(),
        precautions: Vec::new(),
        monitoring: Vec::new(),
    };

    if profile.age < 18 {
        rec.dose_adjustment = "pediatric dose (consult pediatrician)".to_string();
        rec.form = "liquid or chewable".to_string();
    } else if profile.age >= 65 {
        rec.form = "chelated or liposomal".to_string();
        rec.dose_adjustment = "start with lower dose".to_string();
        rec.precautions.push("check drug interactions".to_string());
    }

    if profile.has_condition("low-gastric-acid") {
        rec.form = "chelated".to_string();
        rec.precautions.push("consider betaine HCl".to_string());
    }

    if profile.has_condition("celiac") {
        rec.precautions.push("verify gluten-free certification".to_string());
        rec.dose_adjustment = "increased dose (malabsorption)".to_string();
    }

    if profile.has_lifestyle("vegetarian") || profile.has_lifestyle("vegan") {
        rec.monitoring.push("periodic serum level monitoring".to_string());
    }

    if profile.has_lifestyle("athlete") {
        rec.dose_adjustment = "increased dose per need".to_string();
        rec.timing = "consider pre/post workout timing".to_string();
    }

    rec
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ReferenceStore;

    fn profile(age: u32, gastro: &[&str], lifestyle: &[&str]) -> UserProfile {
        UserProfile {
            age,
            gastro_conditions: gastro.iter().map(|s| s.to_string()).collect(),
            lifestyle: lifestyle.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_adult_profile_keeps_defaults() {
        let rec = personalize(&profile(30, &[], &[]));
        assert_eq!(rec.form, "standard");
        assert_eq!(rec.timing, "per label");
        assert_eq!(rec.dose_adjustment, "standard dose");
        assert!(rec.precautions.is_empty());
        assert!(rec.monitoring.is_empty());
    }

    #[test]
    fn test_pediatric_rule() {
        let rec = personalize(&profile(10, &[], &[]));
        assert_eq!(rec.dose_adjustment, "pediatric dose (consult pediatrician)");
        assert_eq!(rec.form, "liquid or chewable");
        assert!(rec.precautions.is_empty());
    }

    #[test]
    fn test_senior_rule() {
        let rec = personalize(&profile(70, &[], &[]));
        assert_eq!(rec.form, "chelated or liposomal");
        assert_eq!(rec.dose_adjustment, "start with lower dose");
        assert_eq!(rec.precautions, vec!["check drug interactions"]);
    }

    #[test]
    fn test_later_rule_overwrites_form_and_appends_precautions() {
        let rec = personalize(&profile(70, &["low-gastric-acid"], &[]));
        assert_eq!(rec.form, "chelated");
        assert_eq!(
            rec.precautions,
            vec!["check drug interactions", "consider betaine HCl"]
        );
    }

    #[test]
    fn test_celiac_and_athlete_stack() {
        let rec = personalize(&profile(25, &["celiac"], &["athlete"]));
        // athlete runs after celiac and takes the dose adjustment
        assert_eq!(rec.dose_adjustment, "increased dose per need");
        assert_eq!(rec.timing, "consider pre/post workout timing");
        assert_eq!(rec.precautions, vec!["verify gluten-free certification"]);
    }

    #[test]
    fn test_vegan_monitoring() {
        let rec = personalize(&profile(25, &[], &["vegan"]));
        assert_eq!(rec.monitoring, vec!["periodic serum level monitoring"]);
    }

    #[test]
    fn test_validate_accepts_known_tags() {
        let store = ReferenceStore::builtin();
        let profile = validate_profile(
            store.individual_factors(),
            35,
            &["celiac".to_string()],
            &["athlete".to_string()],
        )
        .unwrap();
        assert_eq!(profile.age, 35);
    }

    #[test]
    fn test_validate_collects_all_violations() {
        let store = ReferenceStore::builtin();
        let errors = validate_profile(
            store.individual_factors(),
            -5,
            &["gluten".to_string()],
            &["runner".to_string()],
        )
        .unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("age -5"));
        assert!(errors[1].contains("gluten"));
        assert!(errors[2].contains("runner"));
    }

    #[test]
    fn test_validate_rejects_age_above_range() {
        let store = ReferenceStore::builtin();
        assert!(validate_profile(store.individual_factors(), 131, &[], &[]).is_err());
        assert!(validate_profile(store.individual_factors(), 130, &[], &[]).is_ok());
    }
}
