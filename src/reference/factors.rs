//! Individual absorption factors: age brackets, gastrointestinal conditions,
//! lifestyle groups. The condition and lifestyle tags are the closed
//! vocabulary accepted by profile validation.

use serde::Serialize;

use super::svec;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AgeBracket {
    pub label: String,
    pub min_age: u32,
    /// None for the open-ended senior bracket.
    pub max_age: Option<u32>,
    pub characteristics: Vec<String>,
    pub adjustments: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConditionFactor {
    /// Profile tag, e.g. `low-gastric-acid`.
    pub tag: String,
    pub label: String,
    pub affects: Vec<String>,
    pub guidance: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LifestyleFactor {
    /// Profile tags; a group may accept several (e.g. vegetarian and vegan).
    pub tags: Vec<String>,
    pub label: String,
    pub elevated_needs: Vec<String>,
    pub adjustments: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IndividualFactors {
    pub age_brackets: Vec<AgeBracket>,
    pub gastro: Vec<ConditionFactor>,
    pub lifestyle: Vec<LifestyleFactor>,
}

impl IndividualFactors {
    pub fn is_known_gastro_tag(&self, tag: &str) -> bool {
        self.gastro.iter().any(|c| c.tag == tag)
    }

    pub fn is_known_lifestyle_tag(&self, tag: &str) -> bool {
        self.lifestyle.iter().any(|l| l.tags.iter().any(|t| t == tag))
    }

    pub fn gastro_tags(&self) -> Vec<&str> {
        self.gastro.iter().map(|c| c.tag.as_str()).collect()
    }

    pub fn lifestyle_tags(&self) -> Vec<&str> {
        self.lifestyle
            .iter()
            .flat_map(|l| l.tags.iter().map(String::as_str))
            .collect()
    }
}

fn bracket(
    label: &str,
    min_age: u32,
    max_age: Option<u32>,
    characteristics: &[&str],
    adjustments: &[&str],
) -> AgeBracket {
    AgeBracket {
        label: label.to_string(),
        min_age,
        max_age,
        characteristics: svec(characteristics),
        adjustments: svec(adjustments),
    }
}

fn condition(tag: &str, label: &str, affects: &[&str], guidance: &[&str]) -> ConditionFactor {
    ConditionFactor {
        tag: tag.to_string(),
        label: label.to_string(),
        affects: svec(affects),
        guidance: svec(guidance),
    }
}

pub(crate) fn builtin_factors() -> IndividualFactors {
    IndividualFactors {
        age_brackets: vec![
            bracket(
                "children",
                0,
                Some(12),
                &["Lower gastric acidity", "Accelerated metabolism"],
                &["Liquid forms", "Smaller, more frequent doses"],
            ),
            bracket(
                "adolescents",
                13,
                Some(18),
                &["Rapid growth", "Higher requirements"],
                &["Doses proportional to weight"],
            ),
            bracket(
                "adults",
                19,
                Some(64),
                &["Optimal absorption", "Stable metabolism"],
                &["Standard doses"],
            ),
            bracket(
                "seniors",
                65,
                None,
                &["Lower gastric acidity", "Slower metabolism", "Polypharmacy"],
                &["Chelated forms", "Smaller doses", "Monitor interactions"],
            ),
        ],
        gastro: vec![
            condition(
                "low-gastric-acid",
                "hypochlorhydria",
                &["Iron", "Vitamin B12", "Calcium", "Zinc"],
                &["Chelated forms", "Betaine HCl", "Vitamin C"],
            ),
            condition(
                "celiac",
                "celiac disease",
                &["All vitamins and minerals"],
                &["Certified gluten-free forms", "Higher doses", "Monitoring"],
            ),
            condition(
                "crohn-colitis",
                "Crohn's disease / colitis",
                &["Fat-soluble vitamins", "Vitamin B12", "Iron", "Zinc"],
                &["Liquid forms", "Higher doses", "Parenteral route if needed"],
            ),
            condition(
                "irritable-bowel",
                "irritable bowel syndrome",
                &["Overall tolerability"],
                &["Gentle forms", "Smaller doses", "Probiotics"],
            ),
        ],
        lifestyle: vec![
            LifestyleFactor {
                tags: svec(&["vegetarian", "vegan"]),
                label: "vegetarian / vegan".to_string(),
                elevated_needs: svec(&["Vitamin B12", "Iron", "Zinc", "Omega-3", "Vitamin D"]),
                adjustments: svec(&["Plant-based forms", "Higher doses", "Regular monitoring"]),
                notes: None,
            },
            LifestyleFactor {
                tags: svec(&["athlete"]),
                label: "athletes".to_string(),
                elevated_needs: svec(&["Iron", "Magnesium", "Zinc", "B Vitamins"]),
                adjustments: svec(&["Higher doses", "Pre/post workout timing"]),
                notes: None,
            },
            LifestyleFactor {
                tags: svec(&["smoker"]),
                label: "smokers".to_string(),
                elevated_needs: svec(&["Vitamin C", "Vitamin E", "Antioxidants"]),
                adjustments: svec(&["Higher antioxidant doses"]),
                notes: Some("altered B-vitamin metabolism".to_string()),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_vocabulary() {
        let factors = builtin_factors();
        assert_eq!(
            factors.gastro_tags(),
            vec!["low-gastric-acid", "celiac", "crohn-colitis", "irritable-bowel"]
        );
        assert_eq!(
            factors.lifestyle_tags(),
            vec!["vegetarian", "vegan", "athlete", "smoker"]
        );
    }

    #[test]
    fn test_unknown_tags_rejected() {
        let factors = builtin_factors();
        assert!(!factors.is_known_gastro_tag("Celiac"));
        assert!(!factors.is_known_lifestyle_tag("runner"));
        assert!(factors.is_known_lifestyle_tag("vegan"));
    }

    #[test]
    fn test_senior_bracket_is_open_ended() {
        let factors = builtin_factors();
        let seniors = factors.age_brackets.last().unwrap();
        assert_eq!(seniors.min_age, 65);
        assert!(seniors.max_age.is_none());
    }
}
