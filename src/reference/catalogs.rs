//! Cross-supplement enhancer and inhibitor catalogs.
//!
//! These are scanned by the matcher for every analyzed supplement, unlike the
//! per-supplement tables which are plain keyed lookups.

use serde::Serialize;

use super::svec;

/// Absorption enhancer that applies to a fixed list of supplements.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UniversalEnhancer {
    pub name: String,
    /// Exact supplement names, matched case-sensitively.
    pub applies_to: Vec<String>,
    pub mechanism: String,
    pub absorption_increase: String,
    pub typical_dose: String,
}

/// Supplement-specific pairing, keyed by a combo pattern such as
/// `vitamin_c_for_iron`. Matched by substring of the supplement name
/// inside the key.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComboEnhancer {
    pub key: String,
    pub absorption_increase: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimal_dose: Option<String>,
    pub essential: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EnhancerCatalog {
    pub universal: Vec<UniversalEnhancer>,
    pub specific: Vec<ComboEnhancer>,
}

/// Two supplements competing for the same uptake transporters.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TransporterCompetition {
    pub key: String,
    pub absorption_reduction: String,
    pub mitigation: String,
}

/// Dietary compound that binds minerals into poorly absorbed complexes.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NaturalChelator {
    pub name: String,
    pub sources: Vec<String>,
    /// Exact supplement names, matched case-sensitively.
    pub affects: Vec<String>,
    pub absorption_reduction: String,
    pub mitigations: Vec<String>,
}

/// Reference material only; never scanned by the matcher.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MedicationInteraction {
    pub name: String,
    pub affects: Vec<String>,
    pub mechanism: String,
    pub mitigation: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InhibitorCatalog {
    pub competition: Vec<TransporterCompetition>,
    pub chelators: Vec<NaturalChelator>,
    pub medications: Vec<MedicationInteraction>,
}

pub(crate) fn builtin_enhancers() -> EnhancerCatalog {
    EnhancerCatalog {
        universal: vec![
            UniversalEnhancer {
                name: "piperine".to_string(),
                applies_to: svec(&["Curcumin", "CoQ10", "Resveratrol", "B Vitamins"]),
                mechanism: "inhibits CYP450 and P-glycoprotein".to_string(),
                absorption_increase: "300-2000%".to_string(),
                typical_dose: "5-20mg".to_string(),
            },
            UniversalEnhancer {
                name: "quercetin".to_string(),
                applies_to: svec(&["Resveratrol", "Curcumin", "Vitamin C"]),
                mechanism: "inhibits metabolizing enzymes".to_string(),
                absorption_increase: "200-400%".to_string(),
                typical_dose: "250-500mg".to_string(),
            },
            UniversalEnhancer {
                name: "lecithin".to_string(),
                applies_to: svec(&[
                    "Vitamin A",
                    "Vitamin D",
                    "Vitamin E",
                    "Vitamin K",
                    "CoQ10",
                    "Curcumin",
                ]),
                mechanism: "micelle formation".to_string(),
                absorption_increase: "200-500%".to_string(),
                typical_dose: "1-2g".to_string(),
            },
        ],
        specific: vec![
            ComboEnhancer {
                key: "vitamin_c_for_iron".to_string(),
                absorption_increase: "300-400%".to_string(),
                optimal_dose: Some("100mg vitamin C per 18mg iron".to_string()),
                essential: false,
            },
            ComboEnhancer {
                key: "vitamin_d_for_calcium".to_string(),
                absorption_increase: "200-300%".to_string(),
                optimal_dose: None,
                essential: true,
            },
            ComboEnhancer {
                key: "fat_for_fat_soluble_vitamins".to_string(),
                absorption_increase: "300-700%".to_string(),
                optimal_dose: Some("at least 5-10g fat".to_string()),
                essential: false,
            },
            ComboEnhancer {
                key: "piperine_for_curcumin".to_string(),
                absorption_increase: "up to 2000%".to_string(),
                optimal_dose: Some("5-20mg piperine per 500mg curcumin".to_string()),
                essential: false,
            },
            ComboEnhancer {
                key: "fat_for_curcumin".to_string(),
                absorption_increase: "700-800%".to_string(),
                optimal_dose: Some("take with a fat-rich meal".to_string()),
                essential: false,
            },
        ],
    }
}

pub(crate) fn builtin_inhibitors() -> InhibitorCatalog {
    InhibitorCatalog {
        competition: vec![
            TransporterCompetition {
                key: "iron_vs_zinc".to_string(),
                absorption_reduction: "40-60%".to_string(),
                mitigation: "separate doses by 2h".to_string(),
            },
            // key is verbatim from the curated tables
            TransporterCompetition {
                key: "iron_vs_calcio".to_string(),
                absorption_reduction: "30-50%".to_string(),
                mitigation: "separate doses by 2h".to_string(),
            },
            TransporterCompetition {
                key: "calcium_vs_magnesium".to_string(),
                absorption_reduction: "20-30%".to_string(),
                mitigation: "moderate doses or separate".to_string(),
            },
        ],
        chelators: vec![
            NaturalChelator {
                name: "phytates".to_string(),
                sources: svec(&["Whole grains", "Legumes", "Nuts"]),
                affects: svec(&["Iron", "Zinc", "Calcium", "Magnesium"]),
                absorption_reduction: "40-80%".to_string(),
                mitigations: svec(&["soaking", "fermenting", "sprouting"]),
            },
            NaturalChelator {
                name: "oxalates".to_string(),
                sources: svec(&["Spinach", "Beets", "Chocolate", "Tea"]),
                affects: svec(&["Calcium", "Iron"]),
                absorption_reduction: "50-90%".to_string(),
                mitigations: svec(&["cooking", "separate timing"]),
            },
            NaturalChelator {
                name: "tannins".to_string(),
                sources: svec(&["Tea", "Coffee", "Red wine"]),
                affects: svec(&["Iron", "Zinc"]),
                absorption_reduction: "50-90%".to_string(),
                mitigations: svec(&["separate by 2h"]),
            },
        ],
        medications: vec![
            MedicationInteraction {
                name: "proton_pump_inhibitors".to_string(),
                affects: svec(&["Iron", "Vitamin B12", "Calcium", "Magnesium"]),
                mechanism: "reduced gastric acidity".to_string(),
                mitigation: "use chelated forms or separate timing".to_string(),
            },
            MedicationInteraction {
                name: "antacids".to_string(),
                affects: svec(&["Iron", "Zinc", "B Vitamins"]),
                mechanism: "gastric acid neutralization".to_string(),
                mitigation: "separate by 2-3h".to_string(),
            },
        ],
    }
}
