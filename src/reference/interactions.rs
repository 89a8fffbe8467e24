//! Per-supplement food interaction table.

use serde::Serialize;
use std::collections::BTreeMap;

use super::svec;

/// A food or nutrient that improves absorption of the supplement.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FoodEnhancer {
    pub name: String,
    pub effect: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mechanism: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimal_dose: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
}

/// A food or state that impairs absorption of the supplement.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FoodInhibitor {
    pub name: String,
    pub effect: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mechanism: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mitigation: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FoodInteractionProfile {
    pub enhancers: Vec<FoodEnhancer>,
    pub inhibitors: Vec<FoodInhibitor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_timing: Option<String>,
}

fn enhancer(name: &str, effect: &str) -> FoodEnhancer {
    FoodEnhancer {
        name: name.to_string(),
        effect: effect.to_string(),
        mechanism: None,
        optimal_dose: None,
        sources: Vec::new(),
    }
}

fn inhibitor(name: &str, effect: &str) -> FoodInhibitor {
    FoodInhibitor {
        name: name.to_string(),
        effect: effect.to_string(),
        mechanism: None,
        sources: Vec::new(),
        mitigation: None,
    }
}

pub(crate) fn builtin_interactions() -> BTreeMap<String, FoodInteractionProfile> {
    let mut table = BTreeMap::new();

    table.insert(
        "Iron".to_string(),
        FoodInteractionProfile {
            enhancers: vec![
                FoodEnhancer {
                    mechanism: Some("Fe3+ to Fe2+ reduction".to_string()),
                    optimal_dose: Some("100mg vitamin C per 18mg iron".to_string()),
                    sources: svec(&["Orange", "Lemon", "Acerola", "Kiwi"]),
                    ..enhancer("vitamin_c", "Increases absorption 3-4x")
                },
                FoodEnhancer {
                    sources: svec(&["Citric acid", "Malic acid", "Citrus fruit", "Vinegar"]),
                    ..enhancer("organic_acids", "Increases absorption 2-3x")
                },
                FoodEnhancer {
                    mechanism: Some("MFP factor (meat, fish, poultry)".to_string()),
                    sources: svec(&["Red meat", "Chicken", "Fish"]),
                    ..enhancer("animal_protein", "Increases absorption")
                },
            ],
            inhibitors: vec![
                FoodInhibitor {
                    sources: svec(&["Black tea", "Green tea", "Coffee", "Red wine"]),
                    mitigation: Some("avoid 2h before and after".to_string()),
                    ..inhibitor("tannins", "Reduces absorption by 50-90%")
                },
                FoodInhibitor {
                    sources: svec(&["Whole grains", "Legumes", "Nuts"]),
                    mitigation: Some("soak or ferment".to_string()),
                    ..inhibitor("phytates", "Reduces absorption by 40-50%")
                },
                FoodInhibitor {
                    mechanism: Some("transporter competition".to_string()),
                    mitigation: Some("separate by 2h".to_string()),
                    ..inhibitor("calcium", "Reduces absorption by 30-60%")
                },
                FoodInhibitor {
                    mechanism: Some("transporter competition".to_string()),
                    mitigation: Some("separate by 2h".to_string()),
                    ..inhibitor("zinc", "Mutual absorption reduction")
                },
            ],
            meal_timing: None,
        },
    );

    table.insert(
        "Calcium".to_string(),
        FoodInteractionProfile {
            enhancers: vec![
                FoodEnhancer {
                    mechanism: Some("transport protein synthesis".to_string()),
                    optimal_dose: Some("400-800 IU per 500-1000mg calcium".to_string()),
                    ..enhancer("vitamin_d", "Essential for absorption")
                },
                FoodEnhancer {
                    mechanism: Some("osteocalcin activation".to_string()),
                    optimal_dose: Some("45-180mcg K2".to_string()),
                    ..enhancer("vitamin_k2", "Directs calcium to bone")
                },
                FoodEnhancer {
                    optimal_dose: Some("2:1 Ca:Mg ratio (e.g. 1000mg Ca + 500mg Mg)".to_string()),
                    ..enhancer("magnesium", "Cofactor for calcium metabolism")
                },
            ],
            inhibitors: vec![
                FoodInhibitor {
                    mitigation: Some("separate by 2h".to_string()),
                    ..inhibitor("iron", "Reduces iron absorption")
                },
                FoodInhibitor {
                    mechanism: Some("chelation and accelerated transit".to_string()),
                    ..inhibitor("fiber", "Reduces absorption by 20-30%")
                },
                FoodInhibitor {
                    sources: svec(&["Spinach", "Beets", "Chocolate"]),
                    ..inhibitor("oxalates", "Forms insoluble complexes")
                },
            ],
            meal_timing: None,
        },
    );

    table.insert(
        "Zinc".to_string(),
        FoodInteractionProfile {
            enhancers: vec![FoodEnhancer {
                mechanism: Some("amino acids facilitate transport".to_string()),
                sources: svec(&["Meat", "Eggs", "Dairy"]),
                ..enhancer("protein", "Improves absorption")
            }],
            inhibitors: vec![
                FoodInhibitor {
                    mitigation: Some("separate by 2h".to_string()),
                    ..inhibitor("iron", "Mutual absorption reduction")
                },
                FoodInhibitor {
                    mitigation: Some("separate by 2h".to_string()),
                    ..inhibitor("calcium", "Reduces zinc absorption")
                },
                FoodInhibitor {
                    sources: svec(&["Whole grains", "Legumes"]),
                    ..inhibitor("phytates", "Reduces absorption significantly")
                },
                FoodInhibitor {
                    mitigation: Some("take on an empty stomach".to_string()),
                    ..inhibitor("fiber", "Reduces absorption")
                },
            ],
            meal_timing: None,
        },
    );

    table.insert(
        "Curcumin".to_string(),
        FoodInteractionProfile {
            enhancers: vec![
                FoodEnhancer {
                    mechanism: Some("glucuronidation inhibition".to_string()),
                    optimal_dose: Some("5-20mg piperine per 500mg curcumin".to_string()),
                    ..enhancer("piperine", "Increases absorption by 2000%")
                },
                FoodEnhancer {
                    mechanism: Some("lipid solubilization".to_string()),
                    sources: svec(&["Coconut oil", "Olive oil", "Avocado"]),
                    ..enhancer("fats", "Increases absorption 7-8x")
                },
                FoodEnhancer {
                    mechanism: Some("inhibits metabolizing enzymes".to_string()),
                    ..enhancer("quercetin", "Antioxidant synergy")
                },
            ],
            inhibitors: Vec::new(),
            meal_timing: Some("always with a fat-rich meal".to_string()),
        },
    );

    table.insert(
        "Omega-3".to_string(),
        FoodInteractionProfile {
            enhancers: vec![
                FoodEnhancer {
                    mechanism: Some("stimulates bile production".to_string()),
                    sources: svec(&["Coconut oil", "Butter"]),
                    ..enhancer("saturated_fat", "Improves absorption")
                },
                FoodEnhancer {
                    optimal_dose: Some("15-30mg per 1-3g omega-3".to_string()),
                    ..enhancer("vitamin_e", "Protects against oxidation")
                },
            ],
            inhibitors: vec![FoodInhibitor {
                mitigation: Some("always take with a meal".to_string()),
                ..inhibitor("empty_stomach", "Sharply reduced absorption")
            }],
            meal_timing: None,
        },
    );

    table.insert(
        "Probiotics".to_string(),
        FoodInteractionProfile {
            enhancers: vec![FoodEnhancer {
                sources: svec(&["Inulin", "FOS", "GOS", "Garlic", "Onion", "Green banana"]),
                ..enhancer("prebiotics", "Feeds beneficial bacteria")
            }],
            inhibitors: vec![
                FoodInhibitor {
                    mitigation: Some("separate by 2-3h".to_string()),
                    ..inhibitor("antibiotics", "Destroys probiotic bacteria")
                },
                FoodInhibitor {
                    mitigation: Some("avoid excessive intake".to_string()),
                    ..inhibitor("alcohol", "Impairs bacterial survival")
                },
            ],
            meal_timing: None,
        },
    );

    table
}
