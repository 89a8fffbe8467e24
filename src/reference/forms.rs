//! Pharmaceutical-form reference table.
//!
//! Bioavailability is relative to the supplement's reference form (1.0).
//! Mineral tables use absolute absorbed fractions instead, so their values
//! sit below 1.0 by design.

use serde::Serialize;
use std::collections::BTreeMap;

use super::svec;

/// One pharmaceutical form of a supplement.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SupplementForm {
    pub id: String,
    /// Relative to the 1.0 reference baseline; always positive.
    pub bioavailability: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mechanism: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub advantages: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub problems: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dose_equivalent: Option<String>,
}

/// Curated form list for one supplement, with the table's named picks.
///
/// `optimal` and `best_value` are curated choices, not derived from the
/// bioavailability ranking (e.g. Curcumin's optimal pick is the liposomal
/// form even though the nanoparticle form ranks highest).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SupplementFormSet {
    pub forms: Vec<SupplementForm>,
    pub optimal: String,
    pub best_value: String,
}

impl SupplementFormSet {
    /// Look up a form by id.
    pub fn form(&self, id: &str) -> Option<&SupplementForm> {
        self.forms.iter().find(|f| f.id == id)
    }
}

fn form(id: &str, bioavailability: f64, description: &str) -> SupplementForm {
    SupplementForm {
        id: id.to_string(),
        bioavailability,
        description: description.to_string(),
        mechanism: None,
        advantages: Vec::new(),
        problems: Vec::new(),
        dose_equivalent: None,
    }
}

fn set(forms: Vec<SupplementForm>, optimal: &str, best_value: &str) -> SupplementFormSet {
    SupplementFormSet {
        forms,
        optimal: optimal.to_string(),
        best_value: best_value.to_string(),
    }
}

pub(crate) fn builtin_forms() -> BTreeMap<String, SupplementFormSet> {
    let mut table = BTreeMap::new();

    table.insert(
        "Curcumin".to_string(),
        set(
            vec![
                SupplementForm {
                    problems: svec(&["Low solubility", "Rapid metabolism", "Low permeability"]),
                    ..form("curcumin_standard", 1.0, "Standard curcumin (poorly absorbed)")
                },
                SupplementForm {
                    mechanism: Some("CYP450 and glucuronidation inhibition".to_string()),
                    dose_equivalent: Some("50mg = 1000mg standard".to_string()),
                    ..form("curcumin_piperine", 20.0, "Curcumin + piperine (BioPerine)")
                },
                SupplementForm {
                    mechanism: Some("Phospholipid encapsulation".to_string()),
                    dose_equivalent: Some("22mg = 1000mg standard".to_string()),
                    ..form("curcumin_liposomal", 46.0, "Liposomal curcumin")
                },
                SupplementForm {
                    mechanism: Some("Phosphatidylcholine complexation".to_string()),
                    dose_equivalent: Some("34mg = 1000mg standard".to_string()),
                    ..form("curcumin_phytosome", 29.0, "Curcumin phytosome (Meriva)")
                },
                SupplementForm {
                    mechanism: Some("Reduced particle size".to_string()),
                    dose_equivalent: Some("5.4mg = 1000mg standard".to_string()),
                    ..form("curcumin_nanoparticle", 185.0, "Nanoparticle curcumin")
                },
            ],
            "curcumin_liposomal",
            "curcumin_piperine",
        ),
    );

    table.insert(
        "Omega-3".to_string(),
        set(
            vec![
                form(
                    "standard_fish_oil",
                    1.0,
                    "Standard fish oil (triglycerides, 30% EPA/DHA)",
                ),
                SupplementForm {
                    problems: svec(&["Requires dietary fat for absorption"]),
                    ..form(
                        "ethyl_ester_concentrate",
                        1.2,
                        "Concentrated fish oil (ethyl esters, 60-90% EPA/DHA)",
                    )
                },
                SupplementForm {
                    mechanism: Some("Natural form, better absorption".to_string()),
                    ..form(
                        "reesterified_triglycerides",
                        1.7,
                        "Re-esterified triglycerides (60-80% EPA/DHA)",
                    )
                },
                SupplementForm {
                    mechanism: Some("Phospholipids facilitate absorption".to_string()),
                    advantages: svec(&["Better bioavailability", "Natural antioxidants"]),
                    ..form("krill_phospholipid", 2.3, "Phospholipid omega-3 (krill oil)")
                },
                SupplementForm {
                    mechanism: Some("Liposomal encapsulation".to_string()),
                    dose_equivalent: Some("312mg = 1000mg standard".to_string()),
                    ..form("omega3_liposomal", 3.2, "Liposomal omega-3")
                },
            ],
            "omega3_liposomal",
            "reesterified_triglycerides",
        ),
    );

    table.insert(
        "Vitamin D".to_string(),
        set(
            vec![
                SupplementForm {
                    problems: svec(&["Lower potency", "Shorter duration of action"]),
                    ..form("d2_ergocalciferol", 0.3, "Ergocalciferol (D2)")
                },
                form("d3_standard", 1.0, "Standard cholecalciferol (D3)"),
                SupplementForm {
                    mechanism: Some("Lipid solubilization".to_string()),
                    ..form("d3_oil_based", 1.8, "Vitamin D3 in oil base")
                },
                SupplementForm {
                    mechanism: Some("Liposomal encapsulation".to_string()),
                    dose_equivalent: Some("417 IU = 1000 IU standard".to_string()),
                    ..form("d3_liposomal", 2.4, "Liposomal vitamin D3")
                },
                SupplementForm {
                    mechanism: Some("Nanometric particles".to_string()),
                    dose_equivalent: Some("323 IU = 1000 IU standard".to_string()),
                    ..form("d3_nanoemulsion", 3.1, "Vitamin D3 nanoemulsion")
                },
            ],
            "d3_nanoemulsion",
            "d3_oil_based",
        ),
    );

    table.insert(
        "Magnesium".to_string(),
        set(
            vec![
                SupplementForm {
                    problems: svec(&["Very low absorption", "Laxative effect"]),
                    ..form("magnesium_oxide", 0.04, "Magnesium oxide")
                },
                SupplementForm {
                    problems: svec(&["Strong laxative effect"]),
                    ..form("magnesium_sulfate", 0.12, "Magnesium sulfate")
                },
                SupplementForm {
                    advantages: svec(&["Good absorption", "Well tolerated"]),
                    ..form("magnesium_citrate", 0.30, "Magnesium citrate")
                },
                SupplementForm {
                    mechanism: Some("Amino acid chelation".to_string()),
                    advantages: svec(&["Excellent absorption", "No laxative effect"]),
                    ..form("magnesium_glycinate", 0.80, "Magnesium glycinate (chelated)")
                },
                SupplementForm {
                    mechanism: Some("Liposomal encapsulation".to_string()),
                    dose_equivalent: Some("44mg = 100mg oxide".to_string()),
                    ..form("magnesium_liposomal", 0.90, "Liposomal magnesium")
                },
            ],
            "magnesium_liposomal",
            "magnesium_glycinate",
        ),
    );

    table.insert(
        "Zinc".to_string(),
        set(
            vec![
                SupplementForm {
                    problems: svec(&["Low absorption", "Gastric irritation"]),
                    ..form("zinc_oxide", 0.15, "Zinc oxide")
                },
                SupplementForm {
                    problems: svec(&["Gastric irritation"]),
                    ..form("zinc_sulfate", 0.23, "Zinc sulfate")
                },
                SupplementForm {
                    advantages: svec(&["Better tolerability"]),
                    ..form("zinc_gluconate", 0.45, "Zinc gluconate")
                },
                SupplementForm {
                    mechanism: Some("Picolinic acid chelation".to_string()),
                    advantages: svec(&["Excellent absorption"]),
                    ..form("zinc_picolinate", 0.85, "Zinc picolinate")
                },
                SupplementForm {
                    mechanism: Some("Liposomal encapsulation".to_string()),
                    dose_equivalent: Some("2.6mg = 15mg oxide".to_string()),
                    ..form("zinc_liposomal", 0.95, "Liposomal zinc")
                },
            ],
            "zinc_liposomal",
            "zinc_picolinate",
        ),
    );

    table.insert(
        "Iron".to_string(),
        set(
            vec![
                SupplementForm {
                    problems: svec(&["Gastric irritation", "Constipation"]),
                    ..form("ferrous_sulfate", 0.10, "Ferrous sulfate")
                },
                SupplementForm {
                    advantages: svec(&["Less irritating than sulfate"]),
                    ..form("ferrous_fumarate", 0.13, "Ferrous fumarate")
                },
                SupplementForm {
                    advantages: svec(&["Better tolerability"]),
                    ..form("ferrous_gluconate", 0.12, "Ferrous gluconate")
                },
                SupplementForm {
                    mechanism: Some("Glycine chelation".to_string()),
                    advantages: svec(&["Excellent absorption", "No irritation"]),
                    ..form("iron_bisglycinate", 0.90, "Iron bisglycinate (chelated)")
                },
                SupplementForm {
                    mechanism: Some("Liposomal encapsulation".to_string()),
                    dose_equivalent: Some("1.9mg = 18mg sulfate".to_string()),
                    ..form("iron_liposomal", 0.95, "Liposomal iron")
                },
            ],
            "iron_liposomal",
            "iron_bisglycinate",
        ),
    );

    table.insert(
        "CoQ10".to_string(),
        set(
            vec![
                SupplementForm {
                    problems: svec(&["Low solubility"]),
                    ..form("coq10_crystalline", 1.0, "Standard crystalline CoQ10")
                },
                SupplementForm {
                    mechanism: Some("Lipid solubilization".to_string()),
                    ..form("coq10_oil_based", 3.2, "CoQ10 in oil base")
                },
                SupplementForm {
                    mechanism: Some("Nanometric particles".to_string()),
                    dose_equivalent: Some("12mg = 100mg crystalline".to_string()),
                    ..form("coq10_nanoemulsion", 8.5, "CoQ10 nanoemulsion")
                },
                SupplementForm {
                    mechanism: Some("Active form, no conversion needed".to_string()),
                    advantages: svec(&["Active form", "Better for ages 40+"]),
                    ..form("ubiquinol", 4.2, "Ubiquinol (reduced form)")
                },
            ],
            "coq10_nanoemulsion",
            "ubiquinol",
        ),
    );

    table
}
