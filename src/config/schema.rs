use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Built-in priority list used when the config names no supplements.
pub const DEFAULT_SUPPLEMENTS: [&str; 15] = [
    "Curcumin",
    "Omega-3",
    "Vitamin D",
    "Magnesium",
    "Zinc",
    "Iron",
    "CoQ10",
    "Probiotics",
    "Melatonin",
    "Vitamin B12",
    "Calcium",
    "Vitamin C",
    "Vitamin E",
    "Ashwagandha",
    "Rhodiola rosea",
];

/// Main configuration.
///
/// Example YAML:
/// ```yaml
/// supplements:
///   - Curcumin
///   - Iron
/// profile:
///   age: 35
///   lifestyle: [athlete]
/// output_dir: /tmp/bioavailability_reports
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Supplements analyzed by the batch command (default: built-in list)
    #[serde(default)]
    pub supplements: Vec<String>,

    /// Optional user profile for personalized recommendations
    #[serde(default)]
    pub profile: Option<ProfileConfig>,

    /// Report output directory (default: ~/bioavailability_reports)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            supplements: DEFAULT_SUPPLEMENTS.iter().map(|s| s.to_string()).collect(),
            profile: None,
            output_dir: None,
        }
    }
}

impl Config {
    /// The batch list, falling back to the built-in list when empty.
    pub fn supplement_list(&self) -> Vec<String> {
        if self.supplements.is_empty() {
            DEFAULT_SUPPLEMENTS.iter().map(|s| s.to_string()).collect()
        } else {
            self.supplements.clone()
        }
    }
}

/// Raw profile input; validated against the reference vocabulary before use.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    /// Age in years (default: 30)
    #[serde(default)]
    pub age: Option<i64>,

    /// Gastro condition tags, e.g. low-gastric-acid, celiac
    #[serde(default)]
    pub gastro_conditions: Vec<String>,

    /// Lifestyle tags, e.g. vegetarian, athlete
    #[serde(default)]
    pub lifestyle: Vec<String>,
}

impl ProfileConfig {
    pub fn age_or_default(&self) -> i64 {
        self.age.unwrap_or(30)
    }
}
