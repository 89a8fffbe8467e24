//! Circadian timing reference table.

use serde::Serialize;
use std::collections::BTreeMap;

use super::svec;

/// Optimal intake timing for one supplement.
///
/// `circadian_markers`, `applies_to` and `notes` are reference material
/// carried through to reports; scoring only cares that a profile exists.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimingProfile {
    pub optimal_window: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ideal_clock_time: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub circadian_markers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub factors: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub special_adjustments: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub applies_to: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn profile(optimal_window: &str) -> TimingProfile {
    TimingProfile {
        optimal_window: optimal_window.to_string(),
        ideal_clock_time: None,
        circadian_markers: BTreeMap::new(),
        factors: BTreeMap::new(),
        special_adjustments: BTreeMap::new(),
        rationale: None,
        applies_to: Vec::new(),
        notes: None,
    }
}

fn kv(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub(crate) fn builtin_timing() -> BTreeMap<String, TimingProfile> {
    let mut table = BTreeMap::new();

    table.insert(
        "Melatonin".to_string(),
        TimingProfile {
            ideal_clock_time: Some("21:00-22:00".to_string()),
            circadian_markers: kv(&[
                ("natural_peak", "02:00-04:00"),
                ("production_start", "21:00"),
                ("production_end", "07:00"),
            ]),
            factors: kv(&[
                ("blue_light", "avoid for 2h before the dose"),
                ("meals", "take on an empty stomach"),
                ("exercise", "avoid intense exercise 3h before"),
            ]),
            special_adjustments: kv(&[
                ("jet_lag", "shift gradually by 1h per day"),
                ("night_shift", "take on arriving home"),
                ("sleep_onset_insomnia", "2-3h before the desired bedtime"),
            ]),
            ..profile("30-60 minutes before bedtime")
        },
    );

    table.insert(
        "Cortisol_Support".to_string(),
        TimingProfile {
            ideal_clock_time: Some("07:00".to_string()),
            circadian_markers: kv(&[("natural_peak", "08:00-09:00"), ("nadir", "00:00-02:00")]),
            applies_to: svec(&["Ashwagandha", "Rhodiola", "Ginseng"]),
            notes: Some("avoid in the evening so sleep is not disrupted".to_string()),
            ..profile("morning (06:00-08:00)")
        },
    );

    table.insert(
        "Vitamin D".to_string(),
        TimingProfile {
            ideal_clock_time: Some("08:00-10:00".to_string()),
            circadian_markers: kv(&[
                ("natural_synthesis", "10:00-15:00 (sun exposure)"),
                ("absorption_peak", "morning"),
            ]),
            factors: kv(&[
                ("fat", "essential for absorption"),
                ("calcium", "fine to take together"),
                ("magnesium", "recommended together"),
            ]),
            ..profile("morning with a fat-containing meal")
        },
    );

    table.insert(
        "B_Vitamins".to_string(),
        TimingProfile {
            ideal_clock_time: Some("07:00-09:00".to_string()),
            rationale: Some("can be stimulating".to_string()),
            applies_to: svec(&["B-Complex", "B12", "B6", "Folate"]),
            notes: Some("avoid in the evening so sleep is not affected".to_string()),
            ..profile("morning with breakfast")
        },
    );

    table.insert(
        "Magnesium".to_string(),
        TimingProfile {
            ideal_clock_time: Some("20:00-21:00".to_string()),
            factors: kv(&[
                ("effects", "muscular and neural relaxation"),
                ("evening_forms", "glycinate, L-threonate"),
                ("daytime_forms", "citrate, malate"),
            ]),
            ..profile("evening, 1-2h before bed")
        },
    );

    table.insert(
        "Iron".to_string(),
        TimingProfile {
            ideal_clock_time: Some("07:00 (1h before breakfast)".to_string()),
            factors: kv(&[
                ("max_absorption", "empty stomach plus vitamin C"),
                ("avoid_with", "coffee, tea, calcium, zinc"),
                ("fallback", "take with a little food if the stomach is irritated"),
            ]),
            ..profile("morning on an empty stomach")
        },
    );

    table.insert(
        "Omega-3".to_string(),
        TimingProfile {
            ideal_clock_time: Some("lunch or dinner".to_string()),
            rationale: Some("fat is required for absorption".to_string()),
            factors: kv(&[("dosing", "can split into 2-3 doses")]),
            notes: Some("take with a fat-rich meal".to_string()),
            ..profile("with the largest meal of the day")
        },
    );

    table.insert(
        "Probiotics".to_string(),
        TimingProfile {
            ideal_clock_time: Some("07:00 (30min before breakfast)".to_string()),
            factors: kv(&[
                ("gastric_ph", "higher pH in the morning"),
                ("survival", "better bacterial survival"),
            ]),
            special_adjustments: kv(&[("gastric_irritation", "take with a meal instead")]),
            ..profile("morning on an empty stomach")
        },
    );

    table.insert(
        "Curcumin".to_string(),
        TimingProfile {
            factors: kv(&[
                ("dosing", "split the total dose across the day"),
                ("absorption", "fat is required for absorption"),
                ("half_life", "short (1-3h), needs frequent doses"),
            ]),
            ..profile("with meals (2-3x daily)")
        },
    );

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_melatonin_profile_shape() {
        let table = builtin_timing();
        let profile = table.get("Melatonin").unwrap();
        assert_eq!(profile.optimal_window, "30-60 minutes before bedtime");
        assert_eq!(profile.ideal_clock_time.as_deref(), Some("21:00-22:00"));
        assert_eq!(profile.circadian_markers.len(), 3);
        assert_eq!(profile.special_adjustments.len(), 3);
    }

    #[test]
    fn test_curcumin_has_no_clock_time() {
        let table = builtin_timing();
        let profile = table.get("Curcumin").unwrap();
        assert!(profile.ideal_clock_time.is_none());
        assert!(profile.rationale.is_none());
    }

    #[test]
    fn test_cortisol_support_lists_adaptogens() {
        let table = builtin_timing();
        let profile = table.get("Cortisol_Support").unwrap();
        assert_eq!(profile.applies_to, svec(&["Ashwagandha", "Rhodiola", "Ginseng"]));
    }
}
