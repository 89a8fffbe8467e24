//! Builds the per-supplement report sections from the reference tables.

use std::cmp::Ordering;

use crate::reference::{FoodInteractionProfile, SupplementFormSet, TimingProfile};

use super::types::{FoodInteractionReport, FormRanking, TimingReport, DEFAULT_GUIDANCE};

/// Rank forms by bioavailability, best first. The sort is stable so equal
/// values keep their table order. `optimal` and `best_value` are the table's
/// curated picks, carried through untouched.
pub fn rank_forms(set: &SupplementFormSet) -> FormRanking {
    let mut ranked = set.forms.clone();
    ranked.sort_by(|a, b| {
        b.bioavailability
            .partial_cmp(&a.bioavailability)
            .unwrap_or(Ordering::Equal)
    });

    let baseline_ratio = ranked
        .first()
        .map(|top| format!("{:.1}x vs standard form", top.bioavailability))
        .unwrap_or_else(|| DEFAULT_GUIDANCE.to_string());

    FormRanking {
        ranked,
        optimal: set.optimal.clone(),
        best_value: set.best_value.clone(),
        baseline_ratio,
    }
}

/// Timing profile as a report, with unset guidance fields defaulted.
pub fn timing_report(profile: &TimingProfile) -> TimingReport {
    TimingReport {
        optimal_window: profile.optimal_window.clone(),
        ideal_clock_time: profile
            .ideal_clock_time
            .clone()
            .unwrap_or_else(|| DEFAULT_GUIDANCE.to_string()),
        factors: profile.factors.clone(),
        special_adjustments: profile.special_adjustments.clone(),
        rationale: profile
            .rationale
            .clone()
            .unwrap_or_else(|| DEFAULT_GUIDANCE.to_string()),
    }
}

/// Food interactions as a report, with a defaulted meal-timing line.
pub fn food_report(profile: &FoodInteractionProfile) -> FoodInteractionReport {
    FoodInteractionReport {
        enhancers: profile.enhancers.clone(),
        inhibitors: profile.inhibitors.clone(),
        meal_timing: profile
            .meal_timing
            .clone()
            .unwrap_or_else(|| DEFAULT_GUIDANCE.to_string()),
    }
}
