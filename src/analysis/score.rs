//! Composite bioavailability score.
//!
//! Every supplement starts from a base of 50 and collects bonuses for the
//! report sections that exist, minus a capped penalty per matched inhibitor.
//! The caps keep any single factor from dominating the composite.

use super::types::FormRanking;

const BASE: f64 = 50.0;
const FORM_BONUS_CAP: f64 = 30.0;
const TIMING_BONUS: f64 = 15.0;
const ENHANCER_STEP: f64 = 5.0;
const ENHANCER_BONUS_CAP: f64 = 20.0;
const INHIBITOR_STEP: f64 = 3.0;
const INHIBITOR_PENALTY_CAP: f64 = 15.0;
const PROFILE_BONUS: f64 = 10.0;

/// Compose the 0-100 score from the section outcomes.
///
/// The form bonus scales with the best form's margin over the 1.0 baseline;
/// tables whose best form sits at or below baseline earn nothing. Rounding
/// is half away from zero, then the result is clamped.
pub fn compose_score(
    forms: Option<&FormRanking>,
    has_timing: bool,
    enhancer_count: usize,
    inhibitor_count: usize,
    personalized: bool,
) -> u8 {
    let mut score = BASE;

    if let Some(ranking) = forms {
        if let Some(top) = ranking.ranked.first() {
            if top.bioavailability > 1.0 {
                score += FORM_BONUS_CAP.min((top.bioavailability - 1.0) * 10.0);
            }
        }
    }

    if has_timing {
        score += TIMING_BONUS;
    }

    score += ENHANCER_BONUS_CAP.min(enhancer_count as f64 * ENHANCER_STEP);
    score -= INHIBITOR_PENALTY_CAP.min(inhibitor_count as f64 * INHIBITOR_STEP);

    if personalized {
        score += PROFILE_BONUS;
    }

    score.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::SupplementForm;

    fn ranking_with_max(bioavailability: f64) -> FormRanking {
        FormRanking {
            ranked: vec![SupplementForm {
                id: "top".to_string(),
                bioavailability,
                description: "top".to_string(),
                mechanism: None,
                advantages: Vec::new(),
                problems: Vec::new(),
                dose_equivalent: None,
            }],
            optimal: "top".to_string(),
            best_value: "top".to_string(),
            baseline_ratio: format!("{:.1}x vs standard form", bioavailability),
        }
    }

    #[test]
    fn test_empty_analysis_scores_base() {
        assert_eq!(compose_score(None, false, 0, 0, false), 50);
    }

    #[test]
    fn test_all_bonuses_clamp_to_100() {
        // 50 + 30 + 15 + 20 = 115 before the clamp
        let ranking = ranking_with_max(185.0);
        assert_eq!(compose_score(Some(&ranking), true, 5, 0, false), 100);
    }

    #[test]
    fn test_form_bonus_scales_and_caps() {
        assert_eq!(compose_score(Some(&ranking_with_max(2.0)), false, 0, 0, false), 60);
        assert_eq!(compose_score(Some(&ranking_with_max(4.0)), false, 0, 0, false), 80);
        assert_eq!(compose_score(Some(&ranking_with_max(50.0)), false, 0, 0, false), 80);
    }

    #[test]
    fn test_baseline_or_lower_forms_earn_nothing() {
        assert_eq!(compose_score(Some(&ranking_with_max(1.0)), false, 0, 0, false), 50);
        assert_eq!(compose_score(Some(&ranking_with_max(0.95)), false, 0, 0, false), 50);
    }

    #[test]
    fn test_fractional_bonus_rounds_half_up() {
        // 50 + (1.25 - 1.0) * 10 = 52.5
        assert_eq!(compose_score(Some(&ranking_with_max(1.25)), false, 0, 0, false), 53);
        // 50 + 2.4 = 52.4
        assert_eq!(compose_score(Some(&ranking_with_max(1.24)), false, 0, 0, false), 52);
    }

    #[test]
    fn test_enhancer_bonus_caps_at_four() {
        assert_eq!(compose_score(None, false, 2, 0, false), 60);
        assert_eq!(compose_score(None, false, 4, 0, false), 70);
        assert_eq!(compose_score(None, false, 9, 0, false), 70);
    }

    #[test]
    fn test_inhibitor_penalty_caps_at_five() {
        assert_eq!(compose_score(None, false, 0, 2, false), 44);
        assert_eq!(compose_score(None, false, 0, 5, false), 35);
        assert_eq!(compose_score(None, false, 0, 20, false), 35);
    }

    #[test]
    fn test_profile_bonus() {
        assert_eq!(compose_score(None, true, 0, 0, true), 75);
    }

    #[test]
    fn test_score_stays_in_bounds_for_all_combinations() {
        let ranking = ranking_with_max(185.0);
        for forms in [None, Some(&ranking)] {
            for has_timing in [false, true] {
                for enhancers in 0..8 {
                    for inhibitors in 0..8 {
                        for personalized in [false, true] {
                            let score = compose_score(
                                forms,
                                has_timing,
                                enhancers,
                                inhibitors,
                                personalized,
                            );
                            assert!(score <= 100);
                        }
                    }
                }
            }
        }
    }
}
