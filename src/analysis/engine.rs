//! Full analysis of a single supplement.

use chrono::Utc;

use crate::reference::ReferenceStore;

use super::matcher::{match_enhancers, match_inhibitors};
use super::personalize::{personalize, UserProfile};
use super::resolver::{food_report, rank_forms, timing_report};
use super::score::compose_score;
use super::types::AnalysisResult;

/// Analyze one supplement against the reference tables.
///
/// Never fails: a supplement absent from every table simply yields a result
/// with all sections omitted and the base score. The per-supplement tables
/// are keyed lookups; the enhancer/inhibitor catalogs are scanned.
pub fn analyze(
    store: &ReferenceStore,
    supplement: &str,
    profile: Option<&UserProfile>,
) -> AnalysisResult {
    let forms = store.forms_for(supplement).map(rank_forms);
    let timing = store.timing_for(supplement).map(timing_report);
    let food_interactions = store.interactions_for(supplement).map(food_report);

    let (enhancer_catalog, inhibitor_catalog) = store.enhancers_and_inhibitors();
    let enhancers = match_enhancers(enhancer_catalog, supplement);
    let inhibitors = match_inhibitors(inhibitor_catalog, supplement);

    let recommendations = profile.map(personalize);

    let score = compose_score(
        forms.as_ref(),
        timing.is_some(),
        enhancers.len(),
        inhibitors.len(),
        recommendations.is_some(),
    );

    AnalysisResult {
        supplement: supplement.to_string(),
        timestamp: Utc::now(),
        forms,
        timing,
        food_interactions,
        enhancers,
        inhibitors,
        recommendations,
        score,
    }
}
