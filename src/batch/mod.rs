//! Batch analysis over a supplement list.

pub mod stats;

use std::collections::HashSet;

use crate::analysis::{analyze, AnalysisResult, UserProfile};
use crate::reference::ReferenceStore;

pub use stats::{compute_stats, BatchStats, NameCount, ScoreHistogram, ScoredSupplement};

/// Per-item problem recorded without aborting the batch.
#[derive(Debug, Clone, serde::Serialize, PartialEq)]
pub struct BatchFailure {
    pub supplement: String,
    pub error: String,
}

#[derive(Debug, Clone)]
pub struct BatchRun {
    pub analyses: Vec<AnalysisResult>,
    pub failures: Vec<BatchFailure>,
}

/// Analyze every name in the list. Names are trimmed first; blanks are
/// recorded as failures, and repeats after the first occurrence are skipped
/// silently. Analysis itself never fails, so the failure list covers input
/// hygiene only; the caller may append report-layer failures afterwards.
pub fn run_batch(
    store: &ReferenceStore,
    names: &[String],
    profile: Option<&UserProfile>,
) -> BatchRun {
    let mut seen = HashSet::new();
    let mut analyses = Vec::new();
    let mut failures = Vec::new();

    for raw in names {
        let name = raw.trim();
        if name.is_empty() {
            failures.push(BatchFailure {
                supplement: raw.clone(),
                error: "blank supplement name".to_string(),
            });
            continue;
        }
        if !seen.insert(name.to_string()) {
            continue;
        }
        analyses.push(analyze(store, name, profile));
    }

    BatchRun { analyses, failures }
}
