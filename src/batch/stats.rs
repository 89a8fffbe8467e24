//! Summary statistics over a batch of analyses.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::analysis::AnalysisResult;

/// Fixed score bands. Boundaries are inclusive on the upper edge.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ScoreHistogram {
    #[serde(rename = "0-20")]
    pub band_0_20: usize,
    #[serde(rename = "21-40")]
    pub band_21_40: usize,
    #[serde(rename = "41-60")]
    pub band_41_60: usize,
    #[serde(rename = "61-80")]
    pub band_61_80: usize,
    #[serde(rename = "81-100")]
    pub band_81_100: usize,
}

impl ScoreHistogram {
    fn record(&mut self, score: u8) {
        match score {
            0..=20 => self.band_0_20 += 1,
            21..=40 => self.band_21_40 += 1,
            41..=60 => self.band_41_60 += 1,
            61..=80 => self.band_61_80 += 1,
            _ => self.band_81_100 += 1,
        }
    }

    /// Bands in ascending order, for display.
    pub fn bands(&self) -> [(&'static str, usize); 5] {
        [
            ("0-20", self.band_0_20),
            ("21-40", self.band_21_40),
            ("41-60", self.band_41_60),
            ("61-80", self.band_61_80),
            ("81-100", self.band_81_100),
        ]
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoredSupplement {
    pub supplement: String,
    pub score: u8,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NameCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BatchStats {
    pub total_supplements: usize,
    /// Arithmetic mean rounded to one decimal; 0.0 for an empty batch.
    pub mean_score: f64,
    pub score_histogram: ScoreHistogram,
    /// Every analysis scoring 70 or above, in batch order.
    pub high_bioavailability: Vec<ScoredSupplement>,
    pub top_enhancers: Vec<NameCount>,
    pub top_inhibitors: Vec<NameCount>,
}

const HIGH_SCORE_THRESHOLD: u8 = 70;
const TOP_LIST_LEN: usize = 5;

/// Count occurrences, then keep the five most frequent. Ties are broken
/// alphabetically so the output is deterministic.
fn top_counts(counts: BTreeMap<String, usize>) -> Vec<NameCount> {
    let mut entries: Vec<NameCount> = counts
        .into_iter()
        .map(|(name, count)| NameCount { name, count })
        .collect();
    // entries arrive name-ascending; the stable sort keeps that order
    // within equal counts
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(TOP_LIST_LEN);
    entries
}

pub fn compute_stats(analyses: &[AnalysisResult]) -> BatchStats {
    let mut histogram = ScoreHistogram::default();
    let mut high_bioavailability = Vec::new();
    let mut enhancer_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut inhibitor_counts: BTreeMap<String, usize> = BTreeMap::new();

    for analysis in analyses {
        histogram.record(analysis.score);

        if analysis.score >= HIGH_SCORE_THRESHOLD {
            high_bioavailability.push(ScoredSupplement {
                supplement: analysis.supplement.clone(),
                score: analysis.score,
            });
        }

        for enhancer in &analysis.enhancers {
            *enhancer_counts.entry(enhancer.name.clone()).or_insert(0) += 1;
        }
        for inhibitor in &analysis.inhibitors {
            *inhibitor_counts.entry(inhibitor.key().to_string()).or_insert(0) += 1;
        }
    }

    let mean_score = if analyses.is_empty() {
        0.0
    } else {
        let sum: u32 = analyses.iter().map(|a| u32::from(a.score)).sum();
        (sum as f64 / analyses.len() as f64 * 10.0).round() / 10.0
    };

    BatchStats {
        total_supplements: analyses.len(),
        mean_score,
        score_histogram: histogram,
        high_bioavailability,
        top_enhancers: top_counts(enhancer_counts),
        top_inhibitors: top_counts(inhibitor_counts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::run_batch;
    use crate::config::DEFAULT_SUPPLEMENTS;
    use crate::reference::ReferenceStore;

    fn default_batch() -> Vec<AnalysisResult> {
        let store = ReferenceStore::builtin();
        let names: Vec<String> = DEFAULT_SUPPLEMENTS.iter().map(|s| s.to_string()).collect();
        run_batch(&store, &names, None).analyses
    }

    #[test]
    fn test_default_list_score_vector() {
        let analyses = default_batch();
        let scores: Vec<(&str, u8)> = analyses
            .iter()
            .map(|a| (a.supplement.as_str(), a.score))
            .collect();
        assert_eq!(
            scores,
            vec![
                ("Curcumin", 100),
                ("Omega-3", 87),
                ("Vitamin D", 91),
                ("Magnesium", 59),
                ("Zinc", 41),
                ("Iron", 55),
                ("CoQ10", 90),
                ("Probiotics", 65),
                ("Melatonin", 65),
                ("Vitamin B12", 50),
                ("Calcium", 46),
                ("Vitamin C", 55),
                ("Vitamin E", 55),
                ("Ashwagandha", 50),
                ("Rhodiola rosea", 50),
            ]
        );
    }

    #[test]
    fn test_default_list_stats() {
        let stats = compute_stats(&default_batch());

        assert_eq!(stats.total_supplements, 15);
        assert_eq!(stats.mean_score, 63.9);
        assert_eq!(stats.score_histogram.bands().map(|(_, n)| n), [0, 0, 9, 2, 4]);

        let high: Vec<&str> = stats
            .high_bioavailability
            .iter()
            .map(|s| s.supplement.as_str())
            .collect();
        assert_eq!(high, vec!["Curcumin", "Omega-3", "Vitamin D", "CoQ10"]);

        let enhancers: Vec<(&str, usize)> = stats
            .top_enhancers
            .iter()
            .map(|e| (e.name.as_str(), e.count))
            .collect();
        assert_eq!(
            enhancers,
            vec![
                ("lecithin", 4),
                ("piperine", 2),
                ("quercetin", 2),
                ("fat_for_curcumin", 1),
                ("piperine_for_curcumin", 1),
            ]
        );

        let inhibitors: Vec<(&str, usize)> = stats
            .top_inhibitors
            .iter()
            .map(|e| (e.name.as_str(), e.count))
            .collect();
        assert_eq!(
            inhibitors,
            vec![
                ("phytates", 4),
                ("calcium_vs_magnesium", 2),
                ("iron_vs_zinc", 2),
                ("oxalates", 2),
                ("tannins", 2),
            ]
        );
    }

    #[test]
    fn test_empty_batch_yields_zeroed_stats() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total_supplements, 0);
        assert_eq!(stats.mean_score, 0.0);
        assert_eq!(stats.score_histogram, ScoreHistogram::default());
        assert!(stats.high_bioavailability.is_empty());
        assert!(stats.top_enhancers.is_empty());
        assert!(stats.top_inhibitors.is_empty());
    }

    #[test]
    fn test_histogram_band_boundaries() {
        let mut histogram = ScoreHistogram::default();
        for score in [0, 20, 21, 40, 41, 60, 61, 80, 81, 100] {
            histogram.record(score);
        }
        assert_eq!(histogram.bands().map(|(_, n)| n), [2, 2, 2, 2, 2]);
    }
}
