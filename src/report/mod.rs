pub mod formatter;

pub use formatter::{
    format_analysis_detail, format_scored_table, format_stats_summary, format_tables_inventory,
    should_use_colors,
};

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::AnalysisResult;
use crate::batch::BatchStats;

/// Consolidated report file name (JSON object keyed by supplement name).
pub const FULL_REPORT_FILE: &str = "bioavailability_analysis_full.json";

/// Batch statistics file name.
pub const STATS_FILE: &str = "bioavailability_stats.json";

/// Get the default report directory path (~/bioavailability_reports)
pub fn default_report_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join("bioavailability_reports")
}

/// Ensure the report directory exists
pub fn ensure_report_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create report directory at {}", dir.display()))?;
    }
    Ok(())
}

/// File name for one supplement's report; spaces become underscores.
pub fn analysis_file_name(supplement: &str) -> String {
    format!("{}_bioavailability.json", supplement.replace(' ', "_"))
}

/// Write a value as pretty JSON, atomically (write-then-rename).
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open report file at {}", path.display()))?;
    serde_json::to_writer_pretty(&mut file, value)
        .with_context(|| format!("Failed to serialize report for {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save report at {}", path.display()))?;
    Ok(())
}

/// Save one supplement's analysis; returns the path written.
pub fn save_analysis(dir: &Path, analysis: &AnalysisResult) -> Result<PathBuf> {
    let path = dir.join(analysis_file_name(&analysis.supplement));
    write_json(&path, analysis)?;
    Ok(path)
}

/// Save the consolidated report, keyed by supplement name.
pub fn save_consolidated(dir: &Path, analyses: &[AnalysisResult]) -> Result<PathBuf> {
    let by_name: BTreeMap<&str, &AnalysisResult> = analyses
        .iter()
        .map(|a| (a.supplement.as_str(), a))
        .collect();
    let path = dir.join(FULL_REPORT_FILE);
    write_json(&path, &by_name)?;
    Ok(path)
}

/// Save batch statistics.
pub fn save_stats(dir: &Path, stats: &BatchStats) -> Result<PathBuf> {
    let path = dir.join(STATS_FILE);
    write_json(&path, stats)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::batch::compute_stats;
    use crate::reference::ReferenceStore;
    use std::env;

    fn temp_report_dir(tag: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("bioavail_test_reports_{}", tag));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_analysis_file_name_replaces_spaces() {
        assert_eq!(analysis_file_name("Curcumin"), "Curcumin_bioavailability.json");
        assert_eq!(
            analysis_file_name("Vitamin D"),
            "Vitamin_D_bioavailability.json"
        );
        assert_eq!(
            analysis_file_name("Rhodiola rosea"),
            "Rhodiola_rosea_bioavailability.json"
        );
    }

    #[test]
    fn test_save_analysis_roundtrip() {
        let dir = temp_report_dir("single");
        let analysis = analyze(&ReferenceStore::builtin(), "Vitamin D", None);

        let path = save_analysis(&dir, &analysis).unwrap();
        assert_eq!(path.file_name().unwrap(), "Vitamin_D_bioavailability.json");

        let content = fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["supplement"], "Vitamin D");
        assert_eq!(json["score"], 91);
        assert!(json.get("forms").is_some());
        assert!(json.get("recommendations").is_none());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_analysis_omits_uncovered_sections() {
        let dir = temp_report_dir("sections");
        let analysis = analyze(&ReferenceStore::builtin(), "Melatonin", None);

        let path = save_analysis(&dir, &analysis).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(json.get("forms").is_none());
        assert!(json.get("timing").is_some());
        assert!(json.get("food_interactions").is_none());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_consolidated_keys_by_name() {
        let dir = temp_report_dir("full");
        let store = ReferenceStore::builtin();
        let analyses = vec![
            analyze(&store, "Curcumin", None),
            analyze(&store, "Iron", None),
        ];

        let path = save_consolidated(&dir, &analyses).unwrap();
        assert_eq!(path.file_name().unwrap(), FULL_REPORT_FILE);

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["Curcumin"]["score"], 100);
        assert_eq!(json["Iron"]["score"], 55);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_stats() {
        let dir = temp_report_dir("stats");
        let store = ReferenceStore::builtin();
        let analyses = vec![
            analyze(&store, "Curcumin", None),
            analyze(&store, "Melatonin", None),
        ];

        let path = save_stats(&dir, &compute_stats(&analyses)).unwrap();
        assert_eq!(path.file_name().unwrap(), STATS_FILE);

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["total_supplements"], 2);
        assert_eq!(json["mean_score"], 82.5);
        assert_eq!(json["high_bioavailability"][0]["supplement"], "Curcumin");

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_analysis_fails_on_missing_dir() {
        let dir = env::temp_dir().join("bioavail_test_reports_missing_nested/none");
        let analysis = analyze(&ReferenceStore::builtin(), "Zinc", None);
        assert!(save_analysis(&dir, &analysis).is_err());
    }
}
