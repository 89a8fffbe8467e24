use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::analysis::AnalysisResult;
use crate::batch::{BatchStats, NameCount};
use crate::reference::ReferenceStore;

/// Scores at or above this render green; at or below `LOW_SCORE`, red.
const HIGH_SCORE: u8 = 70;
const LOW_SCORE: u8 = 40;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a supplement name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Compact per-section coverage flags: F(orms) T(iming) I(nteractions)
/// R(ecommendations), with `-` for sections the tables did not cover.
fn section_flags(analysis: &AnalysisResult) -> String {
    let mut flags = String::with_capacity(4);
    flags.push(if analysis.forms.is_some() { 'F' } else { '-' });
    flags.push(if analysis.timing.is_some() { 'T' } else { '-' });
    flags.push(if analysis.food_interactions.is_some() { 'I' } else { '-' });
    flags.push(if analysis.recommendations.is_some() { 'R' } else { '-' });
    flags
}

/// Color a pre-padded score string by band.
fn paint_score(score_padded: &str, score: u8) -> String {
    if score >= HIGH_SCORE {
        score_padded.green().to_string()
    } else if score <= LOW_SCORE {
        score_padded.red().to_string()
    } else {
        score_padded.yellow().to_string()
    }
}

/// Format analyses as a scored table with columns: Index, Score, Flags, Name
/// No headers; index column right-aligned, 1-based, with trailing dot
pub fn format_scored_table(analyses: &[AnalysisResult], use_colors: bool) -> String {
    if analyses.is_empty() {
        return "No supplements analyzed.".to_string();
    }

    let term_width = get_terminal_width();

    // Index column: 3 chars + 1 space = 4
    // Score column: 3 chars (fits "100")
    // Flags column: 4 chars
    let index_width = 3;
    let score_width = 3;
    let flags_width = 4;
    let separator = "  ";
    let fixed_width = index_width + 1 + score_width + separator.len() * 2 + flags_width;

    analyses
        .iter()
        .enumerate()
        .map(|(idx, analysis)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded = format!("{:>width$}", analysis.score, width = score_width);
            let flags = section_flags(analysis);

            let name = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_name(&analysis.supplement, width - fixed_width)
                } else {
                    // Very narrow terminal, show truncated
                    truncate_name(&analysis.supplement, 20)
                }
            } else {
                // No terminal (pipe), don't truncate
                analysis.supplement.clone()
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    index_str.dimmed(),
                    paint_score(&score_padded, analysis.score),
                    separator,
                    flags.dimmed(),
                    separator,
                    name
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    index_str, score_padded, separator, flags, separator, name
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single analysis with detailed multi-line output
pub fn format_analysis_detail(analysis: &AnalysisResult, use_colors: bool) -> String {
    let mut lines = Vec::new();

    let score_str = format!("{}/100", analysis.score);
    if use_colors {
        lines.push(format!(
            "{}  [{}]",
            analysis.supplement.bold(),
            paint_score(&score_str, analysis.score)
        ));
    } else {
        lines.push(format!("{}  [{}]", analysis.supplement, score_str));
    }

    if let Some(forms) = &analysis.forms {
        if let Some(top) = forms.ranked.first() {
            if use_colors {
                lines.push(format!(
                    "  Best form: {} ({})",
                    top.id.cyan(),
                    forms.baseline_ratio
                ));
            } else {
                lines.push(format!("  Best form: {} ({})", top.id, forms.baseline_ratio));
            }
        }
        lines.push(format!(
            "  Optimal: {} | Best value: {}",
            forms.optimal, forms.best_value
        ));
    }

    if let Some(timing) = &analysis.timing {
        if use_colors {
            lines.push(format!(
                "  Timing: {} (clock: {})",
                timing.optimal_window.cyan(),
                timing.ideal_clock_time
            ));
        } else {
            lines.push(format!(
                "  Timing: {} (clock: {})",
                timing.optimal_window, timing.ideal_clock_time
            ));
        }
        lines.push(format!("  Rationale: {}", timing.rationale));
    }

    if let Some(food) = &analysis.food_interactions {
        lines.push(format!("  Meal timing: {}", food.meal_timing));
    }

    let enhancer_names: Vec<&str> = analysis.enhancers.iter().map(|e| e.name.as_str()).collect();
    let enhancers_line = if enhancer_names.is_empty() {
        "none matched".to_string()
    } else {
        enhancer_names.join(", ")
    };
    let inhibitor_keys: Vec<&str> = analysis.inhibitors.iter().map(|m| m.key()).collect();
    let inhibitors_line = if inhibitor_keys.is_empty() {
        "none matched".to_string()
    } else {
        inhibitor_keys.join(", ")
    };
    if use_colors {
        lines.push(format!("  Enhancers: {}", enhancers_line.green()));
        lines.push(format!("  Inhibitors: {}", inhibitors_line.red()));
    } else {
        lines.push(format!("  Enhancers: {}", enhancers_line));
        lines.push(format!("  Inhibitors: {}", inhibitors_line));
    }

    if let Some(rec) = &analysis.recommendations {
        lines.push(format!(
            "  Recommendation: {} form, {}, {}",
            rec.form, rec.timing, rec.dose_adjustment
        ));
        if !rec.precautions.is_empty() {
            lines.push(format!("  Precautions: {}", rec.precautions.join("; ")));
        }
        if !rec.monitoring.is_empty() {
            lines.push(format!("  Monitoring: {}", rec.monitoring.join("; ")));
        }
    }

    lines.join("\n")
}

/// Format a name-count list as "name (count), ..." or "none"
fn format_name_counts(counts: &[NameCount]) -> String {
    if counts.is_empty() {
        return "none".to_string();
    }
    counts
        .iter()
        .map(|nc| format!("{} ({})", nc.name, nc.count))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format batch statistics as a multi-line summary
pub fn format_stats_summary(stats: &BatchStats, use_colors: bool) -> String {
    let histogram = stats
        .score_histogram
        .bands()
        .iter()
        .map(|(band, count)| format!("{}: {}", band, count))
        .collect::<Vec<_>>()
        .join(" | ");

    let high = if stats.high_bioavailability.is_empty() {
        "none".to_string()
    } else {
        stats
            .high_bioavailability
            .iter()
            .map(|s| format!("{} ({})", s.supplement, s.score))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let enhancers = format_name_counts(&stats.top_enhancers);
    let inhibitors = format_name_counts(&stats.top_inhibitors);

    if use_colors {
        format!(
            "Supplements analyzed: {}\nMean score: {}/100\nScores: {}\nHigh bioavailability (70+): {}\nTop enhancers: {}\nTop inhibitors: {}",
            stats.total_supplements,
            stats.mean_score.bold(),
            histogram,
            high.green(),
            enhancers.green(),
            inhibitors.red()
        )
    } else {
        format!(
            "Supplements analyzed: {}\nMean score: {}/100\nScores: {}\nHigh bioavailability (70+): {}\nTop enhancers: {}\nTop inhibitors: {}",
            stats.total_supplements, stats.mean_score, histogram, high, enhancers, inhibitors
        )
    }
}

/// Format the reference table inventory (for the tables command)
pub fn format_tables_inventory(store: &ReferenceStore, use_colors: bool) -> String {
    let mut lines = Vec::new();

    let forms: Vec<&str> = store.forms().keys().map(|k| k.as_str()).collect();
    let timing: Vec<&str> = store.timing().keys().map(|k| k.as_str()).collect();
    let interactions: Vec<&str> = store.interactions().keys().map(|k| k.as_str()).collect();

    let (enhancers, inhibitors) = store.enhancers_and_inhibitors();
    let universal: Vec<&str> = enhancers.universal.iter().map(|e| e.name.as_str()).collect();
    let combos: Vec<&str> = enhancers.specific.iter().map(|e| e.key.as_str()).collect();
    let competition: Vec<&str> = inhibitors.competition.iter().map(|c| c.key.as_str()).collect();
    let chelators: Vec<&str> = inhibitors.chelators.iter().map(|c| c.name.as_str()).collect();
    let medications: Vec<&str> = inhibitors.medications.iter().map(|m| m.name.as_str()).collect();

    let factors = store.individual_factors();
    let brackets: Vec<String> = factors
        .age_brackets
        .iter()
        .map(|b| match b.max_age {
            Some(max) => format!("{} ({}-{})", b.label, b.min_age, max),
            None => format!("{} ({}+)", b.label, b.min_age),
        })
        .collect();

    let count_label = |label: &str, count: usize| {
        if use_colors {
            format!("{}: {}", label, count.bold())
        } else {
            format!("{}: {}", label, count)
        }
    };

    lines.push(format!(
        "{} ({})",
        count_label("Form rankings", forms.len()),
        forms.join(", ")
    ));
    lines.push(format!(
        "{} ({})",
        count_label("Timing profiles", timing.len()),
        timing.join(", ")
    ));
    lines.push(format!(
        "{} ({})",
        count_label("Food interactions", interactions.len()),
        interactions.join(", ")
    ));
    lines.push(format!("Universal enhancers: {}", universal.join(", ")));
    lines.push(format!("Combination enhancers: {}", combos.join(", ")));
    lines.push(format!("Transporter competition: {}", competition.join(", ")));
    lines.push(format!("Natural chelators: {}", chelators.join(", ")));
    lines.push(format!("Medication interactions: {}", medications.join(", ")));
    lines.push(format!("Age brackets: {}", brackets.join(", ")));
    lines.push(format!(
        "Gastro tags: {}",
        factors.gastro_tags().join(", ")
    ));
    lines.push(format!(
        "Lifestyle tags: {}",
        factors.lifestyle_tags().join(", ")
    ));

    lines.join("\n")
}
