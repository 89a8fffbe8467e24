use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use bioavail::analysis::{analyze, validate_profile, UserProfile};
use bioavail::batch::{compute_stats, run_batch};
use bioavail::config::{load_config, write_starter_config, Config, ProfileConfig};
use bioavail::reference::ReferenceStore;
use bioavail::report;

const EXIT_SUCCESS: i32 = 0;
// Batch completed but some supplements failed
const EXIT_BATCH: i32 = 1;
// Config, profile, or reference table validation errors
const EXIT_CONFIG: i32 = 2;
// Report files could not be written
const EXIT_REPORT: i32 = 3;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze the configured supplement list (default if no subcommand)
    Batch,
    /// Analyze a single supplement by name
    Analyze {
        /// Supplement name, e.g. "Curcumin" or "Vitamin D"
        name: String,

        /// Age in years for personalized recommendations
        #[arg(long)]
        age: Option<i64>,

        /// Gastro condition tag (repeatable), e.g. --gastro celiac
        #[arg(long = "gastro", value_name = "TAG")]
        gastro: Vec<String>,

        /// Lifestyle tag (repeatable), e.g. --lifestyle athlete
        #[arg(long = "lifestyle", value_name = "TAG")]
        lifestyle: Vec<String>,

        /// Write the JSON report to the output directory
        #[arg(long)]
        save: bool,

        /// Skip personalization, even if the config has a profile
        #[arg(long)]
        no_profile: bool,
    },
    /// Show the reference table inventory
    Tables,
    /// Write a commented starter config
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "bioavail")]
#[command(about = "Supplement bioavailability analyzer", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/bioavail/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Report directory (defaults to config output_dir, then ~/bioavailability_reports)
    #[arg(short, long, global = true)]
    output_dir: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Print collected validation errors and bail.
fn exit_with_errors(header: &str, errors: &[String]) -> ! {
    eprintln!("{}", header);
    for error in errors {
        eprintln!("  - {}", error);
    }
    std::process::exit(EXIT_CONFIG);
}

/// Validate a config profile, if the config has one.
fn profile_from_config(store: &ReferenceStore, profile: Option<&ProfileConfig>) -> Option<UserProfile> {
    let raw = profile?;
    match validate_profile(
        store.individual_factors(),
        raw.age_or_default(),
        &raw.gastro_conditions,
        &raw.lifestyle,
    ) {
        Ok(p) => Some(p),
        Err(errors) => exit_with_errors("Profile errors:", &errors),
    }
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Batch);
    let start_time = Instant::now();

    // Init runs before config loading; it may be creating the very file
    // load_config would complain about.
    if let Commands::Init { force } = command {
        let config_path = cli.config.map(PathBuf::from);
        match write_starter_config(config_path, force) {
            Ok(path) => {
                println!("Starter config written to {}", path.display());
                std::process::exit(EXIT_SUCCESS);
            }
            Err(e) => {
                eprintln!("Init error: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config: Config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate reference tables at startup
    let store = ReferenceStore::builtin();
    if let Err(errors) = store.validate() {
        exit_with_errors("Reference table errors:", &errors);
    }

    let output_dir = cli
        .output_dir
        .map(PathBuf::from)
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(report::default_report_dir);

    let use_colors = report::should_use_colors();

    match command {
        Commands::Batch => {
            let profile = profile_from_config(&store, config.profile.as_ref());
            let supplements = config.supplement_list();

            if cli.verbose {
                eprintln!("Analyzing {} supplements from config", supplements.len());
            }

            let mut run = run_batch(&store, &supplements, profile.as_ref());
            let stats = compute_stats(&run.analyses);

            for failure in &run.failures {
                eprintln!("Skipped '{}': {}", failure.supplement, failure.error);
            }

            // Display order: score descending, name ascending for ties
            run.analyses.sort_by(|a, b| {
                b.score
                    .cmp(&a.score)
                    .then_with(|| a.supplement.cmp(&b.supplement))
            });

            if cli.verbose && !run.analyses.is_empty() {
                for analysis in &run.analyses {
                    println!("{}", report::format_analysis_detail(analysis, use_colors));
                    println!();
                }
            } else {
                println!("{}", report::format_scored_table(&run.analyses, use_colors));
                println!();
            }
            println!("{}", report::format_stats_summary(&stats, use_colors));

            if let Err(e) = report::ensure_report_dir(&output_dir) {
                eprintln!("Report error: {}", e);
                std::process::exit(EXIT_REPORT);
            }

            let mut write_failed = false;
            for analysis in &run.analyses {
                match report::save_analysis(&output_dir, analysis) {
                    Ok(path) => {
                        if cli.verbose {
                            eprintln!("Wrote {}", path.display());
                        }
                    }
                    Err(e) => {
                        eprintln!("Failed to write report for {}: {}", analysis.supplement, e);
                        write_failed = true;
                    }
                }
            }

            if let Err(e) = report::save_consolidated(&output_dir, &run.analyses) {
                eprintln!("Report error: {}", e);
                std::process::exit(EXIT_REPORT);
            }
            if let Err(e) = report::save_stats(&output_dir, &stats) {
                eprintln!("Report error: {}", e);
                std::process::exit(EXIT_REPORT);
            }

            println!();
            println!("Reports written to {}", output_dir.display());

            if cli.verbose {
                eprintln!(
                    "Analyzed {} supplements in {:?}",
                    run.analyses.len(),
                    start_time.elapsed()
                );
            }

            if !run.failures.is_empty() || write_failed {
                std::process::exit(EXIT_BATCH);
            }
        }
        Commands::Analyze {
            name,
            age,
            gastro,
            lifestyle,
            save,
            no_profile,
        } => {
            let name = name.trim();
            if name.is_empty() {
                eprintln!("Supplement name must not be blank");
                std::process::exit(EXIT_CONFIG);
            }

            // Profile flags replace the config profile entirely
            let profile = if no_profile {
                None
            } else if age.is_some() || !gastro.is_empty() || !lifestyle.is_empty() {
                match validate_profile(
                    store.individual_factors(),
                    age.unwrap_or(30),
                    &gastro,
                    &lifestyle,
                ) {
                    Ok(p) => Some(p),
                    Err(errors) => exit_with_errors("Profile errors:", &errors),
                }
            } else {
                profile_from_config(&store, config.profile.as_ref())
            };

            let analysis = analyze(&store, name, profile.as_ref());
            println!("{}", report::format_analysis_detail(&analysis, use_colors));

            if save {
                if let Err(e) = report::ensure_report_dir(&output_dir) {
                    eprintln!("Report error: {}", e);
                    std::process::exit(EXIT_REPORT);
                }
                match report::save_analysis(&output_dir, &analysis) {
                    Ok(path) => println!("Report written to {}", path.display()),
                    Err(e) => {
                        eprintln!("Report error: {}", e);
                        std::process::exit(EXIT_REPORT);
                    }
                }
            }

            if cli.verbose {
                eprintln!("Analyzed {} in {:?}", analysis.supplement, start_time.elapsed());
            }
        }
        Commands::Tables => {
            println!("{}", report::format_tables_inventory(&store, use_colors));
        }
        Commands::Init { .. } => unreachable!("handled before config loading"),
    }

    std::process::exit(EXIT_SUCCESS);
}
