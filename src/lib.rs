//! Supplement bioavailability analyzer.
//!
//! Curated reference tables (pharmaceutical forms, circadian timing, food
//! interactions, absorption enhancers and inhibitors, individual factors)
//! feed a rule-based scoring engine that produces a bounded 0-100 score and
//! a structured analysis per supplement. The batch layer runs the engine
//! over a supplement list and aggregates summary statistics; the report
//! layer writes JSON dumps and formats console output.

pub mod analysis;
pub mod batch;
pub mod config;
pub mod reference;
pub mod report;
