//! Command implementations

pub mod analyze;
pub mod audit;
pub mod check;
pub mod simple;

pub use analyze::{AnalysisResult, analyze_guess, collect_answers};
pub use audit::{AuditReport, PartitionReport, PartitionStatus, run_audit};
pub use check::{CheckResult, check_words, parse_word_input};
pub use simple::run_simple;
