//! Word list audit command
//!
//! Loads every partition straight from the source and reports missing or empty
//! lists, words filed under the wrong leading symbol, and duplicates.

use crate::core::{KanaWord, Symbol};
use crate::wordlists::{AnswerEntry, WordListSource};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// How one partition loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionStatus {
    Loaded(usize),
    Empty,
    Failed(String),
}

/// Audit findings for one leading symbol
#[derive(Debug, Clone)]
pub struct PartitionReport {
    pub leading: Symbol,
    pub status: PartitionStatus,
    /// Words whose first symbol is not `leading`
    pub misfiled: Vec<KanaWord>,
    pub duplicates: Vec<KanaWord>,
}

impl PartitionReport {
    fn from_entries(leading: Symbol, entries: &[AnswerEntry]) -> Self {
        let status = if entries.is_empty() {
            PartitionStatus::Empty
        } else {
            PartitionStatus::Loaded(entries.len())
        };

        let misfiled = entries
            .par_iter()
            .filter(|entry| entry.kana().leading() != leading)
            .map(|entry| entry.kana().clone())
            .collect();

        let mut seen = FxHashSet::default();
        let duplicates = entries
            .iter()
            .filter(|entry| !seen.insert(entry.kana()))
            .map(|entry| entry.kana().clone())
            .collect();

        Self {
            leading,
            status,
            misfiled,
            duplicates,
        }
    }

    /// Whether the partition loaded with no findings
    #[must_use]
    pub fn is_clean(&self) -> bool {
        matches!(self.status, PartitionStatus::Loaded(_))
            && self.misfiled.is_empty()
            && self.duplicates.is_empty()
    }
}

/// Audit of a whole word list source
#[derive(Debug, Clone)]
pub struct AuditReport {
    pub partitions: Vec<PartitionReport>,
    pub duration: Duration,
}

impl AuditReport {
    /// Playable words across all partitions
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.partitions
            .iter()
            .map(|p| match p.status {
                PartitionStatus::Loaded(n) => n - p.misfiled.len(),
                _ => 0,
            })
            .sum()
    }

    /// Partitions with at least one finding
    pub fn problems(&self) -> impl Iterator<Item = &PartitionReport> {
        self.partitions.iter().filter(|p| !p.is_clean())
    }
}

/// Load and check the partition of every symbol in `leading`
pub async fn run_audit<S: WordListSource>(
    source: &S,
    leading: &[Symbol],
    show_progress: bool,
) -> AuditReport {
    let start = Instant::now();

    let progress = if show_progress {
        let pb = ProgressBar::new(leading.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░ "),
        );
        Some(pb)
    } else {
        None
    };

    let mut partitions = Vec::with_capacity(leading.len());
    for &symbol in leading {
        if let Some(ref pb) = progress {
            pb.set_message(format!("{symbol}行"));
        }

        let report = match source.load(symbol).await {
            Ok(entries) => PartitionReport::from_entries(symbol, &entries),
            Err(e) => {
                log::debug!("Audit could not load {symbol}: {e}");
                PartitionReport {
                    leading: symbol,
                    status: PartitionStatus::Failed(e.to_string()),
                    misfiled: Vec::new(),
                    duplicates: Vec::new(),
                }
            }
        };
        partitions.push(report);

        if let Some(ref pb) = progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_with_message("Done!");
    }

    AuditReport {
        partitions,
        duration: start.elapsed(),
    }
}
