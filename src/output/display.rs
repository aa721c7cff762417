//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar};
use crate::commands::{AnalysisResult, AuditReport, CheckResult, PartitionStatus};
use colored::Colorize;

/// Print the feedback of a single check
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n{}  {}",
        colored_guess(&result.guess, result.feedback),
        result.feedback.to_emoji()
    );
    println!(
        "Answer {} · guess {}",
        result.answer.text().bright_yellow(),
        result.guess.text().bright_white()
    );
    if result.feedback.is_solved() {
        println!("{}", "✅ Solved!".green().bold());
    }
    println!();
}

/// Print how a guess partitions the answers
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Analysis: {}", result.guess.text().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    println!("\n  Answers:            {}", result.total_answers);
    println!("  Distinct patterns:  {}", result.distinct_patterns);
    println!("  Largest bucket:     {}", result.largest_bucket);
    println!(
        "  Expected remaining: {:.2}",
        result.expected_remaining
    );

    if !result.top_patterns.is_empty() {
        println!("\n  Most common feedback:");
        for (feedback, count) in &result.top_patterns {
            println!(
                "    {}  {} {count}",
                feedback.to_emoji(),
                create_progress_bar(*count as f64, result.largest_bucket as f64, 20).cyan()
            );
        }
    }
    println!();
}

/// Print the findings of a word list audit
pub fn print_audit_report(report: &AuditReport) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "  WORD LIST AUDIT".bright_white().bold());
    println!("{}", "═".repeat(60).bright_cyan());

    println!(
        "\n  Partitions checked: {}",
        report.partitions.len().to_string().bright_white()
    );
    println!(
        "  Playable words:     {}",
        report.total_words().to_string().bright_green()
    );
    println!(
        "  Time:               {:.2}s",
        report.duration.as_secs_f64()
    );

    let problems: Vec<_> = report.problems().collect();
    if problems.is_empty() {
        println!("\n  {}", "✅ No problems found".green().bold());
        println!();
        return;
    }

    println!("\n  {}", "Problems:".bright_red().bold());
    for partition in problems {
        let label = format!("{}行", partition.leading);
        match &partition.status {
            PartitionStatus::Failed(reason) => {
                println!("    {} {}", label.bright_yellow(), reason.red());
            }
            PartitionStatus::Empty => {
                println!("    {} {}", label.bright_yellow(), "empty".red());
            }
            PartitionStatus::Loaded(count) => {
                println!("    {} {count} words", label.bright_yellow());
            }
        }
        for word in &partition.misfiled {
            println!("      misfiled:  {word}");
        }
        for word in &partition.duplicates {
            println!("      duplicate: {word}");
        }
    }
    println!();
}
