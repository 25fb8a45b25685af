use colored::*;
use rowaudit_core::{AuditOutcome, Issue, Severity};
use std::path::Path;

pub fn print_audit_summary(input: &Path, outcome: &AuditOutcome, limit: usize) {
    let summary = outcome.summary();

    println!("\n{}", "═".repeat(60));
    println!("{}", "  DATA QUALITY AUDIT".bold());
    println!("{}", "═".repeat(60));
    println!("\n  Input: {}", input.display());

    match summary.highest_severity() {
        None => println!("\n{} {}", "✓".green().bold(), "No issues found".green().bold()),
        Some(Severity::Error) => println!("\n{} {}", "✗".red().bold(), "Errors found".red().bold()),
        Some(Severity::Warning) => println!(
            "\n{} {}",
            "!".yellow().bold(),
            "Warnings found".yellow().bold()
        ),
        Some(Severity::Info) => println!(
            "\n{} {}",
            "ℹ".blue().bold(),
            "Informational issues only".blue().bold()
        ),
    }

    let issues = outcome.issues();
    if !summary.is_clean() {
        println!("\n{}", "Issues:".bold());
        for issue in issues.iter().take(limit) {
            print_issue(issue);
        }
        if issues.len() > limit {
            println!("  ... and {} more", issues.len() - limit);
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Total records: {}", summary.total_records());
    println!("  Total issues: {}", summary.total_issues());
    for (severity, count) in summary.counts_by_severity().iter() {
        println!("    {:<8} {}", format!("{severity}:"), count);
    }
    println!("{}", "═".repeat(60));
}

fn print_issue(issue: &Issue) {
    println!(
        "  record {:<5} {:<12} {} {} {}",
        issue.record_index,
        issue.column,
        severity_label(issue.severity),
        issue.message,
        format!("({:?})", issue.value).dimmed()
    );
}

fn severity_label(severity: Severity) -> ColoredString {
    match severity {
        Severity::Error => "ERROR".red().bold(),
        Severity::Warning => "WARN ".yellow().bold(),
        Severity::Info => "INFO ".blue(),
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}
