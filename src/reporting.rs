//! Console output for dataset checks.
//!
//! Warnings are grouped by kind; each group lists every offending entry.

use crate::graph::DatasetReport;
use anyhow::Result;
use colored::Colorize;
use std::fmt::Write;

/// Prints a formatted dataset report to stdout.
///
/// # Errors
/// Returns error if formatting fails.
pub fn print_report(report: &DatasetReport) -> Result<()> {
    print!("{}", render_report(report)?);
    Ok(())
}

/// Prints the report as pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_report_json(report: &DatasetReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Builds the colored report text.
///
/// # Errors
/// Returns error if writing to the buffer fails.
pub fn render_report(report: &DatasetReport) -> Result<String> {
    let mut out = String::new();

    if !report.dangling.is_empty() {
        writeln!(out, "{}", "warn: following entries with no profile".yellow().bold())?;
        for d in &report.dangling {
            writeln!(out, "  {} {} -> {}", "-->".blue(), d.follower, d.target.yellow())?;
        }
    }
    if !report.self_follows.is_empty() {
        writeln!(out, "{}", "warn: users following themselves".yellow().bold())?;
        for u in &report.self_follows {
            writeln!(out, "  {} {u}", "-->".blue())?;
        }
    }
    if !report.repeated_follows.is_empty() {
        writeln!(out, "{}", "warn: repeated following entries".yellow().bold())?;
        for (user, target) in &report.repeated_follows {
            writeln!(out, "  {} {user} lists {} more than once", "-->".blue(), target.yellow())?;
        }
    }

    writeln!(
        out,
        "{} users, {} follow edges",
        report.users, report.follow_edges
    )?;
    if report.is_clean() {
        writeln!(out, "{}", "Dataset is consistent.".green().bold())?;
    } else {
        let n = report.warning_count();
        writeln!(
            out,
            "{}",
            format!("{n} {}", pluralize("warning", n)).yellow().bold()
        )?;
    }
    Ok(out)
}

fn pluralize(word: &str, n: usize) -> String {
    if n == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{validate, Twitterverse, User};

    #[test]
    fn test_render_report() -> Result<()> {
        colored::control::set_override(false);
        let graph = Twitterverse::from_users([User::new("a").following(["ghost"]), User::new("b")])?;
        let text = render_report(&validate(&graph))?;
        assert!(text.contains("a -> ghost"));
        assert!(text.contains("2 users, 1 follow edges"));
        assert!(text.contains("1 warning\n"));
        Ok(())
    }

    #[test]
    fn test_render_clean() -> Result<()> {
        colored::control::set_override(false);
        let graph = Twitterverse::from_users([User::new("a")])?;
        let text = render_report(&validate(&graph))?;
        assert!(text.contains("Dataset is consistent."));
        Ok(())
    }
}
