//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{DependentsReport, ReportGenerator};
use crate::error::DotGraphError;

pub struct HumanReportGenerator;

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, report: &DependentsReport) -> Result<String, DotGraphError> {
        let mut output = String::new();

        if !report.known {
            writeln!(
                output,
                "{} Node {} does not appear in the top-level graph",
                style("ℹ").blue(),
                style(&report.node).bold()
            )?;
            return Ok(output);
        }

        if report.dependents.is_empty() {
            writeln!(
                output,
                "{} Nothing points at {}",
                style("✓").green(),
                style(&report.node).bold()
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "{} {} {} {} at {}:",
            style("🔗").cyan(),
            style(report.dependents.len()).yellow().bold(),
            pluralize("node", report.dependents.len()),
            if report.dependents.len() == 1 { "points" } else { "point" },
            style(&report.node).bold()
        )?;
        for dependent in &report.dependents {
            writeln!(output, "  {} {}", style("←").dim(), dependent)?;
        }

        Ok(output)
    }
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
