//! Reporter module for output formatting

pub mod console;
pub mod json;

pub use console::ConsoleReporter;
pub use json::JsonReporter;

use crate::EvaluationReport;
use serde::Serialize;
use std::path::PathBuf;

/// An evaluation tied to the file it came from
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub report: EvaluationReport,
}

/// Totals across a batch of evaluated files; keys match the per-file report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    pub files_evaluated: usize,
    pub files_failed: usize,
    pub files_with_syntax_errors: usize,
    pub files_with_misconceptions: usize,
    pub total_prompts: usize,
}

impl AggregateStats {
    pub fn from_results(results: &[FileReport], files_failed: usize) -> Self {
        Self {
            files_evaluated: results.len(),
            files_failed,
            files_with_syntax_errors: results
                .iter()
                .filter(|r| !r.report.analysis.syntax_errors.is_empty())
                .count(),
            files_with_misconceptions: results
                .iter()
                .filter(|r| !r.report.analysis.misconceptions.is_empty())
                .count(),
            total_prompts: results.iter().map(|r| r.report.summary.total_prompts).sum(),
        }
    }
}
