//! Competence: Python student code analysis and guided prompts
//!
//! This library inspects short Python snippets written by students, flags a
//! handful of common issues, and turns those findings into learning prompts.
//! The pipeline is analyzer -> prompt generator -> evaluation report.

pub mod analyzer;
pub mod config;
pub mod demo;
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod prompts;
pub mod reporter;

pub use error::{Error, Result};
pub use evaluator::CompetenceEvaluator;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Confidence attached to every analysis. Fixed, not a calibrated probability.
pub const ANALYSIS_CONFIDENCE: f64 = 0.8;

/// Results from analyzing one snippet of student code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Parse failures and textual syntax warnings, in detection order
    pub syntax_errors: Vec<String>,
    /// Reserved for logic checks; no current rule fills it
    pub logical_issues: Vec<String>,
    /// Heuristically detected misconceptions
    pub misconceptions: Vec<String>,
    /// Structural density proxy (0.0-1.0)
    pub complexity_score: f64,
    /// Analyzer confidence (0.0-1.0)
    pub confidence: f64,
}

impl AnalysisResult {
    /// Result for code that failed to parse. Complexity is never computed on this path.
    pub fn parse_failure(message: &str) -> Self {
        Self {
            syntax_errors: vec![format!("Syntax error: {}", message)],
            logical_issues: Vec::new(),
            misconceptions: Vec::new(),
            complexity_score: 0.0,
            confidence: ANALYSIS_CONFIDENCE,
        }
    }

    /// Whether any check fired
    pub fn has_findings(&self) -> bool {
        !self.syntax_errors.is_empty()
            || !self.logical_issues.is_empty()
            || !self.misconceptions.is_empty()
    }
}

/// Category of a generated prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptCategory {
    Conceptual,
    Debugging,
    Extension,
}

impl PromptCategory {
    /// Title-cased label for console output ("Debugging")
    pub fn title(&self) -> &'static str {
        match self {
            PromptCategory::Conceptual => "Conceptual",
            PromptCategory::Debugging => "Debugging",
            PromptCategory::Extension => "Extension",
        }
    }
}

impl std::fmt::Display for PromptCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptCategory::Conceptual => write!(f, "conceptual"),
            PromptCategory::Debugging => write!(f, "debugging"),
            PromptCategory::Extension => write!(f, "extension"),
        }
    }
}

/// A generated competence assessment prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPrompt {
    /// Question shown to the student
    pub text: String,
    pub category: PromptCategory,
    /// Difficulty (1-5)
    #[serde(rename = "difficulty")]
    pub difficulty_level: u8,
    #[serde(rename = "objective")]
    pub learning_objective: String,
}

/// Summary over the prompts of one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_prompts: usize,
    /// Distinct categories present (set semantics; sorted for stable output)
    pub categories: BTreeSet<PromptCategory>,
    /// Mean difficulty, 0 when no prompts were generated
    pub avg_difficulty: f64,
}

impl ReportSummary {
    pub fn from_prompts(prompts: &[GeneratedPrompt]) -> Self {
        let categories = prompts.iter().map(|p| p.category).collect();
        let avg_difficulty = if prompts.is_empty() {
            0.0
        } else {
            let total: u32 = prompts.iter().map(|p| p.difficulty_level as u32).sum();
            total as f64 / prompts.len() as f64
        };
        Self {
            total_prompts: prompts.len(),
            categories,
            avg_difficulty,
        }
    }
}

/// Complete evaluation of one snippet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// The evaluated code, as given
    pub code: String,
    pub analysis: AnalysisResult,
    pub generated_prompts: Vec<GeneratedPrompt>,
    pub summary: ReportSummary,
}

/// Location in a source snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Public API: evaluate a snippet with the default analyzer and prompt rules.
pub fn evaluate_source(code: &str) -> Result<EvaluationReport> {
    let evaluator: CompetenceEvaluator = CompetenceEvaluator::default();
    evaluator.evaluate_student_code(code)
}
