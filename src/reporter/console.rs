//! Console reporter with colored output

use super::AggregateStats;
use crate::{EvaluationReport, PromptCategory};
use colored::{ColoredString, Colorize};
use std::fmt::Write;
use std::path::Path;

/// Reporter for terminal output. Renders into strings; callers decide where they go.
pub struct ConsoleReporter {
    /// Whether to include analysis messages and prompt objectives
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Analysis counts followed by the numbered prompt list
    pub fn render(&self, report: &EvaluationReport) -> String {
        let mut out = String::new();
        let analysis = &report.analysis;

        let _ = writeln!(out, "\n{}", "Analysis Results:".bold());
        let _ = writeln!(
            out,
            "  Syntax Errors: {}",
            Self::count(analysis.syntax_errors.len())
        );
        if self.verbose {
            for e in &analysis.syntax_errors {
                let _ = writeln!(out, "    - {}", e.dimmed());
            }
        }
        let _ = writeln!(
            out,
            "  Misconceptions: {}",
            Self::count(analysis.misconceptions.len())
        );
        if self.verbose {
            for m in &analysis.misconceptions {
                let _ = writeln!(out, "    - {}", m.dimmed());
            }
        }
        let _ = writeln!(out, "  Complexity Score: {:.2}", analysis.complexity_score);

        let _ = writeln!(
            out,
            "\n{}",
            format!("Generated Prompts ({}):", report.summary.total_prompts).bold()
        );
        for (j, prompt) in report.generated_prompts.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {}. [{}] {}",
                j + 1,
                Self::colorize_category(prompt.category),
                prompt.text
            );
            let _ = writeln!(out, "     Difficulty: {}/5", prompt.difficulty_level);
            if self.verbose {
                let _ = writeln!(out, "     Objective: {}", prompt.learning_objective.dimmed());
            }
            let _ = writeln!(out);
        }
        out
    }

    /// Report for one evaluated file: header, then `render`
    pub fn render_file(&self, path: &Path, report: &EvaluationReport) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}",
            format!("Student Code: {}", path.display()).bold()
        );
        out.push_str(&self.render(report));
        out
    }

    /// One line per file (quiet mode)
    pub fn render_quiet(&self, path: &Path, report: &EvaluationReport) -> String {
        format!(
            "{}: {} syntax, {} misconceptions, complexity {:.2}, {} prompts",
            path.display(),
            report.analysis.syntax_errors.len(),
            report.analysis.misconceptions.len(),
            report.analysis.complexity_score,
            report.summary.total_prompts
        )
    }

    /// Totals across a batch of files
    pub fn render_summary(&self, stats: &AggregateStats) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", "Summary:".bold());
        let _ = writeln!(out, "  Files evaluated: {}", stats.files_evaluated);
        if stats.files_failed > 0 {
            let _ = writeln!(
                out,
                "  Files failed: {}",
                stats.files_failed.to_string().red()
            );
        }
        let _ = writeln!(
            out,
            "  With syntax errors: {}",
            Self::count(stats.files_with_syntax_errors)
        );
        let _ = writeln!(
            out,
            "  With misconceptions: {}",
            Self::count(stats.files_with_misconceptions)
        );
        let _ = writeln!(out, "  Prompts generated: {}", stats.total_prompts);
        out
    }

    fn count(n: usize) -> ColoredString {
        if n == 0 {
            n.to_string().green()
        } else {
            n.to_string().yellow()
        }
    }

    fn colorize_category(category: PromptCategory) -> ColoredString {
        match category {
            PromptCategory::Debugging => category.title().red(),
            PromptCategory::Conceptual => category.title().cyan(),
            PromptCategory::Extension => category.title().magenta(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate_source;

    #[test]
    fn renders_counts_and_prompts() {
        colored::control::set_override(false);
        let report = evaluate_source("def calculate_sum(numbers):\n    total = 0\n    for num in numbers:\n        total += num").unwrap();
        let text = ConsoleReporter::new().render(&report);
        assert!(text.contains("  Syntax Errors: 0\n"));
        assert!(text.contains("  Misconceptions: 1\n"));
        assert!(text.contains("  Complexity Score: 0.30\n"));
        assert!(text.contains("Generated Prompts (1):"));
        assert!(text.contains("  1. [Conceptual] Think about what your function should give back"));
        assert!(text.contains("     Difficulty: 3/5\n"));
        assert!(!text.contains("Objective:"));
    }

    #[test]
    fn verbose_lists_messages_and_objectives() {
        colored::control::set_override(false);
        let report = evaluate_source("def f(x):\n    if x = 1:\n        pass").unwrap();
        let text = ConsoleReporter::new().verbose().render(&report);
        assert!(text.contains("    - Syntax error:"));
        assert!(text.contains("     Objective: Syntax error identification and resolution"));
    }

    #[test]
    fn quiet_line() {
        let report = evaluate_source("x = 1\n").unwrap();
        let line = ConsoleReporter::new().render_quiet(Path::new("a.py"), &report);
        assert_eq!(
            line,
            "a.py: 0 syntax, 0 misconceptions, complexity 0.00, 0 prompts"
        );
    }
}
