//! Demonstration: runs three fixed student snippets through an evaluator

use crate::analyzer::CodeAnalyzer;
use crate::prompts::PromptGenerator;
use crate::reporter::ConsoleReporter;
use crate::CompetenceEvaluator;
use colored::Colorize;
use std::io::{self, Write};
use tracing::warn;

/// Sample student code with common issues. Surrounding whitespace is stripped
/// before evaluation.
pub const SAMPLE_CODES: [&str; 3] = [
    // Assignment in condition
    r#"
def check_number(x):
    if x = 5:
        return "equal"
    else:
        return "not equal"
        "#,
    // Missing return statement
    r#"
def calculate_sum(numbers):
    total = 0
    for num in numbers:
        total += num
        "#,
    // More complex but correct code
    r#"
def fibonacci(n):
    if n <= 1:
        return n
    else:
        return fibonacci(n-1) + fibonacci(n-2)
        "#,
];

const CLOSING_NOTES: [&str; 4] = [
    "Analyze Python code for common issues",
    "Detect potential misconceptions",
    "Generate targeted prompts for learning",
    "Classify prompts by category and difficulty",
];

/// How a demonstration run went
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemoOutcome {
    pub evaluated: usize,
    pub failed: usize,
}

/// Evaluate `samples` in order, writing the report of each to `out`.
///
/// A sample whose evaluation fails is reported and skipped; the batch always
/// runs to the end. Only write errors on `out` abort the run.
pub fn run_demonstration<A, G, W>(
    evaluator: &CompetenceEvaluator<A, G>,
    reporter: &ConsoleReporter,
    samples: &[&str],
    out: &mut W,
) -> io::Result<DemoOutcome>
where
    A: CodeAnalyzer,
    G: PromptGenerator,
    W: Write,
{
    let mut outcome = DemoOutcome::default();

    writeln!(
        out,
        "{}",
        "Python Student Competence Analysis - Demonstration".bold()
    )?;
    writeln!(out, "{}", "=".repeat(60))?;

    for (i, code) in samples.iter().enumerate() {
        writeln!(out, "\nExample {}:", i + 1)?;
        writeln!(out, "{}", "-".repeat(40))?;
        writeln!(out, "Student Code:")?;
        let code = code.trim();
        writeln!(out, "{}", code)?;

        match evaluator.evaluate_student_code(code) {
            Ok(report) => {
                outcome.evaluated += 1;
                write!(out, "{}", reporter.render(&report))?;
            }
            Err(e) => {
                outcome.failed += 1;
                warn!(example = i + 1, error = %e, "evaluation failed");
                writeln!(out, "{}: {}", "Error analyzing code".red(), e)?;
            }
        }
    }

    writeln!(out, "\nThis demonstration shows how the framework can:")?;
    for note in CLOSING_NOTES {
        writeln!(out, "• {}", note)?;
    }
    writeln!(
        out,
        "\nNext steps: Integration with CodeT5+ for advanced prompt generation"
    )?;

    Ok(outcome)
}
