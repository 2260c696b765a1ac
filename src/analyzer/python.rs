//! Basic Python analyzer: parse, then run the complexity and heuristic rules

use super::rules::{AnalysisRule, AssignmentInConditionRule, ComplexityRule, MissingReturnRule};
use super::CodeAnalyzer;
use crate::parser::{first_syntax_problem, PythonParser};
use crate::{AnalysisResult, Result, ANALYSIS_CONFIDENCE};
use tracing::debug;
use tree_sitter::Tree;

/// Analyzer for Python snippets using the tree-sitter AST and textual patterns
pub struct BasicPythonAnalyzer {
    complexity: ComplexityRule,
    syntax_rules: Vec<Box<dyn AnalysisRule>>,
    misconception_rules: Vec<Box<dyn AnalysisRule>>,
}

impl BasicPythonAnalyzer {
    /// Create an analyzer with the standard rule set
    pub fn new() -> Self {
        Self {
            complexity: ComplexityRule::new(),
            syntax_rules: vec![Box::new(AssignmentInConditionRule::new())],
            misconception_rules: vec![Box::new(MissingReturnRule::new())],
        }
    }
}

impl Default for BasicPythonAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeAnalyzer for BasicPythonAnalyzer {
    fn analyze(&self, code: &str) -> Result<AnalysisResult> {
        let mut parser = PythonParser::new()?;
        let tree = parser.parse(code)?;

        if let Some(problem) = first_syntax_problem(&tree) {
            debug!(
                diagnostic = %problem.message,
                line = problem.location.map(|l| l.line),
                "snippet failed to parse"
            );
            return Ok(AnalysisResult::parse_failure(&problem.message));
        }

        let complexity_score = self.complexity.score(&tree);
        let syntax_errors = run_rules(&self.syntax_rules, code, &tree);
        let misconceptions = run_rules(&self.misconception_rules, code, &tree);

        debug!(
            complexity_score,
            syntax_errors = syntax_errors.len(),
            misconceptions = misconceptions.len(),
            "analysis complete"
        );

        Ok(AnalysisResult {
            syntax_errors,
            logical_issues: Vec::new(),
            misconceptions,
            complexity_score,
            confidence: ANALYSIS_CONFIDENCE,
        })
    }
}

fn run_rules(rules: &[Box<dyn AnalysisRule>], code: &str, tree: &Tree) -> Vec<String> {
    let mut findings = Vec::new();
    for rule in rules {
        let found = rule.check(code, tree);
        debug!(rule = rule.name(), findings = found.len(), "rule checked");
        findings.extend(found);
    }
    findings
}
