//! Assignment in condition: a purely textual line check.
//!
//! A line containing `=` but neither `==` nor `!=`, and also containing `if `,
//! is reported. `<=`, `>=`, strings and comments all trip it. The emitted
//! wording feeds the prompt rules and must keep the phrase "assignment in condition".

use super::AnalysisRule;
use tree_sitter::Tree;

/// Phrase the prompt rules look for
pub const PHRASE: &str = "assignment in condition";

/// Rule flagging lines that may assign inside an `if`
pub struct AssignmentInConditionRule;

impl AssignmentInConditionRule {
    pub fn new() -> Self {
        Self
    }

    fn line_matches(line: &str) -> bool {
        line.contains('=') && !line.contains("==") && !line.contains("!=") && line.contains("if ")
    }

    /// Scan raw text, independent of any parse tree
    pub fn check_text(&self, source: &str) -> Vec<String> {
        source
            .split('\n')
            .enumerate()
            .filter(|(_, line)| Self::line_matches(line))
            .map(|(i, _)| format!("Line {}: Possible {}", i + 1, PHRASE))
            .collect()
    }
}

impl Default for AssignmentInConditionRule {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisRule for AssignmentInConditionRule {
    fn name(&self) -> &'static str {
        "assignment-in-condition"
    }

    fn check(&self, source: &str, _tree: &Tree) -> Vec<String> {
        self.check_text(source)
    }
}
