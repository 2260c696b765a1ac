//! Analysis rules for student code

pub mod assignment_in_condition;
pub mod complexity;
pub mod missing_return;

pub use assignment_in_condition::AssignmentInConditionRule;
pub use complexity::ComplexityRule;
pub use missing_return::MissingReturnRule;

use tree_sitter::Tree;

/// Trait for rules that report findings as human-readable messages
pub trait AnalysisRule {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Check a successfully parsed snippet and return one message per finding
    fn check(&self, source: &str, tree: &Tree) -> Vec<String>;
}
