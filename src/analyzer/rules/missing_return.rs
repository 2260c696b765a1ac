//! Missing return: functions whose body never returns anything.

use super::AnalysisRule;
use crate::parser::{definition_name, find_nodes_of_kind, has_descendant_of_kind, is_async};
use tree_sitter::Tree;

/// Phrase the prompt rules look for
pub const PHRASE: &str = "missing return statement";

const CONSTRUCTOR_NAME: &str = "__init__";

/// Rule detecting function definitions without any return statement
pub struct MissingReturnRule;

impl MissingReturnRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MissingReturnRule {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisRule for MissingReturnRule {
    fn name(&self) -> &'static str {
        "missing-return"
    }

    /// One message per offending function; identical messages are kept.
    /// A return inside a nested function counts for the enclosing one too.
    /// Coroutines (`async def`) are not checked.
    fn check(&self, source: &str, tree: &Tree) -> Vec<String> {
        find_nodes_of_kind(tree, &["function_definition"])
            .into_iter()
            .filter(|def| !is_async(*def))
            .filter(|def| !has_descendant_of_kind(*def, "return_statement"))
            .filter(|def| definition_name(*def, source) != Some(CONSTRUCTOR_NAME))
            .map(|_| format!("Function may be {}", PHRASE))
            .collect()
    }
}
