//! Complexity: a crude structural density score.
//!
//! Loops and conditionals count 1, function definitions count 2, and the sum is
//! scaled by 1/10 and clamped to 1.0. The score is not normalized by code
//! length, so long straight-line code scores low and any ten branches saturate it.
//! `async def` and `async for` are distinct constructs and earn nothing.

use crate::parser::{descendants, is_async};
use tree_sitter::{Node, Tree};

/// Raw count that maps to a full score of 1.0
const SATURATION: f64 = 10.0;

/// Rule computing the complexity score of a parsed snippet
pub struct ComplexityRule;

impl ComplexityRule {
    pub fn new() -> Self {
        Self
    }

    /// Weight a single node contributes to the raw count
    fn weight(node: Node) -> usize {
        if is_async(node) {
            return 0;
        }
        match node.kind() {
            // elif is a nested conditional, same as an if inside the else branch
            "for_statement" | "while_statement" | "if_statement" | "elif_clause" => 1,
            "function_definition" => 2,
            _ => 0,
        }
    }

    /// Unscaled count: loops + conditionals + 2 x definitions
    pub fn raw_count(&self, tree: &Tree) -> usize {
        descendants(tree.root_node())
            .into_iter()
            .filter(|n| n.is_named())
            .map(Self::weight)
            .sum()
    }

    /// Score in [0.0, 1.0]
    pub fn score(&self, tree: &Tree) -> f64 {
        Self::scale(self.raw_count(tree))
    }

    pub fn scale(raw: usize) -> f64 {
        (raw as f64 / SATURATION).min(1.0)
    }
}

impl Default for ComplexityRule {
    fn default() -> Self {
        Self::new()
    }
}
