//! Shared AST traversal helpers for analyzer rules.
//!
//! Rules walk the tree-sitter AST through these helpers instead of
//! re-implementing traversal each time.

use crate::Location;
use tree_sitter::{Node, Tree};

/// All nodes under `node` (inclusive), in pre-order.
pub fn descendants(node: Node) -> Vec<Node> {
    let mut out = Vec::new();
    let mut cursor = node.walk();
    loop {
        out.push(cursor.node());
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.node() == node {
                return out;
            }
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return out;
            }
        }
    }
}

/// Named nodes of the whole tree whose kind is one of `kinds`, in pre-order.
pub fn find_nodes_of_kind<'t>(tree: &'t Tree, kinds: &[&str]) -> Vec<Node<'t>> {
    descendants(tree.root_node())
        .into_iter()
        .filter(|n| n.is_named() && kinds.contains(&n.kind()))
        .collect()
}

/// Whether any strict descendant of `node` has the given kind.
pub fn has_descendant_of_kind(node: Node, kind: &str) -> bool {
    descendants(node)
        .into_iter()
        .skip(1)
        .any(|n| n.is_named() && n.kind() == kind)
}

/// Text of the node's `name` field (function and class definitions).
pub fn definition_name<'s>(node: Node, source: &'s str) -> Option<&'s str> {
    node.child_by_field_name("name")
        .and_then(|n| n.utf8_text(source.as_bytes()).ok())
}

/// Convert a node's start position to a 1-indexed Location
pub fn node_to_location(node: Node) -> Location {
    let pos = node.start_position();
    Location::new(pos.row + 1, pos.column + 1)
}

/// Whether the node carries an `async` keyword (`async def`, `async for`)
pub fn is_async(node: Node) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|c| c.kind() == "async");
    found
}

/// A syntax problem located in the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxProblem {
    /// Parser diagnostic text, e.g. "invalid syntax (line 2, column 10)"
    pub message: String,
    pub location: Option<Location>,
}

impl SyntaxProblem {
    fn at(description: &str, loc: Location) -> Self {
        Self {
            message: format!("{} (line {}, column {})", description, loc.line, loc.column),
            location: Some(loc),
        }
    }
}

/// First syntax problem of the snippet, if any.
///
/// Grammar errors (`ERROR` / `MISSING` nodes) win. A tree without them is still
/// rejected when it only parses because tree-sitter-python accepts Python 2
/// statements or forgives indentation that Python 3 refuses.
pub fn first_syntax_problem(tree: &Tree) -> Option<SyntaxProblem> {
    let root = tree.root_node();
    if !root.has_error() {
        return first_dialect_problem(root);
    }

    let found = descendants(root)
        .into_iter()
        .find(|n| n.is_error() || n.is_missing());

    Some(match found {
        Some(node) if node.is_missing() => {
            SyntaxProblem::at(&format!("expected '{}'", node.kind()), node_to_location(node))
        }
        Some(node) => SyntaxProblem::at("invalid syntax", node_to_location(error_anchor(node))),
        None => SyntaxProblem {
            message: "invalid syntax".to_string(),
            location: None,
        },
    })
}

/// Token an `ERROR` node is reported at.
///
/// Recovery makes the node start where the broken statement starts, so take the
/// innermost nested `ERROR` and then the last token on its first line.
fn error_anchor(node: Node) -> Node {
    let mut current = node;
    while let Some(inner) = descendants(current)
        .into_iter()
        .skip(1)
        .find(|n| n.is_error())
    {
        current = inner;
    }

    let row = current.start_position().row;
    descendants(current)
        .into_iter()
        .skip(1)
        .filter(|n| n.child_count() == 0 && n.start_position().row == row)
        .last()
        .unwrap_or(current)
}

/// Problems Python 3 rejects but tree-sitter-python parses cleanly, earliest first
fn first_dialect_problem(root: Node) -> Option<SyntaxProblem> {
    let mut problems: Vec<SyntaxProblem> = Vec::new();

    problems.extend(unexpected_top_level_indent(root));
    for node in descendants(root) {
        match node.kind() {
            "print_statement" | "exec_statement" => {
                let keyword = node.kind().trim_end_matches("_statement");
                problems.push(SyntaxProblem::at(
                    &format!("Missing parentheses in call to '{}'", keyword),
                    node_to_location(node),
                ));
            }
            "block" => problems.extend(block_indentation_problem(node)),
            _ => {}
        }
    }

    problems.into_iter().min_by_key(|p| {
        p.location
            .as_ref()
            .map(|l| (l.line, l.column))
            .unwrap_or((usize::MAX, usize::MAX))
    })
}

/// Named children that are statements rather than comments
fn statements(node: Node) -> Vec<Node> {
    let mut cursor = node.walk();
    let children: Vec<Node> = node
        .named_children(&mut cursor)
        .filter(|c| c.kind() != "comment")
        .collect();
    children
}

/// A top-level statement opening its own line must start in column 1
fn unexpected_top_level_indent(root: Node) -> Option<SyntaxProblem> {
    let mut previous_end_row: Option<usize> = None;
    for stmt in statements(root) {
        let start = stmt.start_position();
        let opens_line = previous_end_row.map_or(true, |row| row < start.row);
        if opens_line && start.column > 0 {
            return Some(SyntaxProblem::at("unexpected indent", node_to_location(stmt)));
        }
        previous_end_row = Some(stmt.end_position().row);
    }
    None
}

/// A suite needs at least one statement, and a body on its own line must be
/// indented deeper than the header that owns it.
fn block_indentation_problem(block: Node) -> Option<SyntaxProblem> {
    let header = block.parent()?;
    let header_start = header.start_position();

    let Some(first) = statements(block).into_iter().next() else {
        let end = header.end_position();
        return Some(SyntaxProblem::at(
            "expected an indented block",
            Location::new(end.row + 1, end.column + 1),
        ));
    };

    let start = first.start_position();
    if start.row > header_start.row && start.column <= header_start.column {
        return Some(SyntaxProblem::at(
            "expected an indented block",
            node_to_location(first),
        ));
    }
    None
}
