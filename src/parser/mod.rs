//! Parser module for Python student code

pub mod ast_helpers;
pub mod python;

pub use ast_helpers::{
    definition_name, descendants, find_nodes_of_kind, first_syntax_problem,
    has_descendant_of_kind, is_async, node_to_location, SyntaxProblem,
};
pub use python::PythonParser;
