//! Python parser using tree-sitter

use crate::{Error, Result};
use tree_sitter::{Language, Parser, Tree};

/// Parser for Python snippets using tree-sitter
pub struct PythonParser {
    parser: Parser,
}

impl PythonParser {
    /// Create a new Python parser
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser.set_language(&Self::language())?;
        Ok(Self { parser })
    }

    /// Parse source code into a syntax tree.
    ///
    /// tree-sitter recovers from malformed input, so an `Ok` tree may still
    /// contain `ERROR`/`MISSING` nodes; check `root_node().has_error()`.
    pub fn parse(&mut self, source: &str) -> Result<Tree> {
        self.parser.parse(source, None).ok_or(Error::NoTree)
    }

    /// Get the tree-sitter language for Python
    pub fn language() -> Language {
        tree_sitter_python::LANGUAGE.into()
    }
}
