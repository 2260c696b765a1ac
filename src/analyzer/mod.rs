//! Analyzer module - turns source text into an `AnalysisResult`

pub mod python;
pub mod rules;

pub use python::BasicPythonAnalyzer;

use crate::{AnalysisResult, Result};

/// Capability: analyze source text.
///
/// Malformed input is a normal outcome reported inside the result; `Err` is
/// reserved for failures of the analyzer itself.
pub trait CodeAnalyzer {
    fn analyze(&self, code: &str) -> Result<AnalysisResult>;
}
