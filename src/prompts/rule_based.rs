//! Rule-based prompt generator.
//!
//! Rules run in a fixed order and each fires independently, so the output
//! order is always syntax -> assignment -> return -> complexity.

use super::templates::{
    ASSIGNMENT_VS_EQUALITY, EXPLAIN_LOGIC_FLOW, RETURN_VALUES, SYNTAX_ISSUES,
};
use super::PromptGenerator;
use crate::analyzer::rules::{assignment_in_condition, missing_return};
use crate::{AnalysisResult, GeneratedPrompt};
use tracing::debug;

/// Complexity above which the extension prompt fires
pub const DEFAULT_COMPLEXITY_THRESHOLD: f64 = 0.5;

/// Render a whole collection as one string (`["a", "b"]`).
///
/// Rules 2 and 3 search this rendering for their phrase instead of testing
/// entries one by one. An entry with extra text around the phrase still matches.
pub fn render_collection(entries: &[String]) -> String {
    format!("{:?}", entries)
}

/// Prompt generator driven by a fixed rule table
pub struct RuleBasedPromptGenerator {
    complexity_threshold: f64,
}

impl RuleBasedPromptGenerator {
    pub fn new() -> Self {
        Self {
            complexity_threshold: DEFAULT_COMPLEXITY_THRESHOLD,
        }
    }

    /// Override the complexity threshold of the extension prompt
    pub fn with_complexity_threshold(mut self, threshold: f64) -> Self {
        self.complexity_threshold = threshold;
        self
    }
}

impl Default for RuleBasedPromptGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptGenerator for RuleBasedPromptGenerator {
    fn generate_prompts(&self, _code: &str, analysis: &AnalysisResult) -> Vec<GeneratedPrompt> {
        let syntax_rendered = render_collection(&analysis.syntax_errors);
        let misconceptions_rendered = render_collection(&analysis.misconceptions);

        let rules = [
            (!analysis.syntax_errors.is_empty(), &SYNTAX_ISSUES),
            (
                syntax_rendered.contains(assignment_in_condition::PHRASE),
                &ASSIGNMENT_VS_EQUALITY,
            ),
            (
                misconceptions_rendered.contains(missing_return::PHRASE),
                &RETURN_VALUES,
            ),
            (
                analysis.complexity_score > self.complexity_threshold,
                &EXPLAIN_LOGIC_FLOW,
            ),
        ];

        let prompts: Vec<GeneratedPrompt> = rules
            .iter()
            .filter(|(fired, _)| *fired)
            .map(|(_, template)| template.to_prompt())
            .collect();
        debug!(
            count = prompts.len(),
            threshold = self.complexity_threshold,
            "prompts generated"
        );
        prompts
    }
}
