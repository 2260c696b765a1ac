//! Prompt generation - maps analysis findings to learning prompts

pub mod rule_based;
pub mod templates;

pub use rule_based::{render_collection, RuleBasedPromptGenerator, DEFAULT_COMPLEXITY_THRESHOLD};

use crate::{AnalysisResult, GeneratedPrompt};

/// Capability: generate prompts from code and its analysis
pub trait PromptGenerator {
    fn generate_prompts(&self, code: &str, analysis: &AnalysisResult) -> Vec<GeneratedPrompt>;
}
