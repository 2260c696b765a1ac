//! Fixed prompt templates

use crate::{GeneratedPrompt, PromptCategory};

/// A canned prompt: text, category, difficulty and learning objective
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    pub text: &'static str,
    pub category: PromptCategory,
    pub difficulty: u8,
    pub objective: &'static str,
}

impl PromptTemplate {
    pub fn to_prompt(&self) -> GeneratedPrompt {
        GeneratedPrompt {
            text: self.text.to_string(),
            category: self.category,
            difficulty_level: self.difficulty,
            learning_objective: self.objective.to_string(),
        }
    }
}

pub const SYNTAX_ISSUES: PromptTemplate = PromptTemplate {
    text: "Look at your code structure. Can you identify any syntax issues? What might Python be expecting differently?",
    category: PromptCategory::Debugging,
    difficulty: 2,
    objective: "Syntax error identification and resolution",
};

pub const ASSIGNMENT_VS_EQUALITY: PromptTemplate = PromptTemplate {
    text: "In your conditional statement, consider the difference between assignment (=) and comparison (==). Which operation do you intend to perform?",
    category: PromptCategory::Conceptual,
    difficulty: 3,
    objective: "Understanding assignment vs equality operators",
};

pub const RETURN_VALUES: PromptTemplate = PromptTemplate {
    text: "Think about what your function should give back to the caller. What value or result should it return?",
    category: PromptCategory::Conceptual,
    difficulty: 3,
    objective: "Function return values and program flow",
};

pub const EXPLAIN_LOGIC_FLOW: PromptTemplate = PromptTemplate {
    text: "Your solution shows good complexity. Can you explain the logic flow? How would you trace through it step by step?",
    category: PromptCategory::Extension,
    difficulty: 4,
    objective: "Algorithm analysis and explanation",
};
