//! Evaluator - runs the analyzer, then the prompt generator, and builds the report

use crate::analyzer::{BasicPythonAnalyzer, CodeAnalyzer};
use crate::prompts::{PromptGenerator, RuleBasedPromptGenerator};
use crate::{EvaluationReport, ReportSummary, Result};
use tracing::debug;

/// Main evaluation pipeline
pub struct CompetenceEvaluator<A = BasicPythonAnalyzer, G = RuleBasedPromptGenerator> {
    analyzer: A,
    prompt_generator: G,
}

impl<A: CodeAnalyzer, G: PromptGenerator> CompetenceEvaluator<A, G> {
    pub fn new(analyzer: A, prompt_generator: G) -> Self {
        Self {
            analyzer,
            prompt_generator,
        }
    }

    /// Complete evaluation of one snippet. Analyzer failures propagate unchanged.
    pub fn evaluate_student_code(&self, code: &str) -> Result<EvaluationReport> {
        let analysis = self.analyzer.analyze(code)?;
        let generated_prompts = self.prompt_generator.generate_prompts(code, &analysis);
        let summary = ReportSummary::from_prompts(&generated_prompts);
        debug!(
            prompts = summary.total_prompts,
            avg_difficulty = summary.avg_difficulty,
            "evaluation complete"
        );

        Ok(EvaluationReport {
            code: code.to_string(),
            analysis,
            generated_prompts,
            summary,
        })
    }
}

impl Default for CompetenceEvaluator {
    fn default() -> Self {
        Self::new(BasicPythonAnalyzer::new(), RuleBasedPromptGenerator::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnalysisResult, Error, GeneratedPrompt, PromptCategory};

    struct FixedAnalyzer(AnalysisResult);

    impl CodeAnalyzer for FixedAnalyzer {
        fn analyze(&self, _code: &str) -> Result<AnalysisResult> {
            Ok(self.0.clone())
        }
    }

    struct FailingAnalyzer;

    impl CodeAnalyzer for FailingAnalyzer {
        fn analyze(&self, _code: &str) -> Result<AnalysisResult> {
            Err(Error::NoTree)
        }
    }

    struct EchoGenerator;

    impl PromptGenerator for EchoGenerator {
        fn generate_prompts(&self, code: &str, _analysis: &AnalysisResult) -> Vec<GeneratedPrompt> {
            vec![GeneratedPrompt {
                text: code.to_string(),
                category: PromptCategory::Extension,
                difficulty_level: 5,
                learning_objective: "echo".to_string(),
            }]
        }
    }

    #[test]
    fn injected_collaborators_are_used() {
        let evaluator = CompetenceEvaluator::new(
            FixedAnalyzer(AnalysisResult::parse_failure("boom")),
            EchoGenerator,
        );
        let report = evaluator.evaluate_student_code("print(1)").unwrap();
        assert_eq!(report.code, "print(1)");
        assert_eq!(report.analysis.syntax_errors, vec!["Syntax error: boom"]);
        assert_eq!(report.generated_prompts[0].text, "print(1)");
        assert_eq!(report.summary.total_prompts, 1);
        assert_eq!(report.summary.avg_difficulty, 5.0);
    }

    #[test]
    fn analyzer_errors_propagate() {
        let evaluator = CompetenceEvaluator::new(FailingAnalyzer, RuleBasedPromptGenerator::new());
        assert!(matches!(
            evaluator.evaluate_student_code("x"),
            Err(Error::NoTree)
        ));
    }

    #[test]
    fn default_pipeline_on_clean_code() {
        let evaluator: CompetenceEvaluator = CompetenceEvaluator::default();
        let report = evaluator
            .evaluate_student_code("def double(x):\n    return x * 2\n")
            .unwrap();
        assert!(report.generated_prompts.is_empty());
        assert_eq!(report.summary.total_prompts, 0);
        assert_eq!(report.summary.avg_difficulty, 0.0);
        assert!((report.analysis.complexity_score - 0.2).abs() < 1e-9);
    }
}
