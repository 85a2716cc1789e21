//! Rule Analyzer - the deterministic in-process analyzer.
//!
//! Thin adapter over the domain rule engine. Infallible in practice: the
//! `Result` exists only to satisfy the port.

use async_trait::async_trait;

use crate::domain::analysis::{analyze_preparation, AnalysisOutput};
use crate::domain::preparation::{FeedbackMode, PreparationInput};
use crate::ports::{AnalyzerError, AnalyzerInfo, PreparationAnalyzer};

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleAnalyzer;

impl RuleAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PreparationAnalyzer for RuleAnalyzer {
    async fn analyze(
        &self,
        preparation: &PreparationInput,
        mode: FeedbackMode,
    ) -> Result<AnalysisOutput, AnalyzerError> {
        Ok(analyze_preparation(preparation, mode))
    }

    fn analyzer_info(&self) -> AnalyzerInfo {
        AnalyzerInfo::local("rules")
    }
}
