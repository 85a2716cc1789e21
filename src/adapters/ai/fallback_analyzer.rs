//! Fallback Analyzer - wrapper that backs any analyzer with the rule engine.
//!
//! When the primary analyzer fails for any reason, analysis is rerun with
//! the deterministic rule engine, so a preparation always gets feedback.
//!
//! # Example
//!
//! ```ignore
//! let primary = OpenAiAnalyzer::new(config);
//! let analyzer = FallbackAnalyzer::new(primary);
//! ```

use async_trait::async_trait;
use tracing::warn;

use crate::domain::analysis::{analyze_preparation, AnalysisOutput};
use crate::domain::preparation::{FeedbackMode, PreparationInput};
use crate::ports::{AnalyzerError, AnalyzerInfo, PreparationAnalyzer};

pub struct FallbackAnalyzer<P> {
    primary: P,
}

impl<P> FallbackAnalyzer<P> {
    pub fn new(primary: P) -> Self {
        Self { primary }
    }
}

#[async_trait]
impl<P: PreparationAnalyzer> PreparationAnalyzer for FallbackAnalyzer<P> {
    async fn analyze(
        &self,
        preparation: &PreparationInput,
        mode: FeedbackMode,
    ) -> Result<AnalysisOutput, AnalyzerError> {
        match self.primary.analyze(preparation, mode).await {
            Ok(output) => Ok(output),
            Err(err) => {
                warn!(
                    primary = self.primary.analyzer_info().name,
                    error = %err,
                    "primary analyzer failed, falling back to rule engine"
                );
                Ok(analyze_preparation(preparation, mode))
            }
        }
    }

    fn analyzer_info(&self) -> AnalyzerInfo {
        self.primary.analyzer_info()
    }
}
