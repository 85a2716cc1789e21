//! Mock Analyzer - scriptable analyzer for tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::analysis::AnalysisOutput;
use crate::domain::preparation::{FeedbackMode, PreparationInput};
use crate::ports::{AnalyzerError, AnalyzerInfo, PreparationAnalyzer};

/// One scripted reply.
pub enum MockReply {
    Output(AnalysisOutput),
    Failure(AnalyzerError),
}

/// Returns scripted replies in order; errors with `Unavailable` when the
/// script runs out.
pub struct MockAnalyzer {
    replies: Mutex<VecDeque<MockReply>>,
    call_count: AtomicUsize,
}

impl MockAnalyzer {
    pub fn new(replies: Vec<MockReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            call_count: AtomicUsize::new(0),
        }
    }

    /// How many times `analyze` has been called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PreparationAnalyzer for MockAnalyzer {
    async fn analyze(
        &self,
        _preparation: &PreparationInput,
        _mode: FeedbackMode,
    ) -> Result<AnalysisOutput, AnalyzerError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        let reply = self
            .replies
            .lock()
            .expect("mock replies lock poisoned")
            .pop_front();

        match reply {
            Some(MockReply::Output(output)) => Ok(output),
            Some(MockReply::Failure(err)) => Err(err),
            None => Err(AnalyzerError::unavailable("mock script exhausted")),
        }
    }

    fn analyzer_info(&self) -> AnalyzerInfo {
        AnalyzerInfo::local("mock")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::PreparationLevel;

    fn output() -> AnalysisOutput {
        AnalysisOutput {
            clarification_questions: vec![],
            observations: vec!["ok".into()],
            suggestions: vec![],
            next_steps: vec![],
            inconsistencies: vec![],
            preparation_level: PreparationLevel::Inicial,
        }
    }

    #[tokio::test]
    async fn replays_script_in_order_and_counts_calls() {
        let mock = MockAnalyzer::new(vec![
            MockReply::Output(output()),
            MockReply::Failure(AnalyzerError::RateLimited),
        ]);
        let preparation = PreparationInput::default();

        assert!(mock
            .analyze(&preparation, FeedbackMode::Profesional)
            .await
            .is_ok());
        assert!(matches!(
            mock.analyze(&preparation, FeedbackMode::Profesional).await,
            Err(AnalyzerError::RateLimited)
        ));
        assert!(matches!(
            mock.analyze(&preparation, FeedbackMode::Profesional).await,
            Err(AnalyzerError::Unavailable(_))
        ));

        assert_eq!(mock.call_count(), 3);
    }
}
