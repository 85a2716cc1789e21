//! Analyzer port - the pluggable boundary for preparation analysis.
//!
//! Implementations may call an external model or run entirely in process;
//! either way they take a preparation plus feedback mode and return the
//! structured coaching output. Callers that need availability guarantees
//! wrap a fallible implementation in the fallback adapter.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::analysis::AnalysisOutput;
use crate::domain::preparation::{FeedbackMode, PreparationInput};

/// Why an analyzer run failed.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("analyzer credentials missing: {0}")]
    MissingCredentials(String),

    #[error("analyzer request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("analyzer network error: {0}")]
    Network(String),

    #[error("analyzer authentication failed")]
    AuthenticationFailed,

    #[error("analyzer rate limited")]
    RateLimited,

    #[error("analyzer service unavailable: {0}")]
    Unavailable(String),

    #[error("analyzer returned an empty response")]
    EmptyResponse,

    #[error("failed to parse analyzer response: {0}")]
    Parse(String),
}

impl AnalyzerError {
    pub fn missing_credentials(detail: impl Into<String>) -> Self {
        Self::MissingCredentials(detail.into())
    }

    pub fn network(detail: impl Into<String>) -> Self {
        Self::Network(detail.into())
    }

    pub fn unavailable(detail: impl Into<String>) -> Self {
        Self::Unavailable(detail.into())
    }

    pub fn parse(detail: impl Into<String>) -> Self {
        Self::Parse(detail.into())
    }
}

/// Identifies which analyzer produced a result, for logging and snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerInfo {
    pub name: &'static str,
    pub model: Option<String>,
}

impl AnalyzerInfo {
    pub fn local(name: &'static str) -> Self {
        Self { name, model: None }
    }

    pub fn remote(name: &'static str, model: impl Into<String>) -> Self {
        Self {
            name,
            model: Some(model.into()),
        }
    }
}

/// Analyzes a negotiation preparation into structured coaching output.
#[async_trait]
pub trait PreparationAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        preparation: &PreparationInput,
        mode: FeedbackMode,
    ) -> Result<AnalysisOutput, AnalyzerError>;

    fn analyzer_info(&self) -> AnalyzerInfo;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_readable_messages() {
        let err = AnalyzerError::Timeout { seconds: 30 };
        assert_eq!(err.to_string(), "analyzer request timed out after 30s");

        let err = AnalyzerError::missing_credentials("api key not configured");
        assert!(err.to_string().contains("api key not configured"));
    }

    #[test]
    fn info_constructors() {
        let local = AnalyzerInfo::local("rules");
        assert_eq!(local.model, None);

        let remote = AnalyzerInfo::remote("openai", "gpt-4.1-mini");
        assert_eq!(remote.model.as_deref(), Some("gpt-4.1-mini"));
    }
}
