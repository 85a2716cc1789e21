//! Analysis provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::ai::OpenAiConfig;

/// Analysis provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Which analyzer backs the application
    #[serde(default)]
    pub provider: AnalysisProvider,

    /// OpenAI API key
    pub openai_api_key: Option<String>,

    /// OpenAI model
    #[serde(default = "default_model")]
    pub openai_model: String,

    /// OpenAI base URL
    #[serde(default = "default_base_url")]
    pub openai_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Analyzer selector
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisProvider {
    /// Deterministic in-process rule engine
    #[default]
    Rules,
    /// OpenAI-backed analyzer with rule-engine fallback
    OpenAi,
}

impl AnalysisConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an OpenAI key is present
    pub fn has_openai_key(&self) -> bool {
        self.openai_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Build the adapter-level OpenAI configuration
    pub fn openai_config(&self) -> OpenAiConfig {
        OpenAiConfig::new(self.openai_api_key.clone().unwrap_or_default())
            .with_model(self.openai_model.clone())
            .with_base_url(self.openai_base_url.clone())
            .with_timeout(self.timeout())
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.provider == AnalysisProvider::OpenAi && !self.has_openai_key() {
            return Err(ValidationError::MissingRequired("OPENAI_API_KEY"));
        }

        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }

        if !self.openai_base_url.starts_with("http://") && !self.openai_base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }

        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            provider: AnalysisProvider::default(),
            openai_api_key: None,
            openai_model: default_model(),
            openai_base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_model() -> String {
    "gpt-4.1-mini".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    30
}
