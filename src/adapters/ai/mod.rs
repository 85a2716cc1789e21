//! Analyzer adapters: the in-process rule engine, the OpenAI-backed
//! analyzer, the failover wrapper, and a scriptable mock for tests.

mod fallback_analyzer;
mod mock_analyzer;
mod openai_analyzer;
mod rules_analyzer;

pub use fallback_analyzer::FallbackAnalyzer;
pub use mock_analyzer::{MockAnalyzer, MockReply};
pub use openai_analyzer::{OpenAiAnalyzer, OpenAiConfig};
pub use rules_analyzer::RuleAnalyzer;

use std::sync::Arc;

use crate::config::{AnalysisConfig, AnalysisProvider};
use crate::ports::PreparationAnalyzer;

/// Builds the analyzer stack described by the configuration.
///
/// The rule engine always backs the stack: when the OpenAI provider is
/// selected it runs as primary behind the fallback wrapper, so analysis
/// keeps working when the remote service misbehaves.
pub fn build_analyzer(config: &AnalysisConfig) -> Arc<dyn PreparationAnalyzer> {
    match config.provider {
        AnalysisProvider::Rules => Arc::new(RuleAnalyzer::new()),
        AnalysisProvider::OpenAi => {
            let openai = OpenAiAnalyzer::new(config.openai_config());
            Arc::new(FallbackAnalyzer::new(openai))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_provider_builds_the_rule_engine() {
        let analyzer = build_analyzer(&AnalysisConfig::default());
        assert_eq!(analyzer.analyzer_info().name, "rules");
    }

    #[test]
    fn openai_provider_builds_the_fallback_stack() {
        let config = AnalysisConfig {
            provider: AnalysisProvider::OpenAi,
            ..Default::default()
        };
        let analyzer = build_analyzer(&config);
        assert_eq!(analyzer.analyzer_info().name, "openai");
    }
}
