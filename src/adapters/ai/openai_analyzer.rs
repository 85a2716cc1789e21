//! OpenAI Analyzer - LLM-backed implementation of the analyzer port.
//!
//! Sends the preparation as a Spanish coaching prompt to the chat
//! completions API in JSON mode and parses the reply into the same output
//! shape the rule engine produces. Temperature is pinned low so repeated
//! runs stay close to deterministic.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAiConfig::new(api_key)
//!     .with_model("gpt-4.1-mini")
//!     .with_base_url("https://api.openai.com/v1");
//!
//! let analyzer = OpenAiAnalyzer::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::analysis::{AnalysisOutput, CLARIFICATION_CAP};
use crate::domain::preparation::{FeedbackMode, PreparationInput};
use crate::ports::{AnalyzerError, AnalyzerInfo, PreparationAnalyzer};

const TEMPERATURE: f32 = 0.2;

/// Configuration for the OpenAI analyzer.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key for authentication. Empty means "not configured".
    api_key: Secret<String>,
    /// Model to use (e.g. "gpt-4.1-mini").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-4.1-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI-backed analyzer.
pub struct OpenAiAnalyzer {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiAnalyzer {
    pub fn new(config: OpenAiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    fn system_prompt(mode: FeedbackMode) -> String {
        let tone = match mode {
            FeedbackMode::Curso => {
                "Modo Curso: feedback pedagógico, breve referencia a conceptos de clase, sin perder estructura ejecutiva."
            }
            FeedbackMode::Profesional => {
                "Modo Profesional: feedback directo, exigente, ejecutivo, sin explicaciones largas."
            }
        };

        format!(
            "Eres un analista estratégico de negociación consultiva.\n\
             Evalúas cómo fue pensada la estrategia, no si se ganó o perdió.\n\
             {tone}\n\
             \n\
             Reglas obligatorias:\n\
             - Respuesta SOLO en JSON válido.\n\
             - Máximo 3 preguntas de aclaración.\n\
             - No redactar mails.\n\
             - No dar scripts de conversación.\n\
             - No prometer resultados.\n\
             - Señalar incoherencias entre bloques cuando existan.\n\
             - Entregar tono ejecutivo, directo y estructurado.\n\
             \n\
             Esquema JSON exacto:\n\
             {{\n\
               \"clarification_questions\": [\"...\"],\n\
               \"observations\": [\"...\"],\n\
               \"suggestions\": [\"...\"],\n\
               \"next_steps\": [\"...\"],\n\
               \"inconsistencies\": [\"...\"],\n\
               \"preparation_level\": \"Inicial|Estructurado|Avanzado\"\n\
             }}"
        )
    }

    fn user_prompt(preparation: &PreparationInput) -> String {
        format!(
            "Caso de preparación estratégica:\n\
             \n\
             Contexto:\n\
             - Tipo de negociación: {}\n\
             - Nivel de impacto: {}\n\
             - Relación contraparte: {}\n\
             \n\
             Objetivo:\n\
             - Objetivo explícito: {}\n\
             - Objetivo real: {}\n\
             - Resultado mínimo aceptable: {}\n\
             \n\
             Poder y alternativas:\n\
             - MAAN: {}\n\
             - Fortaleza percibida del otro: {}\n\
             - Punto de ruptura: {}\n\
             \n\
             Estrategia:\n\
             - ZOPA estimada: {}\n\
             - Secuencia de concesiones: {}\n\
             - Hipótesis sobre contraparte: {}\n\
             \n\
             Riesgos:\n\
             - Variable emocional propia: {}\n\
             - Riesgo principal: {}\n\
             - Señal clave: {}",
            preparation.context.negotiation_type,
            preparation.context.impact_level,
            preparation.context.counterpart_relationship,
            preparation.objective.explicit_objective,
            preparation.objective.real_objective,
            preparation.objective.minimum_acceptable_result,
            preparation.power_alternatives.maan,
            preparation.power_alternatives.counterpart_perceived_strength,
            preparation.power_alternatives.breakpoint,
            preparation.strategy.estimated_zopa,
            preparation.strategy.concession_sequence,
            preparation.strategy.counterpart_hypothesis,
            preparation.risk.emotional_variable,
            preparation.risk.main_risk,
            preparation.risk.key_signal,
        )
    }

    async fn send_request(
        &self,
        preparation: &PreparationInput,
        mode: FeedbackMode,
    ) -> Result<Response, AnalyzerError> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: Self::system_prompt(mode),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: Self::user_prompt(preparation),
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
            temperature: TEMPERATURE,
        };

        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AnalyzerError::Timeout {
                        seconds: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    AnalyzerError::network(format!("connection failed: {e}"))
                } else {
                    AnalyzerError::network(e.to_string())
                }
            })
    }

    async fn handle_response_status(&self, response: Response) -> Result<Response, AnalyzerError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        match status.as_u16() {
            401 => Err(AnalyzerError::AuthenticationFailed),
            429 => Err(AnalyzerError::RateLimited),
            500..=599 => Err(AnalyzerError::unavailable(format!(
                "server error {status}: {error_body}"
            ))),
            _ => Err(AnalyzerError::network(format!(
                "unexpected status {status}: {error_body}"
            ))),
        }
    }

    async fn parse_response(&self, response: Response) -> Result<AnalysisOutput, AnalyzerError> {
        let response = self.handle_response_status(response).await?;

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| AnalyzerError::parse(format!("failed to parse response: {e}")))?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(AnalyzerError::EmptyResponse)?;

        let mut analysis: AnalysisOutput = serde_json::from_str(&content)
            .map_err(|e| AnalyzerError::parse(format!("reply does not match schema: {e}")))?;

        // The prompt asks for at most 3 questions; enforce it anyway.
        analysis.clarification_questions.truncate(CLARIFICATION_CAP);

        Ok(analysis)
    }
}

#[async_trait]
impl PreparationAnalyzer for OpenAiAnalyzer {
    async fn analyze(
        &self,
        preparation: &PreparationInput,
        mode: FeedbackMode,
    ) -> Result<AnalysisOutput, AnalyzerError> {
        if self.config.api_key().is_empty() {
            return Err(AnalyzerError::missing_credentials(
                "OpenAI API key not configured",
            ));
        }

        let response = self.send_request(preparation, mode).await?;
        self.parse_response(response).await
    }

    fn analyzer_info(&self) -> AnalyzerInfo {
        AnalyzerInfo::remote("openai", self.config.model.clone())
    }
}

// ----- OpenAI API Types -----

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::preparation::ContextBlock;

    #[test]
    fn config_builder_works() {
        let config = OpenAiConfig::new("test-key")
            .with_model("gpt-4o-mini")
            .with_base_url("https://custom.api.com")
            .with_timeout(Duration::from_secs(10));

        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.base_url, "https://custom.api.com");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn system_prompt_carries_mode_tone_and_schema() {
        let curso = OpenAiAnalyzer::system_prompt(FeedbackMode::Curso);
        assert!(curso.contains("Modo Curso"));
        assert!(curso.contains("Máximo 3 preguntas de aclaración"));
        assert!(curso.contains("\"preparation_level\": \"Inicial|Estructurado|Avanzado\""));

        let profesional = OpenAiAnalyzer::system_prompt(FeedbackMode::Profesional);
        assert!(profesional.contains("Modo Profesional"));
    }

    #[test]
    fn user_prompt_interpolates_all_blocks() {
        let preparation = PreparationInput {
            context: ContextBlock {
                negotiation_type: "Compra de flota".into(),
                impact_level: "Alto".into(),
                counterpart_relationship: "Nueva".into(),
            },
            ..Default::default()
        };

        let prompt = OpenAiAnalyzer::user_prompt(&preparation);
        assert!(prompt.starts_with("Caso de preparación estratégica:"));
        assert!(prompt.contains("- Tipo de negociación: Compra de flota"));
        assert!(prompt.contains("Poder y alternativas:"));
        assert!(prompt.contains("- Señal clave: "));
    }

    #[tokio::test]
    async fn empty_key_fails_before_any_request() {
        let analyzer = OpenAiAnalyzer::new(OpenAiConfig::new(""));
        let err = analyzer
            .analyze(&PreparationInput::default(), FeedbackMode::Profesional)
            .await
            .unwrap_err();

        assert!(matches!(err, AnalyzerError::MissingCredentials(_)));
    }

    #[test]
    fn reports_remote_info_with_model() {
        let analyzer = OpenAiAnalyzer::new(OpenAiConfig::new("key").with_model("gpt-4.1-mini"));
        let info = analyzer.analyzer_info();
        assert_eq!(info.name, "openai");
        assert_eq!(info.model.as_deref(), Some("gpt-4.1-mini"));
    }
}
