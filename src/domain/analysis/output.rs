//! Analysis output structure and readiness level derivation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Readiness level derived from the analysis score.
///
/// Wire values are the Spanish labels the rest of the system (and the LLM
/// analyzer contract) use verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreparationLevel {
    Inicial,
    Estructurado,
    Avanzado,
}

impl PreparationLevel {
    /// Maps a score to a level: `<45` Inicial, `<75` Estructurado, else
    /// Avanzado. The score is not clamped first; only the thresholds matter.
    pub fn from_score(score: i32) -> Self {
        if score < 45 {
            PreparationLevel::Inicial
        } else if score < 75 {
            PreparationLevel::Estructurado
        } else {
            PreparationLevel::Avanzado
        }
    }

    /// True for the levels that reflect a structured preparation pattern
    /// (used by the memo synthesizer's binary branch).
    pub fn is_structured(&self) -> bool {
        matches!(self, PreparationLevel::Estructurado | PreparationLevel::Avanzado)
    }

    /// The display label, identical to the wire value.
    pub fn label(&self) -> &'static str {
        match self {
            PreparationLevel::Inicial => "Inicial",
            PreparationLevel::Estructurado => "Estructurado",
            PreparationLevel::Avanzado => "Avanzado",
        }
    }
}

impl fmt::Display for PreparationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Structured coaching output of one analysis run.
///
/// Produced fresh on every request and immutable once returned; the service
/// layer persists it as a snapshot attached to a case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOutput {
    /// Capped at 3 entries (extra questions are silently dropped in order).
    pub clarification_questions: Vec<String>,
    /// Never empty: a positive default is appended when no rule observed anything.
    pub observations: Vec<String>,
    pub suggestions: Vec<String>,
    pub next_steps: Vec<String>,
    /// Uncapped.
    pub inconsistencies: Vec<String>,
    pub preparation_level: PreparationLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_thresholds() {
        assert_eq!(PreparationLevel::from_score(44), PreparationLevel::Inicial);
        assert_eq!(PreparationLevel::from_score(45), PreparationLevel::Estructurado);
        assert_eq!(PreparationLevel::from_score(74), PreparationLevel::Estructurado);
        assert_eq!(PreparationLevel::from_score(75), PreparationLevel::Avanzado);
        assert_eq!(PreparationLevel::from_score(100), PreparationLevel::Avanzado);
    }

    #[test]
    fn negative_scores_are_inicial() {
        // No clamping happens before bucketing.
        assert_eq!(PreparationLevel::from_score(-60), PreparationLevel::Inicial);
    }

    #[test]
    fn level_serializes_to_spanish_label() {
        assert_eq!(
            serde_json::to_string(&PreparationLevel::Estructurado).unwrap(),
            "\"Estructurado\""
        );
        let back: PreparationLevel = serde_json::from_str("\"Avanzado\"").unwrap();
        assert_eq!(back, PreparationLevel::Avanzado);
    }

    #[test]
    fn structured_branch_covers_upper_levels() {
        assert!(!PreparationLevel::Inicial.is_structured());
        assert!(PreparationLevel::Estructurado.is_structured());
        assert!(PreparationLevel::Avanzado.is_structured());
    }
}
