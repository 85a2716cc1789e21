//! Debrief input and final memo synthesis.
//!
//! After executing the negotiation the user fills in a structured debrief;
//! closing the case combines the preparation snapshot, the last analysis and
//! the debrief into a final memo. Synthesis is pure string templating over
//! those three inputs - no re-analysis happens here.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::AnalysisOutput;
use crate::domain::preparation::PreparationInput;

/// What actually happened against the declared objectives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealResultBlock {
    pub explicit_objective_achieved: String,
    #[serde(default)]
    pub real_objective_achieved: String,
    #[serde(default)]
    pub what_remains_open: String,
}

/// Power and concession dynamics observed at the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservedDynamicsBlock {
    #[serde(default)]
    pub where_power_shifted: String,
    #[serde(default)]
    pub decisive_objection: String,
    #[serde(default)]
    pub concession_that_changed_structure: String,
}

/// The user's own read of their biggest error, success and change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfDiagnosisBlock {
    #[serde(default)]
    pub main_strategic_error: String,
    #[serde(default)]
    pub main_strategic_success: String,
    #[serde(default)]
    pub decision_to_change: String,
}

/// Structured post-negotiation debrief.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebriefInput {
    pub real_result: RealResultBlock,
    pub observed_dynamics: ObservedDynamicsBlock,
    pub self_diagnosis: SelfDiagnosisBlock,
    pub transferable_lesson: String,
    #[serde(default)]
    pub free_disclaimer: String,
}

/// The closing artifact of a case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalMemo {
    pub strategic_synthesis: String,
    pub observations_and_next_steps: Vec<String>,
    pub open_inconsistencies: Vec<String>,
    pub observed_thinking_pattern: String,
    pub consolidated_transferable_principle: String,
}

/// Builds the final memo from the three case snapshots.
///
/// The thinking-pattern sentence branches only on whether the analysis level
/// reflects a structured preparation; everything else is verbatim assembly.
pub fn build_final_memo(
    preparation: &PreparationInput,
    analysis: &AnalysisOutput,
    debrief: &DebriefInput,
) -> FinalMemo {
    let synthesis = format!(
        "Caso enfocado en {} con objetivo explícito '{}'. El objetivo real fue '{}' y la MAAN definida fue '{}'.",
        preparation.context.negotiation_type.to_lowercase(),
        preparation.objective.explicit_objective,
        preparation.objective.real_objective,
        preparation.power_alternatives.maan,
    );

    let thinking_pattern = if analysis.preparation_level.is_structured() {
        "Se observa un patrón de preparación orientado a estructura, con foco en control de concesiones y lectura de señales."
    } else {
        "Se observa un patrón reactivo con definición parcial de variables críticas antes de negociar."
    };

    let observations_and_next_steps = analysis
        .observations
        .iter()
        .chain(&analysis.suggestions)
        .chain(&analysis.next_steps)
        .cloned()
        .collect();

    FinalMemo {
        strategic_synthesis: synthesis,
        observations_and_next_steps,
        open_inconsistencies: analysis.inconsistencies.clone(),
        observed_thinking_pattern: thinking_pattern.to_string(),
        consolidated_transferable_principle: debrief.transferable_lesson.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::PreparationLevel;
    use crate::domain::preparation::{ContextBlock, ObjectiveBlock, PowerAlternativesBlock};

    fn sample_preparation() -> PreparationInput {
        PreparationInput {
            context: ContextBlock {
                negotiation_type: "Negociación Salarial".into(),
                ..Default::default()
            },
            objective: ObjectiveBlock {
                explicit_objective: "Subir 15%".into(),
                real_objective: "Reconocimiento de rol".into(),
                ..Default::default()
            },
            power_alternatives: PowerAlternativesBlock {
                maan: "Otra oferta en proceso".into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn sample_analysis(level: PreparationLevel) -> AnalysisOutput {
        AnalysisOutput {
            clarification_questions: vec!["¿Pregunta?".into()],
            observations: vec!["Observación.".into()],
            suggestions: vec!["Sugerencia.".into()],
            next_steps: vec!["Paso.".into()],
            inconsistencies: vec!["Tensión.".into()],
            preparation_level: level,
        }
    }

    fn sample_debrief() -> DebriefInput {
        DebriefInput {
            transferable_lesson: "Anclar primero con datos de mercado.".into(),
            ..Default::default()
        }
    }

    #[test]
    fn synthesis_lowercases_type_and_quotes_anchors() {
        let memo = build_final_memo(
            &sample_preparation(),
            &sample_analysis(PreparationLevel::Avanzado),
            &sample_debrief(),
        );

        assert_eq!(
            memo.strategic_synthesis,
            "Caso enfocado en negociación salarial con objetivo explícito 'Subir 15%'. \
             El objetivo real fue 'Reconocimiento de rol' y la MAAN definida fue 'Otra oferta en proceso'."
        );
    }

    #[test]
    fn structured_levels_get_the_structured_pattern() {
        for level in [PreparationLevel::Estructurado, PreparationLevel::Avanzado] {
            let memo =
                build_final_memo(&sample_preparation(), &sample_analysis(level), &sample_debrief());
            assert!(memo.observed_thinking_pattern.contains("orientado a estructura"));
        }

        let memo = build_final_memo(
            &sample_preparation(),
            &sample_analysis(PreparationLevel::Inicial),
            &sample_debrief(),
        );
        assert!(memo.observed_thinking_pattern.contains("patrón reactivo"));
    }

    #[test]
    fn memo_concatenates_buckets_in_order_and_carries_inconsistencies() {
        let memo = build_final_memo(
            &sample_preparation(),
            &sample_analysis(PreparationLevel::Estructurado),
            &sample_debrief(),
        );

        assert_eq!(
            memo.observations_and_next_steps,
            vec!["Observación.", "Sugerencia.", "Paso."]
        );
        assert_eq!(memo.open_inconsistencies, vec!["Tensión."]);
        assert_eq!(
            memo.consolidated_transferable_principle,
            "Anclar primero con datos de mercado."
        );
    }
}
