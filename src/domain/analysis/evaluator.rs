//! Rule evaluation and finalization - runs the catalog and shapes the output.

use tracing::debug;

use super::output::{AnalysisOutput, PreparationLevel};
use super::rules::{rule_catalog, Bucket};
use crate::domain::preparation::{FeedbackMode, PreparationInput};

/// Clarification questions kept after truncation.
pub const CLARIFICATION_CAP: usize = 3;

/// The fixed tail appended to `next_steps` on every analysis, after the
/// mode-specific first step.
pub const UNIVERSAL_NEXT_STEPS: [&str; 10] = [
    "Documenta la primera señal de cambio de poder esperada durante la conversación.",
    "Prepará una formulación de 'no positivo': interés propio, límite explícito y alternativa de avance.",
    "Antes de cerrar, validá intención de obligarse y un plan de implementación con responsables y hitos.",
    "Definí una respuesta ensayada para ultimátum/pregunta de mínimo aceptable antes de entrar a la reunión.",
    "Programá un debrief de 5 minutos post reunión: qué funcionó, qué no, qué ajustar en el próximo caso.",
    "Agendá un follow-up relacional breve (15 min) para consolidar confianza y prevenir conflictos latentes.",
    "Probá el mismo patrón en un caso análogo para verificar transferencia (no solo mejora en un caso puntual).",
    "Si la negociación es online, secuenciá canales: video para alinear y texto para confirmar compromisos y plazos.",
    "Checklist BATNA 4 pasos: alternativas, valor esperado, BATNA elegida y valor de reserva antes de decidir aceptar/rechazar.",
    "Mapeá BATNA organizacional e individual de la contraparte para ajustar concesiones sin ceder de más.",
];

const DEFAULT_OBSERVATION: &str =
    "La preparación cubre variables clave y mantiene un encuadre estratégico consistente.";

const TENSION_SUGGESTION: &str =
    "Ajusta los bloques en tensión antes de ejecutar para evitar concesiones incoherentes.";

const KEEP_STRUCTURE_SUGGESTION: &str =
    "Mantén la estructura actual y refina la precisión de términos operativos por bloque.";

/// Runs every catalog rule against the input, then finalizes: guaranteed
/// observation, tension-conditioned suggestion, mode-specific tail, universal
/// next steps, clarification cap, and score/level derivation.
///
/// Pure and deterministic; identical input and mode always yield identical
/// output. The score is computed AFTER the clarification cap, so at most
/// `CLARIFICATION_CAP` questions ever count against it.
pub fn analyze_preparation(data: &PreparationInput, mode: FeedbackMode) -> AnalysisOutput {
    let mut clarification_questions: Vec<String> = Vec::new();
    let mut observations: Vec<String> = Vec::new();
    let mut suggestions: Vec<String> = Vec::new();
    let mut next_steps: Vec<String> = Vec::new();
    let mut inconsistencies: Vec<String> = Vec::new();

    for rule in rule_catalog() {
        if (rule.applies)(data) {
            let bucket = match rule.bucket {
                Bucket::Clarification => &mut clarification_questions,
                Bucket::Observation => &mut observations,
                Bucket::Suggestion => &mut suggestions,
                Bucket::NextStep => &mut next_steps,
                Bucket::Inconsistency => &mut inconsistencies,
            };
            bucket.push(rule.message.to_string());
        }
    }

    if observations.is_empty() {
        observations.push(DEFAULT_OBSERVATION.to_string());
    }

    if inconsistencies.is_empty() {
        suggestions.push(KEEP_STRUCTURE_SUGGESTION.to_string());
    } else {
        suggestions.push(TENSION_SUGGESTION.to_string());
    }

    match mode {
        FeedbackMode::Curso => {
            suggestions.push(
                "Conecta cada hipótesis de contraparte con evidencia observable para fortalecer criterio aplicado en clase."
                    .to_string(),
            );
            suggestions.push(
                "Elegí foco pedagógico por ronda (ética, poder o conducta) y evaluá con evidencia observable, no solo con impresiones."
                    .to_string(),
            );
            next_steps.push(
                "Ensaya una apertura de 2 minutos centrada en objetivo real y punto de ruptura."
                    .to_string(),
            );
        }
        FeedbackMode::Profesional => {
            suggestions.push(
                "Define una línea roja explícita y el orden exacto de tus concesiones críticas."
                    .to_string(),
            );
            next_steps.push(
                "Valida MAAN y breakpoint con datos verificables antes de entrar a la reunión."
                    .to_string(),
            );
        }
    }

    next_steps.extend(UNIVERSAL_NEXT_STEPS.iter().map(|s| s.to_string()));

    clarification_questions.truncate(CLARIFICATION_CAP);

    // Score counts the surviving questions, not the pre-cap total.
    let score =
        100 - (inconsistencies.len() as i32 * 20 + clarification_questions.len() as i32 * 10);
    let preparation_level = PreparationLevel::from_score(score);

    debug!(
        score,
        level = %preparation_level,
        inconsistencies = inconsistencies.len(),
        clarifications = clarification_questions.len(),
        "preparation analyzed"
    );

    AnalysisOutput {
        clarification_questions,
        observations,
        suggestions,
        next_steps,
        inconsistencies,
        preparation_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::preparation::{
        ContextBlock, ObjectiveBlock, PowerAlternativesBlock, RiskBlock, StrategyBlock,
    };
    use proptest::prelude::*;

    fn empty() -> PreparationInput {
        PreparationInput::default()
    }

    // A preparation that trips no detection rule at all: every keyword
    // surface carries at least one token from every always-active rule.
    fn fully_covered() -> PreparationInput {
        PreparationInput {
            context: ContextBlock {
                negotiation_type: "conversación puntual".into(),
                impact_level: "medio".into(),
                counterpart_relationship: "puntual".into(),
            },
            objective: ObjectiveBlock {
                explicit_objective: "cerrar acuerdo de servicios".into(),
                real_objective: "asegurar continuidad operativa".into(),
                minimum_acceptable_result: "mínimo de reserva definido, umbral claro".into(),
            },
            power_alternatives: PowerAlternativesBlock {
                maan: "alternativa con otro proveedor, batna cuantificada en valor esperado".into(),
                counterpart_perceived_strength: "media".into(),
                breakpoint: "walk-away con límite y escenario de costo".into(),
            },
            strategy: StrategyBlock {
                estimated_zopa: "rango definido".into(),
                concession_sequence:
                    "secuencia táctica con ensayo y práctica, debrief, hábito de pausa ética"
                        .into(),
                counterpart_hypothesis:
                    "preguntará por restricciones de presupuesto y autoridad, pediré reciprocidad, tiene alternativa"
                        .into(),
            },
            risk: RiskBlock {
                emotional_variable: "calma".into(),
                main_risk: "riesgo de anclar en mi mínimo aceptable".into(),
                key_signal: "si pide exclusividad, señal de cambio".into(),
            },
        }
    }

    #[test]
    fn empty_input_caps_clarifications_and_scores_post_cap() {
        // An all-empty preparation trips many clarification rules (including
        // the identical-objectives inconsistency, since "" == ""), so the cap
        // must kick in and the score must count only the surviving three.
        let out = analyze_preparation(&empty(), FeedbackMode::Profesional);

        assert_eq!(out.clarification_questions.len(), CLARIFICATION_CAP);
        assert!(!out.inconsistencies.is_empty());

        let score = 100
            - (out.inconsistencies.len() as i32 * 20
                + out.clarification_questions.len() as i32 * 10);
        assert_eq!(out.preparation_level, PreparationLevel::from_score(score));
    }

    #[test]
    fn observations_never_empty() {
        let out = analyze_preparation(&fully_covered(), FeedbackMode::Profesional);
        assert!(!out.observations.is_empty());
    }

    #[test]
    fn clean_input_reaches_avanzado_with_default_observation() {
        let out = analyze_preparation(&fully_covered(), FeedbackMode::Profesional);

        assert!(out.inconsistencies.is_empty(), "{:?}", out.inconsistencies);
        assert!(
            out.clarification_questions.is_empty(),
            "{:?}",
            out.clarification_questions
        );
        assert_eq!(out.preparation_level, PreparationLevel::Avanzado);
        assert_eq!(
            out.observations,
            vec![
                "La preparación cubre variables clave y mantiene un encuadre estratégico consistente."
                    .to_string()
            ]
        );
        assert!(out
            .suggestions
            .contains(&KEEP_STRUCTURE_SUGGESTION.to_string()));
    }

    #[test]
    fn inconsistencies_switch_the_structural_suggestion() {
        let mut input = fully_covered();
        // Force the identical-objectives inconsistency.
        input.objective.real_objective = input.objective.explicit_objective.clone();

        let out = analyze_preparation(&input, FeedbackMode::Profesional);
        assert!(out.suggestions.contains(&TENSION_SUGGESTION.to_string()));
        assert!(!out
            .suggestions
            .contains(&KEEP_STRUCTURE_SUGGESTION.to_string()));
    }

    #[test]
    fn profesional_mode_appends_red_line_tail() {
        let out = analyze_preparation(&fully_covered(), FeedbackMode::Profesional);

        assert!(out.suggestions.contains(
            &"Define una línea roja explícita y el orden exacto de tus concesiones críticas."
                .to_string()
        ));
        assert_eq!(
            out.next_steps[0],
            "Valida MAAN y breakpoint con datos verificables antes de entrar a la reunión."
        );
    }

    #[test]
    fn curso_mode_appends_two_pedagogical_suggestions() {
        let out = analyze_preparation(&fully_covered(), FeedbackMode::Curso);

        let tail: Vec<_> = out
            .suggestions
            .iter()
            .rev()
            .take(2)
            .rev()
            .cloned()
            .collect();
        assert_eq!(
            tail,
            vec![
                "Conecta cada hipótesis de contraparte con evidencia observable para fortalecer criterio aplicado en clase.".to_string(),
                "Elegí foco pedagógico por ronda (ética, poder o conducta) y evaluá con evidencia observable, no solo con impresiones.".to_string(),
            ]
        );
        assert_eq!(
            out.next_steps[0],
            "Ensaya una apertura de 2 minutos centrada en objetivo real y punto de ruptura."
        );
    }

    #[test]
    fn universal_next_steps_close_the_list_in_order() {
        let out = analyze_preparation(&empty(), FeedbackMode::Curso);

        assert_eq!(out.next_steps.len(), 1 + UNIVERSAL_NEXT_STEPS.len());
        for (produced, expected) in out.next_steps[1..].iter().zip(UNIVERSAL_NEXT_STEPS) {
            assert_eq!(produced, expected);
        }
    }

    #[test]
    fn two_inconsistencies_and_capped_clarifications_score_inicial() {
        // 2 * 20 + 3 * 10 = 70 penalty, score 30, below the 45 threshold.
        let mut input = empty();
        input.risk.main_risk = "riesgo emocional fuerte".into();
        // emotional_variable stays empty so the misalignment fires alongside
        // the identical-objectives inconsistency; concession_sequence carries
        // a listening token so the active-listening rule stays quiet.
        input.strategy.concession_sequence = "escuchar primero".into();

        let out = analyze_preparation(&input, FeedbackMode::Profesional);
        assert_eq!(out.inconsistencies.len(), 2);
        assert_eq!(out.clarification_questions.len(), 3);
        assert_eq!(out.preparation_level, PreparationLevel::Inicial);
    }

    #[test]
    fn findings_push_the_level_down() {
        let clean = analyze_preparation(&fully_covered(), FeedbackMode::Profesional);
        assert_eq!(clean.preparation_level, PreparationLevel::Avanzado);

        // An all-empty preparation carries one inconsistency ("" == "") and
        // three capped questions: 100 - 20 - 30 = 50, Estructurado.
        let noisy = analyze_preparation(&empty(), FeedbackMode::Profesional);
        assert_eq!(noisy.preparation_level, PreparationLevel::Estructurado);
    }

    #[test]
    fn mode_does_not_change_detection_results() {
        let prof = analyze_preparation(&empty(), FeedbackMode::Profesional);
        let curso = analyze_preparation(&empty(), FeedbackMode::Curso);

        assert_eq!(prof.clarification_questions, curso.clarification_questions);
        assert_eq!(prof.observations, curso.observations);
        assert_eq!(prof.inconsistencies, curso.inconsistencies);
        assert_eq!(prof.preparation_level, curso.preparation_level);
    }

    fn arb_input() -> impl Strategy<Value = PreparationInput> {
        let field = "[a-záéíóú ]{0,40}";
        (
            (field, field, field),
            (field, field, field),
            (field, field, field),
            (field, field, field),
            (field, field, field),
        )
            .prop_map(|(c, o, p, s, r)| PreparationInput {
                context: ContextBlock {
                    negotiation_type: c.0,
                    impact_level: c.1,
                    counterpart_relationship: c.2,
                },
                objective: ObjectiveBlock {
                    explicit_objective: o.0,
                    real_objective: o.1,
                    minimum_acceptable_result: o.2,
                },
                power_alternatives: PowerAlternativesBlock {
                    maan: p.0,
                    counterpart_perceived_strength: p.1,
                    breakpoint: p.2,
                },
                strategy: StrategyBlock {
                    estimated_zopa: s.0,
                    concession_sequence: s.1,
                    counterpart_hypothesis: s.2,
                },
                risk: RiskBlock {
                    emotional_variable: r.0,
                    main_risk: r.1,
                    key_signal: r.2,
                },
            })
    }

    proptest! {
        #[test]
        fn analysis_is_deterministic(input in arb_input()) {
            let a = analyze_preparation(&input, FeedbackMode::Profesional);
            let b = analyze_preparation(&input, FeedbackMode::Profesional);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn structural_invariants_hold(input in arb_input(), curso in any::<bool>()) {
            let mode = if curso { FeedbackMode::Curso } else { FeedbackMode::Profesional };
            let out = analyze_preparation(&input, mode);

            prop_assert!(out.clarification_questions.len() <= CLARIFICATION_CAP);
            prop_assert!(!out.observations.is_empty());
            prop_assert!(!out.suggestions.is_empty());
            prop_assert_eq!(out.next_steps.len(), 1 + UNIVERSAL_NEXT_STEPS.len());

            let score = 100
                - (out.inconsistencies.len() as i32 * 20
                    + out.clarification_questions.len() as i32 * 10);
            prop_assert_eq!(out.preparation_level, PreparationLevel::from_score(score));
        }
    }
}
