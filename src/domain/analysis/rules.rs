//! Coaching rule catalog - the fixed, ordered list of detection rules.
//!
//! Each rule is an independent `(predicate, bucket, message)` entry: it reads
//! one or more preparation fields (often joined with a space to widen the
//! keyword surface across related blocks), evaluates keyword-presence
//! predicates combined with AND/NOT, and on trigger contributes one fixed
//! Spanish coaching string to exactly one bucket.
//!
//! Rules never depend on each other's firing; catalog order only determines
//! the order of messages inside each bucket (and therefore which
//! clarification questions survive the cap). Token lists are deliberately
//! aggressive substrings - short fragments like `"ética"` or `"emoc"` match
//! inside longer words, and that is part of the contract.

use once_cell::sync::Lazy;

use super::keywords::{contains_any, contains_any_joined};
use crate::domain::preparation::PreparationInput;

/// Which output bucket a rule feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Clarification,
    Observation,
    Suggestion,
    NextStep,
    Inconsistency,
}

/// A single detection rule.
pub struct Rule {
    /// Bucket the message lands in when the rule fires.
    pub bucket: Bucket,
    /// Fixed coaching string appended on trigger.
    pub message: &'static str,
    /// Pure predicate over the preparation input.
    pub applies: fn(&PreparationInput) -> bool,
}

/// The full ordered catalog.
pub fn rule_catalog() -> &'static [Rule] {
    Lazy::force(&CATALOG).as_slice()
}

static CATALOG: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        // Paired-field consistency: explicit vs real objective.
        Rule {
            bucket: Bucket::Inconsistency,
            message: "Objetivo explícito y objetivo real están definidos de forma idéntica; falta tensión estratégica explícita.",
            applies: |p| {
                p.objective.explicit_objective.trim().to_lowercase()
                    == p.objective.real_objective.trim().to_lowercase()
            },
        },
        Rule {
            bucket: Bucket::Clarification,
            message: "¿Tu MAAN describe una alternativa accionable y específica si no hay acuerdo?",
            applies: |p| {
                !contains_any(
                    &p.power_alternatives.maan,
                    &["alternativa", "plan b", "opción", "proveedor", "cliente"],
                )
            },
        },
        Rule {
            bucket: Bucket::Inconsistency,
            message: "El riesgo principal parece emocional, pero la variable emocional propia no está alineada.",
            applies: |p| {
                contains_any(&p.risk.main_risk, &["emoc", "ansiedad", "enojo", "frustr"])
                    && !contains_any(
                        &p.risk.emotional_variable,
                        &["emoc", "ansiedad", "enojo", "frustr"],
                    )
            },
        },
        Rule {
            bucket: Bucket::Suggestion,
            message: "Antes de ejecutar, explicitá un estándar ético mínimo: qué no vas a falsear, qué presión no vas a usar y qué criterio de justicia vas a sostener.",
            applies: |p| {
                !contains_any_joined(
                    &[&p.strategy.concession_sequence, &p.risk.main_risk],
                    &["ética", "candor", "buena fe", "justicia", "transpar", "límite táctico", "no mentir"],
                )
            },
        },
        Rule {
            bucket: Bucket::Observation,
            message: "Si usás táctica dura, definí límites explícitos para no deteriorar legitimidad ni relación futura.",
            applies: |p| {
                contains_any_joined(
                    &[&p.strategy.concession_sequence, &p.risk.main_risk],
                    &["amenaza", "ultim", "presión", "forzar", "arrincon", "dirty", "hardball"],
                ) && !contains_any_joined(
                    &[&p.strategy.concession_sequence, &p.risk.key_signal],
                    &["límite", "resumen", "pausa", "regla", "reciproc", "respeto"],
                )
            },
        },
        Rule {
            bucket: Bucket::Clarification,
            message: "¿Tu BATNA está cuantificada en valor esperado (escenarios, probabilidades y costos), no solo descrita en términos generales?",
            applies: |p| {
                !contains_any_joined(
                    &[&p.power_alternatives.maan, &p.power_alternatives.breakpoint],
                    &["valor esperado", "probab", "%", "escenario", "costo", "litig", "best alternative", "batna"],
                )
            },
        },
        Rule {
            bucket: Bucket::Suggestion,
            message: "Definí un valor de reserva explícito (umbral de aceptación) traducido a términos comparables con la oferta en mesa.",
            applies: |p| {
                !contains_any_joined(
                    &[&p.objective.minimum_acceptable_result, &p.power_alternatives.breakpoint],
                    &["reserva", "mínimo", "walk-away", "punto de retiro", "umbral"],
                )
            },
        },
        Rule {
            bucket: Bucket::Observation,
            message: "Falta estimación explícita del BATNA de la contraparte; eso puede sesgar tu lectura de poder relativo.",
            applies: |p| {
                !contains_any_joined(
                    &[
                        &p.strategy.counterpart_hypothesis,
                        &p.power_alternatives.counterpart_perceived_strength,
                    ],
                    &["batna", "alternativa", "sin acuerdo", "plan b", "segunda opción", "outside option"],
                )
            },
        },
        Rule {
            bucket: Bucket::Clarification,
            message: "¿Ya tradujiste tu alternativa externa a términos comparables con esta oferta (alcance, riesgo, implementación y costo total)?",
            applies: |p| {
                contains_any(
                    &p.context.negotiation_type,
                    &["empresa", "b2b", "proveedor", "contrato", "compra"],
                ) && !contains_any_joined(
                    &[
                        &p.objective.minimum_acceptable_result,
                        &p.strategy.concession_sequence,
                    ],
                    &["comparable", "equivalente", "alcance", "cobertura", "servicio", "riesgo", "tco", "implement"],
                )
            },
        },
        Rule {
            bucket: Bucket::Observation,
            message: "La secuencia de concesiones sugiere riesgo de ceder valor demasiado temprano.",
            applies: |p| {
                contains_any(
                    &p.strategy.concession_sequence,
                    &["rápido", "inmediato", "todo", "primera oferta"],
                )
            },
        },
        Rule {
            bucket: Bucket::Clarification,
            message: "¿Qué variables no monetarias podés sumar para convertir esta conversación en una negociación multi-issue?",
            applies: |p| {
                contains_any(
                    &p.objective.explicit_objective,
                    &["precio", "tarifa", "salario", "fee"],
                ) && !contains_any(
                    &p.strategy.concession_sequence,
                    &["plazo", "volumen", "calidad", "servicio", "garant", "riesgo", "sla", "gobernanza"],
                )
            },
        },
        Rule {
            bucket: Bucket::Inconsistency,
            message: "En una negociación contractual no aparece un mecanismo explícito de revisión o manejo de disputas.",
            applies: |p| {
                contains_any(&p.context.negotiation_type, &["contrato", "b2b", "proveedor"])
                    && !contains_any_joined(
                        &[&p.objective.minimum_acceptable_result, &p.risk.main_risk],
                        &["revisión", "renegoci", "mediación", "arbitra", "disputa"],
                    )
            },
        },
        // Competitive/auction contexts (negotiauction).
        Rule {
            bucket: Bucket::Clarification,
            message: "En contexto competitivo, ¿qué paquetes simultáneos vas a presentar para evitar competir solo por precio?",
            applies: |p| {
                contains_any(
                    &p.context.negotiation_type,
                    &["beauty", "licitación", "negotiauction", "concurso"],
                ) && !contains_any(
                    &p.strategy.concession_sequence,
                    &["opción", "paquete", "alternativa"],
                )
            },
        },
        Rule {
            bucket: Bucket::Observation,
            message: "Podría faltar una táctica de cierre tipo 'shut-down move' para limitar el ida y vuelta con competidores.",
            applies: |p| {
                contains_any(
                    &p.context.negotiation_type,
                    &["beauty", "licitación", "negotiauction", "concurso"],
                ) && !contains_any(&p.risk.key_signal, &["exclus", "ahora", "cierre", "hoy"])
            },
        },
        Rule {
            bucket: Bucket::Suggestion,
            message: "Incorporá una secuencia explícita de intercambio de información: revelar una variable propia y pedir reciprocidad.",
            applies: |p| {
                !contains_any(
                    &p.strategy.counterpart_hypothesis,
                    &["pregunt", "inform", "abr", "interes", "reciproc"],
                )
            },
        },
        Rule {
            bucket: Bucket::Clarification,
            message: "¿Qué indicador observable te confirmará que debes sostener o cambiar la estrategia?",
            applies: |p| {
                !contains_any(&p.risk.key_signal, &["si", "cuando", "señal", "indicador", "pregunta"])
            },
        },
        Rule {
            bucket: Bucket::Suggestion,
            message: "Definí un protocolo de manejo de escalada: pausa táctica, reglas de interacción y cierre de cada sesión por escrito.",
            applies: |p| {
                contains_any_joined(
                    &[
                        &p.power_alternatives.counterpart_perceived_strength,
                        &p.risk.main_risk,
                    ],
                    &["difícil", "duro", "ultim", "amenaz", "hostil", "agres", "no negociable", "presión"],
                ) && !contains_any(
                    &p.strategy.concession_sequence,
                    &["pausa", "break", "balcón", "tiempo", "norma", "protocolo", "regla", "resumen"],
                )
            },
        },
        Rule {
            bucket: Bucket::Clarification,
            message: "¿Qué ajuste de proceso usarás para compensar asimetrías de poder (turnos, respaldo, tercero neutral o validación escrita)?",
            applies: |p| {
                contains_any_joined(
                    &[
                        &p.power_alternatives.counterpart_perceived_strength,
                        &p.context.counterpart_relationship,
                    ],
                    &["asimetr", "domin", "muy fuerte", "jerarqu", "senior", "monopol", "dependencia"],
                ) && !contains_any_joined(
                    &[&p.strategy.counterpart_hypothesis, &p.risk.key_signal],
                    &["proceso", "turno", "voz", "sesgo", "estatus", "género", "raza", "tercero", "respaldo"],
                )
            },
        },
        Rule {
            bucket: Bucket::Clarification,
            message: "¿Cuál es tu BATNA operativo y qué condición concreta activa tu salida de la negociación?",
            applies: |p| {
                !contains_any_joined(
                    &[&p.power_alternatives.maan, &p.power_alternatives.breakpoint],
                    &["batna", "alternativa", "walk", "retiro", "salir", "plan b", "límite"],
                )
            },
        },
        Rule {
            bucket: Bucket::Inconsistency,
            message: "Reconocés riesgo emocional, pero la estrategia no explicita técnicas de escucha activa ni reencuadre.",
            applies: |p| {
                contains_any(
                    &p.risk.main_risk,
                    &["emoc", "enojo", "frustr", "ansiedad", "reacción"],
                ) && !contains_any(
                    &p.strategy.concession_sequence,
                    &["pregunta", "escuchar", "parafrase", "interés", "reencuadre", "yes", "propuesta"],
                )
            },
        },
        Rule {
            bucket: Bucket::Observation,
            message: "Podrían faltar hipótesis sobre restricciones ocultas de la contraparte (autoridad, precedentes, presupuesto o legales).",
            applies: |p| {
                !contains_any(
                    &p.strategy.counterpart_hypothesis,
                    &["restric", "autoridad", "precedente", "presupuesto", "abogado", "superior", "instrucción"],
                )
            },
        },
        Rule {
            bucket: Bucket::Inconsistency,
            message: "El diseño prioriza cierre, pero no explicita cómo se implementará ni quién gobernará el acuerdo después de firmar.",
            applies: |p| {
                contains_any(
                    &p.context.negotiation_type,
                    &["contrato", "alianza", "joint", "proveedor", "b2b"],
                ) && !contains_any_joined(
                    &[
                        &p.strategy.counterpart_hypothesis,
                        &p.objective.minimum_acceptable_result,
                    ],
                    &["implement", "seguimiento", "gobernanza", "responsable", "comité", "hito"],
                )
            },
        },
        Rule {
            bucket: Bucket::Suggestion,
            message: "Hacé un mini 3D audit: táctica en mesa, diseño de propuestas y setup (quién decide, en qué orden y con qué proceso).",
            applies: |p| {
                !contains_any(
                    &p.strategy.concession_sequence,
                    &["táct", "interpersonal", "diseño", "setup", "secuencia", "actor", "orden"],
                )
            },
        },
        Rule {
            bucket: Bucket::Clarification,
            message: "Si el cierre se traba, ¿qué barrera principal esperás (táctica, diseño o setup) y qué acción concreta aplicarás?",
            applies: |p| {
                contains_any(
                    &p.risk.main_risk,
                    &["cierre", "firma", "último", "deadline", "demora"],
                ) && !contains_any_joined(
                    &[&p.risk.key_signal, &p.strategy.concession_sequence],
                    &["barrera", "impasse", "consecuencia", "plazo", "deadline", "tercero", "mediación"],
                )
            },
        },
        Rule {
            bucket: Bucket::Observation,
            message: "Objetivo ambicioso detectado: cuidá el posible backlash relacional con concesiones graduales y cierre percibido como justo.",
            applies: |p| {
                contains_any(
                    &p.objective.explicit_objective,
                    &["máximo", "muy alto", "agresivo", "techo", "premium"],
                ) && !contains_any_joined(
                    &[&p.strategy.concession_sequence, &p.risk.main_risk],
                    &["relación", "backlash", "aceptación gradual", "satisfacción", "percepción"],
                )
            },
        },
        Rule {
            bucket: Bucket::Suggestion,
            message: "Prepará respuesta para la 'pregunta más difícil' (mínimo aceptable, ultimátum o demanda de cierre inmediato) sin revelar de más.",
            applies: |p| {
                !contains_any_joined(
                    &[&p.strategy.counterpart_hypothesis, &p.risk.main_risk],
                    &["pregunta difícil", "ultim", "mínimo", "final offer", "hardest"],
                )
            },
        },
        Rule {
            bucket: Bucket::Suggestion,
            message: "Incluí un ensayo breve pre-negociación: reencuadre de ansiedad en foco operativo y práctica de primera oferta.",
            applies: |p| {
                contains_any_joined(
                    &[&p.risk.emotional_variable, &p.risk.main_risk],
                    &["ansiedad", "nerv", "miedo", "bloqueo"],
                ) && !contains_any(
                    &p.strategy.concession_sequence,
                    &["práctica", "role", "ensayo", "coach", "reencuadre", "excitación"],
                )
            },
        },
        // Multiparty / coalition contexts.
        Rule {
            bucket: Bucket::Clarification,
            message: "Si negociás en grupo, ¿cómo vas a mantener mensaje común y disciplina de coalición durante la presión final?",
            applies: |p| {
                contains_any(
                    &p.context.negotiation_type,
                    &["sindicato", "equipo", "coalición", "grupo", "colectiva"],
                ) && !contains_any(
                    &p.strategy.concession_sequence,
                    &["coalición", "alineación", "mensaje común", "frente"],
                )
            },
        },
        Rule {
            bucket: Bucket::Suggestion,
            message: "En multiparte, usá una mini matriz por actor (prioridades, BATNA y posible alineación) para anticipar cambios de coalición.",
            applies: |p| {
                contains_any(
                    &p.context.negotiation_type,
                    &["sindicato", "equipo", "coalición", "grupo", "colectiva", "familiar"],
                ) && !contains_any_joined(
                    &[
                        &p.strategy.counterpart_hypothesis,
                        &p.strategy.concession_sequence,
                    ],
                    &["matriz", "prioridad", "alianza", "bloque", "voto", "paquete por actor"],
                )
            },
        },
        Rule {
            bucket: Bucket::Observation,
            message: "Si invertiste mucho en alternativas, vigilá sesgo de entitlement/costos hundidos para no endurecerte de más y dañar la relación.",
            applies: |p| {
                contains_any(
                    &p.power_alternatives.maan,
                    &["invert", "investig", "tiempo", "costoso", "caro", "consultor", "due diligence"],
                ) && !contains_any_joined(
                    &[&p.strategy.concession_sequence, &p.risk.main_risk],
                    &["buena fe", "ética", "relación", "reciproc", "transpar", "largo plazo"],
                )
            },
        },
        // Salary / job-offer contexts.
        Rule {
            bucket: Bucket::Suggestion,
            message: "Además del salario, incluí 1-2 variables de valor futuro (revisión, alcance de rol, desarrollo o flexibilidad).",
            applies: |p| {
                is_salary(p)
                    && !contains_any_joined(
                        &[
                            &p.objective.minimum_acceptable_result,
                            &p.strategy.concession_sequence,
                        ],
                        &["desarrollo", "rol", "aprendiz", "mentor", "revisión", "crecimiento", "proyecto", "flex"],
                    )
            },
        },
        Rule {
            bucket: Bucket::Clarification,
            message: "¿Qué parte del paquete es realmente no negociable y qué parte sí admite ajustes (timing, estructura, revisión)?",
            applies: |p| {
                is_salary(p)
                    && !contains_any_joined(
                        &[
                            &p.strategy.counterpart_hypothesis,
                            &p.power_alternatives.counterpart_perceived_strength,
                        ],
                        &["banda", "política", "paquete", "no negociable", "estándar", "hr", "recruit"],
                    )
            },
        },
        Rule {
            bucket: Bucket::Observation,
            message: "En ofertas laborales conviene priorizar 2-3 temas críticos para evitar sobrecargar la contraparte y deteriorar la relación.",
            applies: |p| {
                is_salary(p)
                    && (contains_any(
                        &p.strategy.concession_sequence,
                        &["lista", "todo", "muchas", "varias demandas"],
                    ) || contains_any(
                        &p.risk.main_risk,
                        &["rechazo", "revocar", "retirar oferta"],
                    ))
            },
        },
        Rule {
            bucket: Bucket::Inconsistency,
            message: "La estrategia salarial no explicita alternativa externa/interna; eso debilita tu poder de negociación percibido.",
            applies: |p| {
                is_salary(p)
                    && !contains_any(
                        &p.power_alternatives.maan,
                        &["proceso", "otra oferta", "mercado", "alternativa", "actual"],
                    )
            },
        },
        // Relationship maintenance.
        Rule {
            bucket: Bucket::Suggestion,
            message: "Para cuidar la relación, definí una micro-rutina: apertura de rapport, transparencia de criterios y cierre con próximos pasos explícitos.",
            applies: |p| {
                contains_any(
                    &p.context.counterpart_relationship,
                    &["largo", "en curso", "nueva"],
                ) && !contains_any_joined(
                    &[
                        &p.strategy.concession_sequence,
                        &p.strategy.counterpart_hypothesis,
                    ],
                    &["rapport", "confianza", "alineación", "small talk", "transpar", "seguimiento", "check-in"],
                )
            },
        },
        Rule {
            bucket: Bucket::Clarification,
            message: "¿Cómo vas a gestionar expectativas y percepción de justicia para evitar que la otra parte “cobre” en la próxima negociación?",
            applies: |p| {
                contains_any(&p.risk.main_risk, &["relación", "confianza", "resent", "fricción"])
                    && !contains_any_joined(
                        &[&p.risk.key_signal, &p.strategy.concession_sequence],
                        &["expectativa", "satisfacción", "compar", "explicación", "percepción"],
                    )
            },
        },
        Rule {
            bucket: Bucket::Observation,
            message: "En negociaciones con alto componente relacional conviene prever un tercero neutral y reglas de transparencia desde el inicio.",
            applies: |p| {
                contains_any(&p.context.negotiation_type, &["familiar", "sucesión", "socios"])
                    && !contains_any_joined(
                        &[&p.strategy.concession_sequence, &p.risk.key_signal],
                        &["neutral", "mediación", "tercero", "proceso", "transpar"],
                    )
            },
        },
        Rule {
            bucket: Bucket::Suggestion,
            message: "Para consolidar aprendizaje, agregá un mini debrief estructurado: qué patrón funcionó, qué ajustar y cómo transferirlo al próximo caso.",
            applies: |p| {
                !contains_any_joined(
                    &[
                        &p.strategy.concession_sequence,
                        &p.strategy.counterpart_hypothesis,
                    ],
                    &["debrief", "aprendiz", "analog", "transfer", "observ", "feedback"],
                )
            },
        },
        Rule {
            bucket: Bucket::Observation,
            message: "En simulación, además del resultado, monitoreá sesgos de desempeño (miedo a perder, rigidez, reacción defensiva).",
            applies: |p| {
                contains_any(&p.context.negotiation_type, &["simul", "entren", "clase"])
                    && !contains_any_joined(
                        &[&p.risk.main_risk, &p.risk.key_signal],
                        &["ganar", "perder", "compet", "estrés", "defensiv", "hábito"],
                    )
            },
        },
        // Remote / asynchronous channels.
        Rule {
            bucket: Bucket::Clarification,
            message: "¿Qué canal usarás en cada fase (alineación por videollamada, iteración por escrito y cierre por recap)?",
            applies: |p| {
                is_remote(p)
                    && !contains_any_joined(
                        &[&p.strategy.concession_sequence, &p.risk.key_signal],
                        &["canal", "video", "llamada", "email", "sincr", "asincr", "chat"],
                    )
            },
        },
        Rule {
            bucket: Bucket::Suggestion,
            message: "En tramos por e-mail, definí cadencia de respuesta y cierre de cada ronda con resumen escrito para reducir malentendidos.",
            applies: |p| {
                is_remote(p)
                    && contains_any_joined(
                        &[&p.context.negotiation_type, &p.strategy.concession_sequence],
                        &["email", "mail", "asincr"],
                    )
                    && !contains_any_joined(
                        &[&p.strategy.concession_sequence, &p.risk.key_signal],
                        &["plazo de respuesta", "cadencia", "48h", "24h", "resumen", "confirmación escrita"],
                    )
            },
        },
        Rule {
            bucket: Bucket::Observation,
            message: "En videonegociación conviene explicitar una apertura breve de rapport y reglas de interacción (agenda, turnos y recap).",
            applies: |p| {
                is_remote(p)
                    && contains_any_joined(
                        &[&p.context.negotiation_type, &p.strategy.concession_sequence],
                        &["video", "zoom", "meet", "teams"],
                    )
                    && !contains_any_joined(
                        &[&p.strategy.concession_sequence, &p.risk.main_risk],
                        &["rapport", "confianza", "apertura", "agenda", "turnos", "sin interrup"],
                    )
            },
        },
        Rule {
            bucket: Bucket::Inconsistency,
            message: "Hay riesgo de malentendidos, pero no aparece un protocolo explícito de validación (paráfrasis + confirmación).",
            applies: |p| {
                contains_any(
                    &p.risk.main_risk,
                    &["malentendido", "interpret", "tono", "fricción digital"],
                ) && !contains_any_joined(
                    &[&p.strategy.concession_sequence, &p.risk.key_signal],
                    &["parafrase", "resumen", "confirmación", "check-back", "pregunta de validación"],
                )
            },
        },
        Rule {
            bucket: Bucket::Suggestion,
            message: "Antes de negociar, hacé un ensayo breve (10 min) y definí qué indicador revisarás en debrief para sostener aprendizaje transferible.",
            applies: |p| {
                !contains_any_joined(
                    &[&p.strategy.concession_sequence, &p.risk.key_signal],
                    &["ensayo", "rehears", "simulación", "práctica", "debrief", "aprendiz"],
                )
            },
        },
        Rule {
            bucket: Bucket::Suggestion,
            message: "Definí una microconducta observable para practicar bajo presión (por ejemplo: pausar, parafrasear y preguntar antes de conceder).",
            applies: |p| {
                !contains_any_joined(
                    &[&p.strategy.concession_sequence, &p.risk.key_signal],
                    &["hábito", "microconducta", "si pasa", "entonces", "provoc", "coach", "interrup"],
                )
            },
        },
        Rule {
            bucket: Bucket::Observation,
            message: "Podrían faltar restricciones estructurales de la organización (métricas, incentivos, autoridad o proceso) que impactan el resultado.",
            applies: |p| {
                contains_any(
                    &p.context.negotiation_type,
                    &["empresa", "b2b", "proveedor", "interna", "equipo"],
                ) && !contains_any_joined(
                    &[
                        &p.power_alternatives.counterpart_perceived_strength,
                        &p.strategy.counterpart_hypothesis,
                    ],
                    &["incentivo", "métrica", "autoridad", "proceso", "estructura", "aprobación", "presupuesto"],
                )
            },
        },
    ]
});

fn is_salary(p: &PreparationInput) -> bool {
    contains_any(
        &p.context.negotiation_type,
        &["salar", "oferta laboral", "compensación", "empleo"],
    )
}

fn is_remote(p: &PreparationInput) -> bool {
    contains_any(
        &p.context.negotiation_type,
        &["online", "virtual", "remota", "video", "zoom", "email", "mail"],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::preparation::PreparationInput;

    fn blank() -> PreparationInput {
        PreparationInput::default()
    }

    #[test]
    fn catalog_has_expected_size() {
        assert_eq!(rule_catalog().len(), 46);
    }

    #[test]
    fn catalog_never_feeds_next_steps_directly() {
        // Next steps are only produced by finalization, never by detection rules.
        assert!(rule_catalog().iter().all(|r| r.bucket != Bucket::NextStep));
    }

    #[test]
    fn identical_objectives_rule_is_case_and_whitespace_insensitive() {
        let mut p = blank();
        p.objective.explicit_objective = "  Cerrar el Contrato ".into();
        p.objective.real_objective = "cerrar el contrato".into();

        let rule = &rule_catalog()[0];
        assert_eq!(rule.bucket, Bucket::Inconsistency);
        assert!((rule.applies)(&p));

        p.objective.real_objective = "otra cosa".into();
        assert!(!(rule.applies)(&p));
    }

    #[test]
    fn maan_without_actionable_keywords_triggers_clarification() {
        let mut p = blank();
        p.power_alternatives.maan = "ofrezco café".into();

        let rule = rule_catalog()
            .iter()
            .find(|r| r.message.contains("alternativa accionable"))
            .unwrap();
        assert!((rule.applies)(&p));

        p.power_alternatives.maan = "tengo un plan b con otro proveedor".into();
        assert!(!(rule.applies)(&p));
    }

    #[test]
    fn salary_rules_require_salary_context() {
        let mut p = blank();
        p.power_alternatives.maan = "nada concreto".into();

        let rule = rule_catalog()
            .iter()
            .find(|r| r.message.contains("estrategia salarial"))
            .unwrap();
        assert!(!(rule.applies)(&p));

        p.context.negotiation_type = "negociación salarial".into();
        assert!((rule.applies)(&p));

        p.power_alternatives.maan = "tengo otra oferta en el mercado".into();
        assert!(!(rule.applies)(&p));
    }

    #[test]
    fn emotional_risk_misalignment_is_an_inconsistency() {
        let mut p = blank();
        p.risk.main_risk = "reaccionar con enojo en la mesa".into();
        p.risk.emotional_variable = "ninguna".into();

        let rule = rule_catalog()
            .iter()
            .find(|r| r.message.contains("variable emocional propia"))
            .unwrap();
        assert_eq!(rule.bucket, Bucket::Inconsistency);
        assert!((rule.applies)(&p));

        p.risk.emotional_variable = "ansiedad por cerrar".into();
        assert!(!(rule.applies)(&p));
    }

    #[test]
    fn hard_tactics_without_limits_is_observed() {
        let mut p = blank();
        p.strategy.concession_sequence = "usar presión y ultimátum".into();

        let rule = rule_catalog()
            .iter()
            .find(|r| r.message.contains("táctica dura"))
            .unwrap();
        assert!((rule.applies)(&p));

        p.risk.key_signal = "pausa si escala".into();
        assert!(!(rule.applies)(&p));
    }

    #[test]
    fn multiword_tokens_match_across_joined_fields() {
        // "plan b" split across maan and breakpoint still counts because the
        // two fields are joined with a space before matching.
        let mut p = blank();
        p.power_alternatives.maan = "tengo un plan".into();
        p.power_alternatives.breakpoint = "b de salida".into();

        let rule = rule_catalog()
            .iter()
            .find(|r| r.message.contains("BATNA operativo"))
            .unwrap();
        assert!(!(rule.applies)(&p));
    }
}
