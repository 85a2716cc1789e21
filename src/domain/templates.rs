//! Case template catalog.
//!
//! Curated starting points for course cohorts: each template carries a full
//! preparation so a case created from it lands directly in `en_preparacion`
//! with content to iterate on. Catalog kept intentionally small.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::domain::preparation::{
    ContextBlock, FeedbackMode, ObjectiveBlock, PowerAlternativesBlock, PreparationInput,
    RiskBlock, StrategyBlock,
};

/// A pre-filled case starting point.
#[derive(Debug, Clone, Serialize)]
pub struct CaseTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub ideal_for: &'static str,
    pub mode: FeedbackMode,
    pub preparation: PreparationInput,
}

/// Looks a template up by id.
pub fn find_template(id: &str) -> Option<&'static CaseTemplate> {
    CASE_TEMPLATES.iter().find(|template| template.id == id)
}

pub static CASE_TEMPLATES: Lazy<Vec<CaseTemplate>> = Lazy::new(|| {
    vec![
        CaseTemplate {
            id: "inmueble_compraventa",
            title: "Compraventa de inmueble urbano",
            ideal_for: "Clase 1 · Fundamentos y diagnóstico inicial.",
            mode: FeedbackMode::Curso,
            preparation: PreparationInput {
                context: ContextBlock {
                    negotiation_type: "Compraventa de inmueble".into(),
                    impact_level: "Alto".into(),
                    counterpart_relationship: "Nueva relación".into(),
                },
                objective: ObjectiveBlock {
                    explicit_objective: "Cerrar la operación dentro de 30 días.".into(),
                    real_objective: "Comprar con condiciones de pago que preserven liquidez.".into(),
                    minimum_acceptable_result: "Precio final dentro de banda objetivo y cláusulas claras.".into(),
                },
                power_alternatives: PowerAlternativesBlock {
                    maan: "Tener dos propiedades alternativas preevaluadas.".into(),
                    counterpart_perceived_strength: "El vendedor percibe alta demanda por la zona.".into(),
                    breakpoint: "No superar el precio techo definido.".into(),
                },
                strategy: StrategyBlock {
                    estimated_zopa: "Banda de precio y calendario de pagos escalonado.".into(),
                    concession_sequence: "Conceder velocidad de firma antes que precio.".into(),
                    counterpart_hypothesis: "Prioriza certidumbre de cierre por sobre último punto de precio.".into(),
                },
                risk: RiskBlock {
                    emotional_variable: "Ansiedad por perder oportunidad.".into(),
                    main_risk: "Conceder precio demasiado temprano.".into(),
                    key_signal: "Si exige cierre inmediato sin contrapartida.".into(),
                },
            },
        },
        CaseTemplate {
            id: "negociacion_salarial",
            title: "Negociación salarial por cambio de rol",
            ideal_for: "Clase 2 · BATNA/ZOPA y argumentos de valor.",
            mode: FeedbackMode::Curso,
            preparation: PreparationInput {
                context: ContextBlock {
                    negotiation_type: "Negociación salarial".into(),
                    impact_level: "Alto".into(),
                    counterpart_relationship: "Relación en curso".into(),
                },
                objective: ObjectiveBlock {
                    explicit_objective: "Acordar nueva compensación para rol ampliado.".into(),
                    real_objective: "Alinear salario con responsabilidades y plan de carrera.".into(),
                    minimum_acceptable_result: "Ajuste base + revisión formal en 6 meses.".into(),
                },
                power_alternatives: PowerAlternativesBlock {
                    maan: "Mantener posición actual mientras evalúo ofertas externas.".into(),
                    counterpart_perceived_strength: "Empresa con restricciones presupuestarias.".into(),
                    breakpoint: "No aceptar aumento simbólico sin revisión pactada.".into(),
                },
                strategy: StrategyBlock {
                    estimated_zopa: "Rango de compensación con componentes fijo/variable.".into(),
                    concession_sequence: "Primero estructura del paquete, después timing.".into(),
                    counterpart_hypothesis: "Valoran retención, pero intentarán diferir costo fijo.".into(),
                },
                risk: RiskBlock {
                    emotional_variable: "Frustración acumulada.".into(),
                    main_risk: "Negociar desde molestia y no desde criterios.".into(),
                    key_signal: "Si evitan criterios objetivos y hablan solo de restricciones generales.".into(),
                },
            },
        },
        CaseTemplate {
            id: "contrato_b2b_terminos",
            title: "Términos de contrato B2B",
            ideal_for: "Clase 2 · Preparación avanzada en acuerdos complejos.",
            mode: FeedbackMode::Curso,
            preparation: PreparationInput {
                context: ContextBlock {
                    negotiation_type: "Negociación de términos contractuales B2B".into(),
                    impact_level: "Medio".into(),
                    counterpart_relationship: "Largo plazo".into(),
                },
                objective: ObjectiveBlock {
                    explicit_objective: "Cerrar contrato anual con SLA y plazos claros.".into(),
                    real_objective: "Proteger margen y previsibilidad operativa.".into(),
                    minimum_acceptable_result: "Acuerdo sobre plazos de pago, SLA mínimo y revisión semestral.".into(),
                },
                power_alternatives: PowerAlternativesBlock {
                    maan: "Mantener proveedor secundario activo.".into(),
                    counterpart_perceived_strength: "Comprador concentra volumen y presiona por descuentos.".into(),
                    breakpoint: "No aceptar SLA exigente sin contraprestación económica.".into(),
                },
                strategy: StrategyBlock {
                    estimated_zopa: "Descuento moderado a cambio de volumen y plazos.".into(),
                    concession_sequence: "Conceder reporting antes que precio.".into(),
                    counterpart_hypothesis: "Buscan bajar riesgo de abastecimiento más que precio extremo.".into(),
                },
                risk: RiskBlock {
                    emotional_variable: "Exceso de confianza por relación histórica.".into(),
                    main_risk: "Conceder términos legales sin medir impacto.".into(),
                    key_signal: "Si piden ampliar penalidades sin revisar contraprestaciones.".into(),
                },
            },
        },
        CaseTemplate {
            id: "licitacion_negotiauction",
            title: "Licitación competitiva (negotiauction)",
            ideal_for: "Clase 3 · Tácticas de presión y contramedidas.",
            mode: FeedbackMode::Curso,
            preparation: PreparationInput {
                context: ContextBlock {
                    negotiation_type: "Licitación / negotiauction".into(),
                    impact_level: "Alto".into(),
                    counterpart_relationship: "Nueva relación".into(),
                },
                objective: ObjectiveBlock {
                    explicit_objective: "Ganar contrato anual sin destruir margen.".into(),
                    real_objective: "Entrar como proveedor confiable con opción de expansión.".into(),
                    minimum_acceptable_result: "Precio piso respetado y condiciones de servicio viables.".into(),
                },
                power_alternatives: PowerAlternativesBlock {
                    maan: "Priorizar otras oportunidades del pipeline.".into(),
                    counterpart_perceived_strength: "El comprador usa competencia para presionar precio.".into(),
                    breakpoint: "No aceptar precio por debajo del umbral de rentabilidad.".into(),
                },
                strategy: StrategyBlock {
                    estimated_zopa: "Variantes por alcance, soporte y tiempos.".into(),
                    concession_sequence: "Presentar paquetes simultáneos y concesión recíproca.".into(),
                    counterpart_hypothesis: "El decisor valora confiabilidad y reducción de riesgo.".into(),
                },
                risk: RiskBlock {
                    emotional_variable: "Temor a perder la cuenta.".into(),
                    main_risk: "Entrar en espiral de concesiones.".into(),
                    key_signal: "Si pide última mejora sin criterio de adjudicación.".into(),
                },
            },
        },
        CaseTemplate {
            id: "contraparte_dificil_presion",
            title: "Relación en tensión con contraparte difícil",
            ideal_for: "Clase 3 · Manejo de conflicto y reencuadre.",
            mode: FeedbackMode::Curso,
            preparation: PreparationInput {
                context: ContextBlock {
                    negotiation_type: "Negociación con contraparte difícil".into(),
                    impact_level: "Alto".into(),
                    counterpart_relationship: "Largo plazo".into(),
                },
                objective: ObjectiveBlock {
                    explicit_objective: "Sostener condiciones viables frente a presión/ultimátum.".into(),
                    real_objective: "Mover la conversación de posiciones a intereses y preservar el vínculo de trabajo.".into(),
                    minimum_acceptable_result: "Acuerdo transitorio con revisión y métricas compartidas.".into(),
                },
                power_alternatives: PowerAlternativesBlock {
                    maan: "Activar alternativa parcial para no quedar rehén de una sola opción.".into(),
                    counterpart_perceived_strength: "Usa presión para acelerar concesiones.".into(),
                    breakpoint: "No convalidar cambios críticos sin reciprocidad.".into(),
                },
                strategy: StrategyBlock {
                    estimated_zopa: "Ajuste escalonado contra compromisos verificables.".into(),
                    concession_sequence: "Pausa táctica + propuesta alternativa + cierre por escrito + follow-up de satisfacción.".into(),
                    counterpart_hypothesis: "Detrás del ultimátum hay restricciones de tiempo o caja.".into(),
                },
                risk: RiskBlock {
                    emotional_variable: "Frustración por tono confrontativo.".into(),
                    main_risk: "Escalar a dinámica ganar/perder y deteriorar la confianza para futuras rondas.".into(),
                    key_signal: "Si vuelve a amenazas sin explorar criterios objetivos ni reconocer avances previos.".into(),
                },
            },
        },
        CaseTemplate {
            id: "cierre_e_implementacion",
            title: "Cierre e implementación del acuerdo",
            ideal_for: "Clase 4 · Cierre, seguimiento y ejecución.",
            mode: FeedbackMode::Curso,
            preparation: PreparationInput {
                context: ContextBlock {
                    negotiation_type: "Cierre de acuerdo e implementación".into(),
                    impact_level: "Crítico".into(),
                    counterpart_relationship: "Relación en curso".into(),
                },
                objective: ObjectiveBlock {
                    explicit_objective: "Cerrar acuerdo sin concesiones unilaterales de último minuto.".into(),
                    real_objective: "Asegurar implementación sostenible postfirma.".into(),
                    minimum_acceptable_result: "Contrato balanceado + responsables, hitos y revisión periódica.".into(),
                },
                power_alternatives: PowerAlternativesBlock {
                    maan: "Postergar cierre y activar alternativa validada.".into(),
                    counterpart_perceived_strength: "Presiona por deadline para reabrir puntos cerrados.".into(),
                    breakpoint: "No otorgar concesiones finales sin ajuste equivalente.".into(),
                },
                strategy: StrategyBlock {
                    estimated_zopa: "Rango de cierre con reciprocidad explícita.".into(),
                    concession_sequence: "Concesión solo contra compromiso implementable y verificable.".into(),
                    counterpart_hypothesis: "Necesita mostrar victoria interna y certidumbre de ejecución.".into(),
                },
                risk: RiskBlock {
                    emotional_variable: "Ansiedad por cerrar rápido.".into(),
                    main_risk: "Firmar sin gobernanza de implementación.".into(),
                    key_signal: "Si evita definir responsables o fechas de seguimiento.".into(),
                },
            },
        },
        CaseTemplate {
            id: "oferta_laboral_no_negociable",
            title: "Oferta laboral “no negociable”",
            ideal_for: "Clase 1/3 · Persuasión con límites de política.",
            mode: FeedbackMode::Curso,
            preparation: PreparationInput {
                context: ContextBlock {
                    negotiation_type: "Oferta laboral no negociable".into(),
                    impact_level: "Medio".into(),
                    counterpart_relationship: "Nueva relación".into(),
                },
                objective: ObjectiveBlock {
                    explicit_objective: "Mejorar oferta sin tensionar la relación inicial.".into(),
                    real_objective: "Ajustar componentes negociables del paquete sin insistir en lo bloqueado por política.".into(),
                    minimum_acceptable_result: "Compromiso de revisión salarial + mejora en al menos un componente no monetario.".into(),
                },
                power_alternatives: PowerAlternativesBlock {
                    maan: "Mantener proceso abierto con alternativas externas y continuidad temporal en situación actual.".into(),
                    counterpart_perceived_strength: "Se ampara en bandas y política de compensación estándar.".into(),
                    breakpoint: "No aceptar paquete que quede por debajo de umbral mínimo total definido.".into(),
                },
                strategy: StrategyBlock {
                    estimated_zopa: "Compensación total vía estructura (bono, revisión, alcance de rol, flexibilidad).".into(),
                    concession_sequence: "Priorizar 2 temas críticos y pedir criterios objetivos de banda antes de hacer concesiones.".into(),
                    counterpart_hypothesis: "Quiere cerrar rápido y evitar precedentes, pero puede flexibilizar timing y componentes.".into(),
                },
                risk: RiskBlock {
                    emotional_variable: "Ansiedad por perder la oferta.".into(),
                    main_risk: "Presionar demasiados puntos a la vez y provocar retiro o enfriamiento de la propuesta.".into(),
                    key_signal: "Si repiten “no negociable” sin explicar límites concretos ni criterios de excepción.".into(),
                },
            },
        },
    ]
});
