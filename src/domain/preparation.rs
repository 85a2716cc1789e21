//! Preparation input model - the five structured blocks a user fills in
//! before negotiating, plus the feedback mode.
//!
//! Every field is free text. Length bounds (280 chars max, 3 chars minimum on
//! the four anchor fields) are enforced by the input boundary, never here:
//! the analyzer accepts any well-typed input and is total over it.

use serde::{Deserialize, Serialize};

/// Maximum length of any preparation field, enforced at the input boundary.
pub const MAX_FIELD_CHARS: usize = 280;

/// Minimum length of the anchor fields (`negotiation_type`,
/// `explicit_objective`, `maan`, `main_risk`), enforced at the input boundary.
pub const MIN_ANCHOR_CHARS: usize = 3;

/// Which fixed suggestion/next-step tail the analysis appends.
///
/// The mode never alters which detection rules fire, only the closing
/// coaching strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackMode {
    /// Pedagogical framing for course cohorts.
    Curso,
    /// Direct, executive framing.
    #[default]
    Profesional,
}

/// Situational framing of the negotiation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextBlock {
    pub negotiation_type: String,
    #[serde(default)]
    pub impact_level: String,
    #[serde(default)]
    pub counterpart_relationship: String,
}

/// What the user wants, really wants, and minimally accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveBlock {
    pub explicit_objective: String,
    #[serde(default)]
    pub real_objective: String,
    #[serde(default)]
    pub minimum_acceptable_result: String,
}

/// Power balance: own best alternative, perceived counterpart strength,
/// and the walk-away threshold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerAlternativesBlock {
    /// Best alternative to a negotiated agreement (MAAN/BATNA).
    pub maan: String,
    #[serde(default)]
    pub counterpart_perceived_strength: String,
    #[serde(default)]
    pub breakpoint: String,
}

/// Planned play: estimated ZOPA, concession order, counterpart hypothesis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyBlock {
    #[serde(default)]
    pub estimated_zopa: String,
    #[serde(default)]
    pub concession_sequence: String,
    #[serde(default)]
    pub counterpart_hypothesis: String,
}

/// Risk reading: own emotional variable, main risk, key signal to watch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskBlock {
    #[serde(default)]
    pub emotional_variable: String,
    pub main_risk: String,
    #[serde(default)]
    pub key_signal: String,
}

/// A complete negotiation preparation: the unit the analyzer consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparationInput {
    pub context: ContextBlock,
    pub objective: ObjectiveBlock,
    pub power_alternatives: PowerAlternativesBlock,
    pub strategy: StrategyBlock,
    pub risk: RiskBlock,
}
