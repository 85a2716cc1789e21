//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `preparation` - The five-block preparation input model and feedback mode
//! - `analysis` - Pure rule-based analysis of a preparation (keyword matcher,
//!   rule catalog, evaluator, score/level derivation)
//! - `memo` - Debrief input and final memo synthesis
//! - `case` - Case lifecycle aggregate (preparation → analysis → execution →
//!   debrief → close)
//! - `templates` - Fixed catalog of course case templates

pub mod analysis;
pub mod case;
pub mod memo;
pub mod preparation;
pub mod templates;
