//! Analysis Module - Deterministic rule-based preparation analysis.
//!
//! A fixed catalog of independent coaching rules inspects the free-text
//! fields of a [`PreparationInput`](crate::domain::preparation::PreparationInput)
//! via case-insensitive keyword matching and fills five output buckets
//! (clarification questions, observations, suggestions, next steps,
//! inconsistencies), then derives a readiness score and level.
//!
//! # Design Philosophy
//!
//! Everything here is pure and stateless: no I/O, no shared buffers, fresh
//! output allocated per call. Given the same input and mode, the output is
//! byte-identical. Malformed content never fails - a rule that finds no
//! keyword simply does not fire.

mod evaluator;
mod keywords;
mod output;
mod rules;

pub use evaluator::{analyze_preparation, CLARIFICATION_CAP, UNIVERSAL_NEXT_STEPS};
pub use keywords::{contains_any, contains_any_joined};
pub use output::{AnalysisOutput, PreparationLevel};
pub use rules::{rule_catalog, Bucket, Rule};
