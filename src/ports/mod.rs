//! Ports - trait boundaries between the domain and the outside world.

pub mod analyzer;

pub use analyzer::{AnalyzerError, AnalyzerInfo, PreparationAnalyzer};
