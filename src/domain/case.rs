//! Case aggregate - the lifecycle wrapper around one negotiation.
//!
//! A case moves `en_preparacion -> preparado -> ejecutado_pendiente_debrief
//! -> cerrado`. Editing the preparation always drops it back to
//! `en_preparacion`; attaching an analysis promotes it to `preparado`; a
//! closed case is immutable except that its debrief can still be revised.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::analysis::AnalysisOutput;
use crate::domain::memo::{build_final_memo, DebriefInput, FinalMemo};
use crate::domain::preparation::{FeedbackMode, PreparationInput};

/// Lifecycle states, serialized with their wire labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    EnPreparacion,
    Preparado,
    EjecutadoPendienteDebrief,
    Cerrado,
}

/// Violations of the lifecycle rules.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CaseError {
    #[error("a closed case cannot be edited")]
    CaseClosed,
    #[error("preparation must be completed before analyzing")]
    PreparationMissing,
    #[error("only an analyzed case can be marked executed")]
    NotPrepared,
    #[error("debrief is only available after execution")]
    DebriefNotAvailable,
    #[error("only an executed case can be closed")]
    NotExecuted,
    #[error("closing requires preparation, analysis and debrief")]
    SnapshotsIncomplete,
}

/// Closing questionnaire: end confidence (1-10) and agreement quality
/// ratings (1-5 each).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloseInput {
    pub confidence_end: u8,
    pub agreement_quality_result: u8,
    pub agreement_quality_relationship: u8,
    pub agreement_quality_sustainability: u8,
}

/// One negotiation case with its snapshots and derived metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    pub id: Uuid,
    pub title: String,
    pub mode: FeedbackMode,
    pub status: CaseStatus,
    pub preparation: Option<PreparationInput>,
    pub analysis: Option<AnalysisOutput>,
    pub debrief: Option<DebriefInput>,
    pub final_memo: Option<FinalMemo>,
    /// 100 minus a penalty capped at 90, so the floor is 10.
    pub clarity_score: i32,
    pub inconsistency_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub confidence_start: Option<u8>,
    pub confidence_end: Option<u8>,
    pub agreement_quality_result: Option<u8>,
    pub agreement_quality_relationship: Option<u8>,
    pub agreement_quality_sustainability: Option<u8>,
}

impl Case {
    pub fn new(title: impl Into<String>, mode: FeedbackMode, confidence_start: Option<u8>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            mode,
            status: CaseStatus::EnPreparacion,
            preparation: None,
            analysis: None,
            debrief: None,
            final_memo: None,
            clarity_score: 0,
            inconsistency_count: 0,
            created_at: now,
            updated_at: now,
            closed_at: None,
            confidence_start,
            confidence_end: None,
            agreement_quality_result: None,
            agreement_quality_relationship: None,
            agreement_quality_sustainability: None,
        }
    }

    /// Creates a case with a pre-filled preparation (template instantiation).
    pub fn with_preparation(
        title: impl Into<String>,
        mode: FeedbackMode,
        preparation: PreparationInput,
        confidence_start: Option<u8>,
    ) -> Self {
        let mut case = Self::new(title, mode, confidence_start);
        case.preparation = Some(preparation);
        case
    }

    /// Replaces the preparation snapshot. Always resets the case to
    /// `en_preparacion`, even if it was already analyzed or executed.
    pub fn upsert_preparation(&mut self, preparation: PreparationInput) -> Result<(), CaseError> {
        if self.status == CaseStatus::Cerrado {
            return Err(CaseError::CaseClosed);
        }
        self.preparation = Some(preparation);
        self.status = CaseStatus::EnPreparacion;
        self.touch();
        Ok(())
    }

    /// Records an analysis snapshot and the derived metrics, promoting the
    /// case to `preparado`.
    ///
    /// The clarity score uses the same penalty weights as the analyzer's
    /// readiness score but caps the total penalty at 90.
    pub fn attach_analysis(&mut self, analysis: AnalysisOutput) -> Result<(), CaseError> {
        if self.preparation.is_none() {
            return Err(CaseError::PreparationMissing);
        }
        let penalty =
            (analysis.inconsistencies.len() * 20 + analysis.clarification_questions.len() * 10) as i32;
        self.clarity_score = 100 - penalty.min(90);
        self.inconsistency_count = analysis.inconsistencies.len();
        self.analysis = Some(analysis);
        self.status = CaseStatus::Preparado;
        self.touch();
        Ok(())
    }

    pub fn mark_executed(&mut self) -> Result<(), CaseError> {
        if self.status != CaseStatus::Preparado {
            return Err(CaseError::NotPrepared);
        }
        self.status = CaseStatus::EjecutadoPendienteDebrief;
        self.touch();
        Ok(())
    }

    /// Records the debrief. Allowed after execution and also on a closed
    /// case, so a memo can be revisited with a corrected debrief.
    pub fn submit_debrief(&mut self, debrief: DebriefInput) -> Result<(), CaseError> {
        if !matches!(
            self.status,
            CaseStatus::EjecutadoPendienteDebrief | CaseStatus::Cerrado
        ) {
            return Err(CaseError::DebriefNotAvailable);
        }
        self.debrief = Some(debrief);
        self.touch();
        Ok(())
    }

    /// Builds the final memo from the three snapshots and closes the case.
    pub fn close(&mut self, input: CloseInput) -> Result<FinalMemo, CaseError> {
        if self.status != CaseStatus::EjecutadoPendienteDebrief {
            return Err(CaseError::NotExecuted);
        }
        let (Some(preparation), Some(analysis), Some(debrief)) =
            (&self.preparation, &self.analysis, &self.debrief)
        else {
            return Err(CaseError::SnapshotsIncomplete);
        };

        let memo = build_final_memo(preparation, analysis, debrief);
        self.final_memo = Some(memo.clone());
        self.confidence_end = Some(input.confidence_end);
        self.agreement_quality_result = Some(input.agreement_quality_result);
        self.agreement_quality_relationship = Some(input.agreement_quality_relationship);
        self.agreement_quality_sustainability = Some(input.agreement_quality_sustainability);
        self.status = CaseStatus::Cerrado;
        self.closed_at = Some(Utc::now());
        self.touch();

        Ok(memo)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
