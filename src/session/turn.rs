//! Turn processing
//!
//! Validation, analysis and report assembly for one submission. Nothing here
//! touches the session; the caller applies the returned outcome.

use super::error::ValidationError;
use super::state::SessionState;
use super::transcript::TurnRecord;
use crate::analysis::{
    self, render_banner, render_report, AnalysisResult, CaseLocale, ContentProvider,
};
use rand::rngs::StdRng;
use rand::Rng;

/// Result of a successful turn
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub record: TurnRecord,
    pub analysis: AnalysisResult,
    /// State the session moves to once the record is appended
    pub new_state: SessionState,
    pub first_turn: bool,
}

impl TurnOutcome {
    pub fn report(&self) -> &str {
        &self.record.report
    }
}

/// Builds reports; owns the randomness source for content picks
#[derive(Debug, Clone)]
pub struct TurnProcessor<R = StdRng> {
    content: ContentProvider<R>,
    casing: CaseLocale,
}

impl<R: Rng> TurnProcessor<R> {
    pub fn new(content: ContentProvider<R>, casing: CaseLocale) -> Self {
        Self { content, casing }
    }

    /// Process `question` against `state`.
    ///
    /// `first_turn` is true when the transcript is still empty; the report
    /// then opens with the role banner and the outcome locks the role.
    pub fn process_turn(
        &mut self,
        state: &SessionState,
        first_turn: bool,
        question: &str,
    ) -> Result<TurnOutcome, ValidationError> {
        if question.trim().is_empty() {
            return Err(ValidationError::EmptyQuestion);
        }

        let analysis = analysis::analyze(question, &mut self.content);
        let mut report = render_report(&analysis);

        let new_state = if first_turn {
            let locked = state.lock();
            if let Some(role) = locked.role() {
                report.insert_str(0, &render_banner(role.label, self.casing));
            }
            locked
        } else {
            *state
        };

        Ok(TurnOutcome {
            record: TurnRecord {
                question: question.to_string(),
                report,
            },
            analysis,
            new_state,
            first_turn,
        })
    }
}

impl TurnProcessor<StdRng> {
    pub fn seeded(seed: u64, casing: CaseLocale) -> Self {
        Self::new(ContentProvider::seeded(seed), casing)
    }

    pub fn from_entropy(casing: CaseLocale) -> Self {
        Self::new(ContentProvider::from_entropy(), casing)
    }
}
