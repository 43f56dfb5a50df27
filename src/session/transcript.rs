//! Append-only turn log

use serde::Serialize;
use std::fmt;

/// One question and the report generated for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnRecord {
    pub question: String,
    pub report: String,
}

/// Renders the `== User:` / `== Serveur:` block clients parse transcripts by
impl fmt::Display for TurnRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== User:")?;
        writeln!(f, "{}", self.question)?;
        writeln!(f, "== Serveur:")?;
        writeln!(f, "{}", self.report)
    }
}

/// Turns in submission order. No removal or editing API exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    turns: Vec<TurnRecord>,
}

impl Transcript {
    pub(super) fn push(&mut self, record: TurnRecord) {
        self.turns.push(record);
    }

    #[cfg(test)]
    pub fn turns(&self) -> &[TurnRecord] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    #[cfg(test)]
    pub fn last(&self) -> Option<&TurnRecord> {
        self.turns.last()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.turns.iter().try_for_each(|turn| write!(f, "{turn}"))
    }
}
