//! Linguistic analysis of a submitted text
//!
//! Placeholder for a model-generated reply: a handful of statistics plus a
//! random challenge and bonus line, rendered as a fixed French report.

mod content;
mod report;
pub mod text;

pub use content::{ContentPool, ContentProvider};
pub use report::{render_banner, render_report, CaseLocale};

use rand::Rng;
use serde::Serialize;

/// Everything the report shows for one text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub length: usize,
    pub word_count: usize,
    pub vowel_count: usize,
    pub consonant_count: usize,
    pub longest_word: String,
    pub shortest_word: String,
    pub challenge: String,
    pub bonus: String,
}

/// Analyze `input`, drawing one challenge then one bonus from `content`
pub fn analyze<R: Rng>(input: &str, content: &mut ContentProvider<R>) -> AnalysisResult {
    AnalysisResult {
        length: text::length(input),
        word_count: text::word_count(input),
        vowel_count: text::vowel_count(input),
        consonant_count: text::consonant_count(input),
        longest_word: text::longest_word(input).to_string(),
        shortest_word: text::shortest_word(input).to_string(),
        challenge: content.pick(ContentPool::Challenges).to_string(),
        bonus: content.pick(ContentPool::Bonuses).to_string(),
    }
}
