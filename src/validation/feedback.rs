//! Feedback shown to the student after each sentence.

use super::types::{SentenceType, Tense};
use super::violation::Violation;

pub const EMPTY_SENTENCE_FEEDBACK: &str = "❌ Please enter a sentence.";

/// Build the feedback line for a verdict
///
/// Failures echo the violated rule's own message so the student gets
/// something actionable rather than a generic "wrong".
pub fn synthesize(sentence_type: SentenceType, tense: Tense, violation: Option<&Violation>) -> String {
    match violation {
        None => format!("✅ Correct sentence in {} {}.", tense, sentence_type),
        Some(Violation::EmptySentence) => EMPTY_SENTENCE_FEEDBACK.to_string(),
        Some(violation) => format!("❌ Invalid sentence. {}.", violation),
    }
}
