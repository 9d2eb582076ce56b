//! Structural checks: a form of "to be" and a subject next to it.

use super::patterns::{
    SUBJECT_AFTER_VERB_RE, SUBJECT_BEFORE_VERB_RE, VERB_PATTERNS, matches_with_subject,
};
use super::violation::Violation;

pub fn check_structure(sentence: &str) -> Result<(), Violation> {
    if !VERB_PATTERNS.any(sentence) {
        return Err(Violation::MissingVerb);
    }

    if !has_subject(sentence) {
        return Err(Violation::MissingSubject);
    }

    Ok(())
}

/// A subject must sit directly before or after a form of "to be"
fn has_subject(sentence: &str) -> bool {
    matches_with_subject(&SUBJECT_BEFORE_VERB_RE, sentence)
        || matches_with_subject(&SUBJECT_AFTER_VERB_RE, sentence)
}
