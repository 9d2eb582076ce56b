//! Validation Engine
//!
//! Single entry point tying the classifiers and rule stages together.

use log::{debug, trace};

use super::agreement::check_agreement;
use super::classify::{classify_sentence, classify_tense};
use super::feedback::synthesize;
use super::structure::check_structure;
use super::types::{SentenceType, Tense};
use super::violation::{Violation, ViolationKind};

/// Verdict for one sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub sentence_type: SentenceType,
    pub tense: Tense,
    /// First rule the sentence broke; `None` iff `is_valid`
    pub error: Option<Violation>,
    pub feedback: String,
}

impl ValidationResult {
    fn new(sentence_type: SentenceType, tense: Tense, error: Option<Violation>) -> Self {
        let feedback = synthesize(sentence_type, tense, error.as_ref());
        Self {
            is_valid: error.is_none(),
            sentence_type,
            tense,
            error,
            feedback,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn error_kind(&self) -> Option<ViolationKind> {
        self.error.as_ref().map(Violation::kind)
    }
}

/// Validate a sentence that should use the verb "to be"
///
/// Never fails: every input, including empty or whitespace-only text,
/// produces a verdict. The same input always produces the same result.
pub fn validate(sentence: &str) -> ValidationResult {
    let sentence = normalize(sentence);

    if sentence.is_empty() {
        return ValidationResult::new(
            SentenceType::Invalid,
            Tense::Unknown,
            Some(Violation::EmptySentence),
        );
    }

    let sentence_type = classify_sentence(&sentence);
    let tense = classify_tense(&sentence);
    trace!("classified {:?} as {} {}", sentence, tense, sentence_type);

    let error = first_violation(&sentence).err();
    if let Some(violation) = &error {
        debug!("{:?} rejected: {:?}", sentence, violation.kind());
    }

    ValidationResult::new(sentence_type, tense, error)
}

fn first_violation(sentence: &str) -> Result<(), Violation> {
    check_structure(sentence)?;
    check_agreement(sentence)
}

/// Trim, and fold typographic apostrophes into ASCII ones
fn normalize(sentence: &str) -> String {
    sentence.trim().replace('\u{2019}', "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sentence() {
        for input in ["", "   ", "\t\n"] {
            let result = validate(input);
            assert!(!result.is_valid);
            assert_eq!(result.sentence_type, SentenceType::Invalid);
            assert_eq!(result.tense, Tense::Unknown);
            assert_eq!(result.error, Some(Violation::EmptySentence));
            assert_eq!(result.feedback, "❌ Please enter a sentence.");
        }
    }

    #[test]
    fn test_valid_sentence() {
        let result = validate("  I am a teacher.  ");
        assert!(result.is_valid);
        assert_eq!(result.sentence_type, SentenceType::Affirmative);
        assert_eq!(result.tense, Tense::Present);
        assert_eq!(result.error_message(), None);
        assert_eq!(result.feedback, "✅ Correct sentence in present affirmative.");
    }

    #[test]
    fn test_type_and_tense_survive_invalid_verdict() {
        let result = validate("I is a teacher.");
        assert!(!result.is_valid);
        assert_eq!(result.sentence_type, SentenceType::Affirmative);
        assert_eq!(result.tense, Tense::Present);
        assert_eq!(result.error_kind(), Some(ViolationKind::PronounVerbMismatch));
    }

    #[test]
    fn test_typographic_apostrophe() {
        let result = validate("I’m Martin.");
        assert!(result.is_valid, "{:?}", result);
        assert_eq!(result.tense, Tense::Present);
    }
}
