//! Sentence and tense classification
//!
//! Both classifiers only look at surface patterns and run regardless of
//! whether the sentence is grammatical.

use super::patterns::{QUESTION_VERB_LEAD_RE, QUESTION_WH_LEAD_RE, VERB_PATTERNS};
use super::types::{SentenceType, Tense};

/// Classify a trimmed, non-empty sentence
///
/// Priority: question, then negative, then affirmative.
pub fn classify_sentence(sentence: &str) -> SentenceType {
    if is_question(sentence) {
        SentenceType::Question
    } else if VERB_PATTERNS.is_negative(sentence) {
        SentenceType::Negative
    } else if VERB_PATTERNS.is_affirmative(sentence) {
        SentenceType::Affirmative
    } else {
        SentenceType::Invalid
    }
}

/// Classify the tense of a sentence
///
/// Present wins over past when a sentence contains both.
pub fn classify_tense(sentence: &str) -> Tense {
    if VERB_PATTERNS.is_present(sentence) {
        Tense::Present
    } else if VERB_PATTERNS.is_past(sentence) {
        Tense::Past
    } else {
        Tense::Unknown
    }
}

fn is_question(sentence: &str) -> bool {
    sentence.ends_with('?')
        || QUESTION_VERB_LEAD_RE.is_match(sentence)
        || QUESTION_WH_LEAD_RE.is_match(sentence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_detection() {
        assert_eq!(classify_sentence("Are you a student?"), SentenceType::Question);
        assert_eq!(classify_sentence("is she happy"), SentenceType::Question);
        assert_eq!(classify_sentence("Where are you"), SentenceType::Question);
        assert_eq!(classify_sentence("You are here?"), SentenceType::Question);
        // a lead word needs trailing whitespace
        assert_eq!(classify_sentence("Island is big."), SentenceType::Affirmative);
    }

    #[test]
    fn test_negative_before_affirmative() {
        assert_eq!(classify_sentence("I am not a teacher."), SentenceType::Negative);
        assert_eq!(classify_sentence("She isn't happy."), SentenceType::Negative);
        assert_eq!(classify_sentence("I'm not sad."), SentenceType::Negative);
        assert_eq!(classify_sentence("They were not friends."), SentenceType::Negative);
        assert_eq!(classify_sentence("We are friends."), SentenceType::Affirmative);
        assert_eq!(classify_sentence("I have a car."), SentenceType::Invalid);
    }

    #[test]
    fn test_tense() {
        assert_eq!(classify_tense("I am a teacher."), Tense::Present);
        assert_eq!(classify_tense("You were a good student."), Tense::Past);
        assert_eq!(classify_tense("It wasn't cold."), Tense::Past);
        assert_eq!(classify_tense("We eat pizza."), Tense::Unknown);
        // both tenses present: present wins
        assert_eq!(classify_tense("I was sad but I am happy."), Tense::Present);
    }
}
