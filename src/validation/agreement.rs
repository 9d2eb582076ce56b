//! Agreement & well-formedness rules
//!
//! Rules run in a fixed order and the first one that matches decides the
//! reported violation:
//!
//! 1. pronoun / verb mismatch (`I is`, then question order `is we`)
//! 2. number agreement (`Maria are`, `The cats is`)
//! 3. sentence-initial "to be" with no subject after it (`Is a teacher`)
//! 4. missing final punctuation
//! 5. question whose subject comes before the verb (`You are happy?`)
//! 6. two different adjacent forms of "to be" (`are is`)
//!
//! Several rules can match the same sentence; the order above is what makes
//! the reported message reproducible.

use super::patterns::{
    BE_WORD_RE, DETERMINED_NOUN_BEFORE_IS_RE, FIRST_WORD_RE, LEADING_BE_ARTICLE_RE,
    LEADING_BE_RE, LEADING_BE_SUBJECT_RE, PRONOUN_RULES, PROPER_NOUN_BEFORE_ARE_RE,
    TERMINAL_PUNCTUATION, WordOrder, is_proper_noun, is_subject_joiner, looks_plural,
    matches_with_subject, preceding_word,
};
use super::types::{BeForm, NounNumber, Pronoun};
use super::violation::Violation;

pub fn check_agreement(sentence: &str) -> Result<(), Violation> {
    check_pronoun_agreement(sentence)?;
    check_number_agreement(sentence)?;
    check_leading_auxiliary(sentence)?;
    check_terminal_punctuation(sentence)?;
    check_question_order(sentence)?;
    check_adjacent_forms(sentence)
}

fn check_pronoun_agreement(sentence: &str) -> Result<(), Violation> {
    for rule in PRONOUN_RULES.iter() {
        let fired = match rule.order {
            // "You and I are" is a compound subject, not "I are"
            WordOrder::SubjectFirst => rule.regex.find_iter(sentence).any(|m| {
                !preceding_word(sentence, m.start()).is_some_and(|w| w.eq_ignore_ascii_case("and"))
            }),
            WordOrder::VerbFirst => rule.regex.is_match(sentence),
        };

        if fired {
            return Err(Violation::PronounVerbMismatch {
                pronoun: rule.pronoun,
                found: rule.found,
                expected: rule.pronoun.agreeing_form(rule.found.tense()),
            });
        }
    }

    Ok(())
}

fn check_number_agreement(sentence: &str) -> Result<(), Violation> {
    for caps in PROPER_NOUN_BEFORE_ARE_RE.captures_iter(sentence) {
        let (Some(noun), Some(verb)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let Some(found) = BeForm::from_word(verb.as_str()) else {
            continue;
        };

        let joined = preceding_word(sentence, noun.start()).is_some_and(is_subject_joiner);
        if is_proper_noun(noun.as_str()) && !looks_plural(noun.as_str()) && !joined {
            return Err(number_mismatch(noun.as_str(), NounNumber::Singular, found));
        }
    }

    for caps in DETERMINED_NOUN_BEFORE_IS_RE.captures_iter(sentence) {
        let (Some(noun), Some(verb)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let Some(found) = BeForm::from_word(verb.as_str()) else {
            continue;
        };

        if looks_plural(noun.as_str()) {
            return Err(number_mismatch(noun.as_str(), NounNumber::Plural, found));
        }
    }

    Ok(())
}

fn number_mismatch(noun: &str, number: NounNumber, found: BeForm) -> Violation {
    Violation::NumberAgreementMismatch {
        noun: noun.to_string(),
        number,
        found,
        expected: number.agreeing_form(found.tense()),
    }
}

/// Stricter than the structural check: a sentence-initial auxiliary must be
/// followed by a subject, and an article does not count as one
fn check_leading_auxiliary(sentence: &str) -> Result<(), Violation> {
    if !LEADING_BE_RE.is_match(sentence) {
        return Ok(());
    }

    if LEADING_BE_ARTICLE_RE.is_match(sentence)
        || !matches_with_subject(&LEADING_BE_SUBJECT_RE, sentence)
    {
        return Err(Violation::MissingSubject);
    }

    Ok(())
}

fn check_terminal_punctuation(sentence: &str) -> Result<(), Violation> {
    if sentence.ends_with(TERMINAL_PUNCTUATION) {
        Ok(())
    } else {
        Err(Violation::MissingPunctuation)
    }
}

fn check_question_order(sentence: &str) -> Result<(), Violation> {
    if !sentence.ends_with('?') {
        return Ok(());
    }

    let Some(first) = FIRST_WORD_RE.captures(sentence).and_then(|caps| caps.get(1)) else {
        return Ok(());
    };

    // "Isn't she ...?" fronts the verb; "I'm ...?" does not
    let word = first.as_str();
    if word.to_ascii_lowercase().ends_with("n't") {
        return Ok(());
    }
    let base = word.split('\'').next().unwrap_or(word);
    if Pronoun::from_word(base).is_some() || is_proper_noun(base) {
        return Err(Violation::MalformedQuestion);
    }

    Ok(())
}

fn check_adjacent_forms(sentence: &str) -> Result<(), Violation> {
    let mut previous: Option<(BeForm, usize)> = None;

    for m in BE_WORD_RE.find_iter(sentence) {
        let Some(form) = BeForm::from_word(m.as_str()) else {
            continue;
        };

        if let Some((first, end)) = previous {
            let adjacent = sentence[end..m.start()].chars().all(char::is_whitespace);
            if adjacent && first != form {
                return Err(Violation::InconsistentVerbForm {
                    first,
                    second: form,
                });
            }
        }

        previous = Some((form, m.end()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::violation::ViolationKind;

    fn kind(sentence: &str) -> Option<ViolationKind> {
        check_agreement(sentence).err().map(|v| v.kind())
    }

    #[test]
    fn test_pronoun_mismatch_subject_first() {
        assert_eq!(
            check_agreement("I is a teacher."),
            Err(Violation::PronounVerbMismatch {
                pronoun: Pronoun::I,
                found: BeForm::Is,
                expected: BeForm::Am,
            })
        );
        assert_eq!(
            check_agreement("They was here."),
            Err(Violation::PronounVerbMismatch {
                pronoun: Pronoun::They,
                found: BeForm::Was,
                expected: BeForm::Were,
            })
        );
        assert_eq!(kind("She were sick."), Some(ViolationKind::PronounVerbMismatch));
        assert_eq!(kind("You and I are friends."), None);
    }

    #[test]
    fn test_pronoun_mismatch_verb_first() {
        assert_eq!(
            check_agreement("Are he tall?"),
            Err(Violation::PronounVerbMismatch {
                pronoun: Pronoun::He,
                found: BeForm::Are,
                expected: BeForm::Is,
            })
        );
        assert_eq!(kind("Where is we?"), Some(ViolationKind::PronounVerbMismatch));
        // only at the start of a question
        assert_eq!(kind("That is you."), None);
        assert_eq!(kind("What is your name?"), None);
    }

    #[test]
    fn test_number_agreement() {
        assert_eq!(
            check_agreement("The cats is brown."),
            Err(Violation::NumberAgreementMismatch {
                noun: "cats".to_string(),
                number: NounNumber::Plural,
                found: BeForm::Is,
                expected: BeForm::Are,
            })
        );
        assert_eq!(
            check_agreement("Maria were sick."),
            Err(Violation::NumberAgreementMismatch {
                noun: "Maria".to_string(),
                number: NounNumber::Singular,
                found: BeForm::Were,
                expected: BeForm::Was,
            })
        );
        assert_eq!(kind("Maria and Ana are friends."), None);
        assert_eq!(kind("They are friends."), None);
        assert_eq!(kind("Where are you?"), None);
        assert_eq!(kind("Dogs are friendly."), None);
        assert_eq!(kind("The glass is empty."), None);
    }

    #[test]
    fn test_leading_auxiliary() {
        assert_eq!(kind("Is a teacher."), Some(ViolationKind::MissingSubject));
        assert_eq!(kind("is a teacher"), Some(ViolationKind::MissingSubject));
        assert_eq!(kind("Is happy?"), Some(ViolationKind::MissingSubject));
        assert_eq!(kind("Is the cat brown?"), None);
        assert_eq!(kind("Am I a teacher?"), None);
        assert_eq!(kind("Isn't she happy?"), None);
    }

    #[test]
    fn test_punctuation_and_question_order() {
        assert_eq!(kind("She is happy"), Some(ViolationKind::MissingPunctuation));
        assert_eq!(kind("She is happy!"), None);
        assert_eq!(kind("You are a student?"), Some(ViolationKind::MalformedQuestion));
        assert_eq!(kind("Maria is sick?"), Some(ViolationKind::MalformedQuestion));
        assert_eq!(kind("Who is she?"), None);
    }

    #[test]
    fn test_adjacent_forms() {
        assert_eq!(
            check_agreement("They are is happy."),
            Err(Violation::InconsistentVerbForm {
                first: BeForm::Are,
                second: BeForm::Is,
            })
        );
        assert_eq!(kind("The dog was are here."), Some(ViolationKind::InconsistentVerbForm));
        assert_eq!(kind("What it is is a secret."), None);
    }

    #[test]
    fn test_rule_order() {
        // mismatch wins over missing punctuation
        assert_eq!(kind("I is a teacher"), Some(ViolationKind::PronounVerbMismatch));
        // missing subject wins over missing punctuation
        assert_eq!(kind("are a team"), Some(ViolationKind::MissingSubject));
        // mismatch wins over question order
        assert_eq!(kind("You is here?"), Some(ViolationKind::PronounVerbMismatch));
        assert_eq!(kind("I'm happy?"), Some(ViolationKind::MalformedQuestion));
    }
}
