//! Rule Catalog
//!
//! A flat, ordered listing of every rule table entry, for documentation and
//! for the `--rules` command.

use serde::Serialize;
use std::fmt;

use super::patterns::{
    BE_WORD, DETERMINED_NOUN_BEFORE_IS, FIRST_WORD, FORBIDDEN_PAIRS, LEADING_BE_ARTICLE,
    PAST_AFFIRMATIVE, PAST_NEGATIVE, PRESENT_AFFIRMATIVE, PRESENT_NEGATIVE,
    PROPER_NOUN_BEFORE_ARE, QUESTION_VERB_LEAD, QUESTION_WH_LEAD, WordOrder,
    leading_be_subject_pattern, pronoun_rule_pattern, subject_after_verb_pattern,
    subject_before_verb_pattern,
};
use super::violation::ViolationKind;

/// Pipeline stage a rule belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStage {
    Classification,
    Structure,
    Agreement,
}

impl fmt::Display for RuleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleStage::Classification => f.write_str("classification"),
            RuleStage::Structure => f.write_str("structure"),
            RuleStage::Agreement => f.write_str("agreement"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleEntry {
    pub stage: RuleStage,
    /// Violation reported when the rule fires; `None` for classifiers
    pub violation: Option<ViolationKind>,
    pub description: String,
    pub pattern: String,
}

impl RuleEntry {
    fn new(
        stage: RuleStage,
        violation: Option<ViolationKind>,
        description: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            stage,
            violation,
            description: description.into(),
            pattern: pattern.into(),
        }
    }
}

/// All rules, in the order the validator evaluates them
pub fn catalog() -> Vec<RuleEntry> {
    use RuleStage::*;

    let mut rules = vec![
        RuleEntry::new(Classification, None, "Question: verb first", QUESTION_VERB_LEAD),
        RuleEntry::new(Classification, None, "Question: wh-word first", QUESTION_WH_LEAD),
        RuleEntry::new(Classification, None, "Present negative", PRESENT_NEGATIVE),
        RuleEntry::new(Classification, None, "Past negative", PAST_NEGATIVE),
        RuleEntry::new(Classification, None, "Present affirmative", PRESENT_AFFIRMATIVE),
        RuleEntry::new(Classification, None, "Past affirmative", PAST_AFFIRMATIVE),
        RuleEntry::new(
            Structure,
            Some(ViolationKind::MissingVerb),
            "A form of TO BE must appear",
            "any verb-form pattern",
        ),
        RuleEntry::new(
            Structure,
            Some(ViolationKind::MissingSubject),
            "Subject directly before TO BE",
            subject_before_verb_pattern(),
        ),
        RuleEntry::new(
            Structure,
            Some(ViolationKind::MissingSubject),
            "Subject directly after TO BE",
            subject_after_verb_pattern(),
        ),
    ];

    for order in [WordOrder::SubjectFirst, WordOrder::VerbFirst] {
        rules.extend(FORBIDDEN_PAIRS.iter().map(|&(pronoun, found)| {
            let expected = pronoun.agreeing_form(found.tense());
            RuleEntry::new(
                Agreement,
                Some(ViolationKind::PronounVerbMismatch),
                format!("\"{}\" takes \"{}\", not \"{}\"", pronoun, expected, found),
                pronoun_rule_pattern(pronoun, found, order),
            )
        }));
    }

    rules.extend([
        RuleEntry::new(
            Agreement,
            Some(ViolationKind::NumberAgreementMismatch),
            "Singular proper noun + are/were",
            PROPER_NOUN_BEFORE_ARE,
        ),
        RuleEntry::new(
            Agreement,
            Some(ViolationKind::NumberAgreementMismatch),
            "Plural noun + is/was",
            DETERMINED_NOUN_BEFORE_IS,
        ),
        RuleEntry::new(
            Agreement,
            Some(ViolationKind::MissingSubject),
            "Leading TO BE followed by an article",
            LEADING_BE_ARTICLE,
        ),
        RuleEntry::new(
            Agreement,
            Some(ViolationKind::MissingSubject),
            "Leading TO BE must be followed by a subject",
            leading_be_subject_pattern(),
        ),
        RuleEntry::new(
            Agreement,
            Some(ViolationKind::MissingPunctuation),
            "Sentence ends with . ! or ?",
            r"[.!?]$",
        ),
        RuleEntry::new(
            Agreement,
            Some(ViolationKind::MalformedQuestion),
            "Question must not start with its subject",
            FIRST_WORD,
        ),
        RuleEntry::new(
            Agreement,
            Some(ViolationKind::InconsistentVerbForm),
            "No two different adjacent forms of TO BE",
            BE_WORD,
        ),
    ]);

    rules
}
