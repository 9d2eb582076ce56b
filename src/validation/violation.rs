//! Validation failures
//!
//! A violation is a domain outcome ("this sentence is ungrammatical"), never a
//! fault. Each variant renders a fixed message that is shown to the student.

use serde::Serialize;
use thiserror::Error;

use super::types::{BeForm, NounNumber, Pronoun};

/// The first rule a sentence broke
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("Empty sentence")]
    EmptySentence,

    #[error("Missing verb TO BE")]
    MissingVerb,

    #[error("Missing subject for the verb TO BE")]
    MissingSubject,

    #[error("\"{pronoun}\" + \"{found}\" is incorrect, use \"{expected}\"")]
    PronounVerbMismatch {
        pronoun: Pronoun,
        found: BeForm,
        expected: BeForm,
    },

    #[error("\"{noun}\" is {number}, so \"{found}\" is incorrect, use \"{expected}\"")]
    NumberAgreementMismatch {
        noun: String,
        number: NounNumber,
        found: BeForm,
        expected: BeForm,
    },

    #[error("Missing final punctuation (. ! or ?)")]
    MissingPunctuation,

    #[error("Malformed question: the verb TO BE must come before the subject")]
    MalformedQuestion,

    #[error("\"{first}\" and \"{second}\" cannot be used together")]
    InconsistentVerbForm { first: BeForm, second: BeForm },
}

/// Fieldless tag of a [`Violation`], for matching and serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViolationKind {
    EmptySentence,
    MissingVerb,
    MissingSubject,
    PronounVerbMismatch,
    NumberAgreementMismatch,
    MissingPunctuation,
    MalformedQuestion,
    InconsistentVerbForm,
}

impl Violation {
    pub fn kind(&self) -> ViolationKind {
        match self {
            Violation::EmptySentence => ViolationKind::EmptySentence,
            Violation::MissingVerb => ViolationKind::MissingVerb,
            Violation::MissingSubject => ViolationKind::MissingSubject,
            Violation::PronounVerbMismatch { .. } => ViolationKind::PronounVerbMismatch,
            Violation::NumberAgreementMismatch { .. } => ViolationKind::NumberAgreementMismatch,
            Violation::MissingPunctuation => ViolationKind::MissingPunctuation,
            Violation::MalformedQuestion => ViolationKind::MalformedQuestion,
            Violation::InconsistentVerbForm { .. } => ViolationKind::InconsistentVerbForm,
        }
    }
}
