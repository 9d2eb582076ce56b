//! Grammar Types
//!
//! Small closed vocabularies the rule tables are written in.

use serde::Serialize;
use std::fmt;

/// Kind of sentence detected from its surface form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentenceType {
    Affirmative,
    Negative,
    Question,
    Invalid,
}

impl SentenceType {
    pub fn as_str(self) -> &'static str {
        match self {
            SentenceType::Affirmative => "affirmative",
            SentenceType::Negative => "negative",
            SentenceType::Question => "question",
            SentenceType::Invalid => "invalid",
        }
    }
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verb tense of the "to be" form found in a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    Present,
    Past,
    Unknown,
}

impl Tense {
    pub fn as_str(self) -> &'static str {
        match self {
            Tense::Present => "present",
            Tense::Past => "past",
            Tense::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A full (non-contracted) form of the verb "to be"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BeForm {
    Am,
    Is,
    Are,
    Was,
    Were,
}

impl BeForm {
    pub const ALL: [BeForm; 5] = [BeForm::Am, BeForm::Is, BeForm::Are, BeForm::Was, BeForm::Were];

    pub fn as_str(self) -> &'static str {
        match self {
            BeForm::Am => "am",
            BeForm::Is => "is",
            BeForm::Are => "are",
            BeForm::Was => "was",
            BeForm::Were => "were",
        }
    }

    pub fn tense(self) -> Tense {
        match self {
            BeForm::Am | BeForm::Is | BeForm::Are => Tense::Present,
            BeForm::Was | BeForm::Were => Tense::Past,
        }
    }

    /// Case-insensitive lookup of a single word
    pub fn from_word(word: &str) -> Option<Self> {
        BeForm::ALL
            .into_iter()
            .find(|form| form.as_str().eq_ignore_ascii_case(word))
    }
}

impl fmt::Display for BeForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Personal pronouns in subject position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Pronoun {
    I,
    You,
    He,
    She,
    It,
    We,
    They,
}

impl Pronoun {
    pub const ALL: [Pronoun; 7] = [
        Pronoun::I,
        Pronoun::You,
        Pronoun::He,
        Pronoun::She,
        Pronoun::It,
        Pronoun::We,
        Pronoun::They,
    ];

    /// Lowercase spelling, as used inside case-insensitive patterns
    pub fn as_str(self) -> &'static str {
        match self {
            Pronoun::I => "i",
            Pronoun::You => "you",
            Pronoun::He => "he",
            Pronoun::She => "she",
            Pronoun::It => "it",
            Pronoun::We => "we",
            Pronoun::They => "they",
        }
    }

    /// Capitalized spelling, as shown to the student
    pub fn label(self) -> &'static str {
        match self {
            Pronoun::I => "I",
            Pronoun::You => "You",
            Pronoun::He => "He",
            Pronoun::She => "She",
            Pronoun::It => "It",
            Pronoun::We => "We",
            Pronoun::They => "They",
        }
    }

    pub fn from_word(word: &str) -> Option<Self> {
        Pronoun::ALL
            .into_iter()
            .find(|pronoun| pronoun.as_str().eq_ignore_ascii_case(word))
    }

    /// The form of "to be" this pronoun takes in the given tense
    pub fn agreeing_form(self, tense: Tense) -> BeForm {
        match (self, tense) {
            (Pronoun::I, Tense::Past) => BeForm::Was,
            (Pronoun::I, _) => BeForm::Am,
            (Pronoun::He | Pronoun::She | Pronoun::It, Tense::Past) => BeForm::Was,
            (Pronoun::He | Pronoun::She | Pronoun::It, _) => BeForm::Is,
            (Pronoun::You | Pronoun::We | Pronoun::They, Tense::Past) => BeForm::Were,
            (Pronoun::You | Pronoun::We | Pronoun::They, _) => BeForm::Are,
        }
    }
}

impl fmt::Display for Pronoun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Grammatical number of a noun subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NounNumber {
    Singular,
    Plural,
}

impl NounNumber {
    /// The form of "to be" a noun of this number takes in the given tense
    pub fn agreeing_form(self, tense: Tense) -> BeForm {
        match (self, tense) {
            (NounNumber::Singular, Tense::Past) => BeForm::Was,
            (NounNumber::Singular, _) => BeForm::Is,
            (NounNumber::Plural, Tense::Past) => BeForm::Were,
            (NounNumber::Plural, _) => BeForm::Are,
        }
    }
}

impl fmt::Display for NounNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NounNumber::Singular => f.write_str("singular"),
            NounNumber::Plural => f.write_str("plural"),
        }
    }
}
