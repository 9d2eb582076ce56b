//! Rule Tables
//!
//! Every pattern the validator matches against. Tables are compiled once on
//! first use and then shared read-only, so the validator can be called from
//! any number of threads without locking.
//!
//! Matching is case-insensitive and word-bounded unless a pattern says
//! otherwise (proper nouns are recognized by their capital letter). Within a
//! table, entries are evaluated top to bottom and the first match wins.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{BeForm, Pronoun};

// --- Verb forms ---

pub const PRESENT_AFFIRMATIVE: &str = r"(?i)\b(am|is|are|'m|'s|'re)\b";
pub const PRESENT_NEGATIVE: &str = r"(?i)\b(am\s+not|is\s+not|are\s+not|am\s+n't|is\s+n't|are\s+n't|isn't|aren't|'m\s+not|'s\s+not|'re\s+not)\b";
pub const PAST_AFFIRMATIVE: &str = r"(?i)\b(was|were)\b";
pub const PAST_NEGATIVE: &str =
    r"(?i)\b(was\s+not|were\s+not|was\s+n't|were\s+n't|wasn't|weren't)\b";

// --- Question leads ---

pub const QUESTION_VERB_LEAD: &str = r"(?i)^(am|is|are|was|were)\s+";
pub const QUESTION_WH_LEAD: &str = r"(?i)^(what|where|when|why|how|who)\s+";

// --- Subjects ---
//
// Fragments are composed into the subject-adjacency patterns below. The outer
// patterns are case-sensitive so that `PROPER_NOUN` only accepts capitalized
// words; every other fragment carries its own `(?i:...)` group. The regexes
// only propose a candidate in the `subject` group; `matches_with_subject`
// rejects candidates that cannot be subjects.

const PERSONAL_PRONOUN: &str = r"(?i:i|you|he|she|it|we|they)";
const STANDALONE_SUBJECT: &str = r"(?i:this|that|these|those|who|what|there|here)";
const DETERMINER_PHRASE: &str =
    r"(?i:the|a|an|this|that|these|those|my|your|his|her|its|our|their)\s+[A-Za-z]+";
const PROPER_NOUN: &str = r"[A-Z][a-z]+";
const PLURAL_NOUN: &str = r"[a-z]+s";
const BE_FORM: &str = r"(?i:(?:am|is|are|was|were)(?:n't)?)";
const CONTRACTED_BE: &str = r"'(?i:m|s|re)";

fn subject() -> String {
    format!(
        "(?P<subject>{}|{}|{}|{}|{})",
        DETERMINER_PHRASE, PERSONAL_PRONOUN, STANDALONE_SUBJECT, PROPER_NOUN, PLURAL_NOUN
    )
}

/// A subject directly followed by a form of "to be" (`The cat is`, `I'm`)
pub fn subject_before_verb_pattern() -> String {
    format!(r"\b{}(?:\s+{}\b|{}\b)", subject(), BE_FORM, CONTRACTED_BE)
}

/// A form of "to be" directly followed by a subject (`Are you`, `Is the cat`)
pub fn subject_after_verb_pattern() -> String {
    format!(r"\b{}(?:\s+(?i:not))?\s+{}\b", BE_FORM, subject())
}

// --- Sentence-initial auxiliary ---

pub const LEADING_BE: &str = r"(?i)^(?:am|is|are|was|were)(?:n't)?\b";
pub const LEADING_BE_ARTICLE: &str =
    r"(?i)^(?:am|is|are|was|were)(?:n't)?(?:\s+not)?\s+(?:a|an)\b";

/// A sentence-initial form of "to be" followed by a subject
pub fn leading_be_subject_pattern() -> String {
    format!(r"^{}(?:\s+(?i:not))?\s+{}\b", BE_FORM, subject())
}

// --- Number agreement ---

pub const PROPER_NOUN_BEFORE_ARE: &str = r"\b([A-Z][a-z]+)\s+((?i:are|were))\b";
pub const DETERMINED_NOUN_BEFORE_IS: &str =
    r"(?i)\b(?:the|these|those|my|your|his|her|its|our|their)\s+([a-z]+)\s+(is|was)\b";

// --- Surface form ---

pub const BE_WORD: &str = r"(?i)\b(am|is|are|was|were)\b";
pub const FIRST_WORD: &str = r"^([A-Za-z]+(?:'[A-Za-z]+)?)";
pub const TERMINAL_PUNCTUATION: &[char] = &['.', '!', '?'];

// --- Pronoun agreement ---

/// Pronoun / form pairs that never agree, in evaluation order
pub const FORBIDDEN_PAIRS: &[(Pronoun, BeForm)] = &[
    (Pronoun::I, BeForm::Is),
    (Pronoun::I, BeForm::Are),
    (Pronoun::I, BeForm::Were),
    (Pronoun::You, BeForm::Is),
    (Pronoun::You, BeForm::Am),
    (Pronoun::You, BeForm::Was),
    (Pronoun::He, BeForm::Am),
    (Pronoun::He, BeForm::Are),
    (Pronoun::He, BeForm::Were),
    (Pronoun::She, BeForm::Am),
    (Pronoun::She, BeForm::Are),
    (Pronoun::She, BeForm::Were),
    (Pronoun::It, BeForm::Am),
    (Pronoun::It, BeForm::Are),
    (Pronoun::It, BeForm::Were),
    (Pronoun::We, BeForm::Is),
    (Pronoun::We, BeForm::Am),
    (Pronoun::We, BeForm::Was),
    (Pronoun::They, BeForm::Is),
    (Pronoun::They, BeForm::Am),
    (Pronoun::They, BeForm::Was),
];

/// Position of the pronoun relative to the verb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordOrder {
    /// `I is`, anywhere in the sentence
    SubjectFirst,
    /// `Is I`, at the start of a question (optionally after a wh-word)
    VerbFirst,
}

pub fn pronoun_rule_pattern(pronoun: Pronoun, found: BeForm, order: WordOrder) -> String {
    match order {
        WordOrder::SubjectFirst => {
            format!(r"(?i)\b{}\s+{}\b", pronoun.as_str(), found.as_str())
        }
        WordOrder::VerbFirst => format!(
            r"(?i)^(?:(?:what|where|when|why|how|who)\s+)?{}\s+{}\b",
            found.as_str(),
            pronoun.as_str()
        ),
    }
}

/// A compiled entry of the pronoun agreement table
#[derive(Debug)]
pub struct PronounRule {
    pub pronoun: Pronoun,
    pub found: BeForm,
    pub order: WordOrder,
    pub regex: Regex,
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("rule table pattern must compile")
}

/// The four verb-form tables
#[derive(Debug)]
pub struct VerbPatterns {
    pub present_affirmative: Regex,
    pub present_negative: Regex,
    pub past_affirmative: Regex,
    pub past_negative: Regex,
}

impl VerbPatterns {
    fn compile() -> Self {
        Self {
            present_affirmative: compile(PRESENT_AFFIRMATIVE),
            present_negative: compile(PRESENT_NEGATIVE),
            past_affirmative: compile(PAST_AFFIRMATIVE),
            past_negative: compile(PAST_NEGATIVE),
        }
    }

    pub fn is_present(&self, sentence: &str) -> bool {
        self.present_affirmative.is_match(sentence) || self.present_negative.is_match(sentence)
    }

    pub fn is_past(&self, sentence: &str) -> bool {
        self.past_affirmative.is_match(sentence) || self.past_negative.is_match(sentence)
    }

    pub fn is_negative(&self, sentence: &str) -> bool {
        self.present_negative.is_match(sentence) || self.past_negative.is_match(sentence)
    }

    pub fn is_affirmative(&self, sentence: &str) -> bool {
        self.present_affirmative.is_match(sentence) || self.past_affirmative.is_match(sentence)
    }

    /// True if any form of "to be" appears
    pub fn any(&self, sentence: &str) -> bool {
        self.is_present(sentence) || self.is_past(sentence)
    }
}

pub static VERB_PATTERNS: Lazy<VerbPatterns> = Lazy::new(VerbPatterns::compile);

pub static QUESTION_VERB_LEAD_RE: Lazy<Regex> = Lazy::new(|| compile(QUESTION_VERB_LEAD));
pub static QUESTION_WH_LEAD_RE: Lazy<Regex> = Lazy::new(|| compile(QUESTION_WH_LEAD));

pub static SUBJECT_BEFORE_VERB_RE: Lazy<Regex> =
    Lazy::new(|| compile(&subject_before_verb_pattern()));
pub static SUBJECT_AFTER_VERB_RE: Lazy<Regex> =
    Lazy::new(|| compile(&subject_after_verb_pattern()));

pub static LEADING_BE_RE: Lazy<Regex> = Lazy::new(|| compile(LEADING_BE));
pub static LEADING_BE_ARTICLE_RE: Lazy<Regex> = Lazy::new(|| compile(LEADING_BE_ARTICLE));
pub static LEADING_BE_SUBJECT_RE: Lazy<Regex> =
    Lazy::new(|| compile(&leading_be_subject_pattern()));

pub static PROPER_NOUN_BEFORE_ARE_RE: Lazy<Regex> =
    Lazy::new(|| compile(PROPER_NOUN_BEFORE_ARE));
pub static DETERMINED_NOUN_BEFORE_IS_RE: Lazy<Regex> =
    Lazy::new(|| compile(DETERMINED_NOUN_BEFORE_IS));

pub static BE_WORD_RE: Lazy<Regex> = Lazy::new(|| compile(BE_WORD));
pub static FIRST_WORD_RE: Lazy<Regex> = Lazy::new(|| compile(FIRST_WORD));

/// Subject-first rules for every forbidden pair, then verb-first rules in the same order
pub static PRONOUN_RULES: Lazy<Vec<PronounRule>> = Lazy::new(|| {
    [WordOrder::SubjectFirst, WordOrder::VerbFirst]
        .into_iter()
        .flat_map(|order| {
            FORBIDDEN_PAIRS.iter().map(move |&(pronoun, found)| PronounRule {
                pronoun,
                found,
                order,
                regex: compile(&pronoun_rule_pattern(pronoun, found, order)),
            })
        })
        .collect()
});

// --- Word classes ---

/// Words that are capitalized at the start of a sentence without being names
const FUNCTION_WORDS: &[&str] = &[
    "am", "is", "are", "was", "were", "the", "a", "an", "this", "that", "these", "those", "my",
    "your", "his", "her", "its", "our", "their", "what", "where", "when", "why", "how", "who",
    "which", "whose", "there", "here", "not", "and", "but", "or", "so", "yes", "no", "do",
    "does", "did", "can", "could", "will", "would", "should", "shall", "may", "might", "must",
    "have", "has", "had",
];

const IRREGULAR_PLURALS: &[&str] = &[
    "people", "children", "men", "women", "mice", "feet", "teeth", "geese",
];

/// Words the subject fragments accept by shape that never act as a subject
const NON_SUBJECT_WORDS: &[&str] = &["what", "where", "when", "why", "how"];

/// The last word of a subject candidate is neither a form of "to be" nor a
/// question word (`is is`, `Where are`)
pub fn is_subject_candidate(candidate: &str) -> bool {
    let Some(head) = candidate.split_whitespace().next_back() else {
        return false;
    };

    BeForm::from_word(head).is_none() && !contains_ignore_case(NON_SUBJECT_WORDS, head)
}

/// True if `re` matches with an acceptable `subject` group.
///
/// A rejected candidate can overlap a valid match, so the search resumes one
/// character after the rejected match instead of after its end.
pub fn matches_with_subject(re: &Regex, text: &str) -> bool {
    let mut start = 0;

    while let Some(caps) = re.captures_at(text, start) {
        let Some(whole) = caps.get(0) else {
            return false;
        };
        match caps.name("subject") {
            Some(subject) if !is_subject_candidate(subject.as_str()) => {}
            _ => return true,
        }

        let step = text[whole.start()..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        start = whole.start() + step;
        if start > text.len() {
            return false;
        }
    }

    false
}

/// Words that, placed right before a noun, make it part of a larger subject
const SUBJECT_JOINERS: &[&str] = &[
    "and", "the", "a", "an", "this", "that", "these", "those", "my", "your", "his", "her",
    "its", "our", "their",
];

fn contains_ignore_case(list: &[&str], word: &str) -> bool {
    list.iter().any(|entry| entry.eq_ignore_ascii_case(word))
}

pub fn is_function_word(word: &str) -> bool {
    contains_ignore_case(FUNCTION_WORDS, word)
}

/// A capitalized word that is neither a pronoun nor a function word
pub fn is_proper_noun(word: &str) -> bool {
    let mut chars = word.chars();
    let capitalized = match chars.next() {
        Some(first) => first.is_ascii_uppercase(),
        None => false,
    };

    capitalized
        && word.len() > 1
        && chars.all(|c| c.is_ascii_lowercase())
        && Pronoun::from_word(word).is_none()
        && !is_function_word(word)
}

/// Trailing-`s` heuristic, plus a handful of irregular plurals
pub fn looks_plural(word: &str) -> bool {
    let lower = word.to_ascii_lowercase();
    if IRREGULAR_PLURALS.contains(&lower.as_str()) {
        return true;
    }

    lower.len() > 2
        && lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
}

pub fn is_subject_joiner(word: &str) -> bool {
    contains_ignore_case(SUBJECT_JOINERS, word)
}

/// The word immediately before byte offset `end`, stripped of punctuation
pub fn preceding_word(text: &str, end: usize) -> Option<&str> {
    text.get(..end)?
        .split_whitespace()
        .next_back()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
        .filter(|word| !word.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tables_compile() {
        Lazy::force(&VERB_PATTERNS);
        Lazy::force(&SUBJECT_BEFORE_VERB_RE);
        Lazy::force(&SUBJECT_AFTER_VERB_RE);
        Lazy::force(&LEADING_BE_SUBJECT_RE);
        assert_eq!(PRONOUN_RULES.len(), FORBIDDEN_PAIRS.len() * 2);
    }

    #[test]
    fn test_word_boundaries() {
        // "is" inside "this" must not count as a verb
        assert!(!VERB_PATTERNS.any("this island"));
        assert!(VERB_PATTERNS.any("this is"));
        assert!(VERB_PATTERNS.is_negative("She isn't here"));
        assert!(VERB_PATTERNS.is_present("I'm here"));
        assert!(VERB_PATTERNS.is_past("They WERE here"));
    }

    #[test]
    fn test_subject_adjacency() {
        assert!(SUBJECT_BEFORE_VERB_RE.is_match("The cat is brown."));
        assert!(SUBJECT_BEFORE_VERB_RE.is_match("i'm martin"));
        assert!(SUBJECT_BEFORE_VERB_RE.is_match("Cartagena is a big city."));
        assert!(SUBJECT_AFTER_VERB_RE.is_match("Are you a student?"));
        assert!(SUBJECT_AFTER_VERB_RE.is_match("Is the cat brown?"));
        assert!(!SUBJECT_BEFORE_VERB_RE.is_match("am happy"));
        assert!(!SUBJECT_AFTER_VERB_RE.is_match("am happy"));
    }

    #[test]
    fn test_subject_candidates() {
        assert!(is_subject_candidate("the cat"));
        assert!(is_subject_candidate("Who"));
        assert!(is_subject_candidate("students"));
        assert!(!is_subject_candidate("is"));
        assert!(!is_subject_candidate("Was"));
        assert!(!is_subject_candidate("Where"));
        assert!(!is_subject_candidate("the is"));
    }

    #[test]
    fn test_verbs_and_question_words_are_not_subjects() {
        for text in ["is is.", "was was.", "Where is?", "What was?", "Is is?"] {
            assert!(!matches_with_subject(&SUBJECT_BEFORE_VERB_RE, text), "{text}");
            assert!(!matches_with_subject(&SUBJECT_AFTER_VERB_RE, text), "{text}");
        }

        // the rejected "Where is" overlaps the accepted "is she"
        assert!(matches_with_subject(&SUBJECT_AFTER_VERB_RE, "Where is she?"));
        assert!(matches_with_subject(&SUBJECT_BEFORE_VERB_RE, "What is this? It is a pen."));
        assert!(matches_with_subject(&LEADING_BE_SUBJECT_RE, "Is Maria here?"));
        assert!(!matches_with_subject(&LEADING_BE_SUBJECT_RE, "Is is?"));
    }

    #[test]
    fn test_word_classes() {
        assert!(is_proper_noun("Maria"));
        assert!(!is_proper_noun("They"));
        assert!(!is_proper_noun("Where"));
        assert!(!is_proper_noun("maria"));
        assert!(looks_plural("cats"));
        assert!(looks_plural("children"));
        assert!(!looks_plural("glass"));
        assert!(!looks_plural("bus"));
        assert!(!looks_plural("is"));
    }

    #[test]
    fn test_preceding_word() {
        let text = "Maria and Ana are friends.";
        let start = text.find("Ana").unwrap();
        assert_eq!(preceding_word(text, start), Some("and"));
        assert_eq!(preceding_word(text, 0), None);
    }
}
