//! Rendering of verdicts for the command line.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::validation::{RuleEntry, SentenceType, Tense, ValidationResult, ViolationKind};

pub const FOLLOW_UP_VALID: &str = "Do you want to try another sentence? (yes/no)";
pub const FOLLOW_UP_INVALID: &str =
    "Try again with a sentence using the verb TO BE in present or past tense.";

/// Serialized form of one verdict
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<'a> {
    pub sentence: &'a str,
    pub is_valid: bool,
    pub sentence_type: SentenceType,
    pub tense: Tense,
    pub error_kind: Option<ViolationKind>,
    pub error_message: Option<String>,
    pub feedback: &'a str,
}

impl<'a> Report<'a> {
    pub fn new(sentence: &'a str, result: &'a ValidationResult) -> Self {
        Self {
            sentence,
            is_valid: result.is_valid,
            sentence_type: result.sentence_type,
            tense: result.tense,
            error_kind: result.error_kind(),
            error_message: result.error_message(),
            feedback: &result.feedback,
        }
    }
}

/// The bot's reply: feedback, optionally followed by a prompt to continue
pub fn render_text(result: &ValidationResult, follow_up: bool) -> String {
    if !follow_up {
        return result.feedback.clone();
    }

    let prompt = if result.is_valid {
        FOLLOW_UP_VALID
    } else {
        FOLLOW_UP_INVALID
    };
    format!("{}\n\n{}", result.feedback, prompt)
}

/// One JSON object per line
pub fn render_json(sentence: &str, result: &ValidationResult) -> Result<String> {
    serde_json::to_string(&Report::new(sentence, result))
        .with_context(|| format!("failed to serialize verdict for {:?}", sentence))
}

pub fn render_rule(index: usize, rule: &RuleEntry) -> String {
    let violation = rule
        .violation
        .map(|kind| format!(" -> {:?}", kind))
        .unwrap_or_default();
    format!(
        "{:>3}. [{}] {}{}\n     {}",
        index + 1,
        rule.stage,
        rule.description,
        violation,
        rule.pattern
    )
}
