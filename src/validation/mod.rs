//! Validation Engine
//!
//! Checks a sentence for correct use of the verb "to be": classification,
//! structural completeness, agreement and surface form.

pub mod agreement;
pub mod catalog;
pub mod classify;
pub mod engine;
pub mod feedback;
pub mod patterns;
pub mod structure;
pub mod types;
pub mod violation;

pub use catalog::{RuleEntry, RuleStage, catalog};
pub use engine::{ValidationResult, validate};
pub use types::{BeForm, NounNumber, Pronoun, SentenceType, Tense};
pub use violation::{Violation, ViolationKind};
