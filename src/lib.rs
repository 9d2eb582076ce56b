//! EduBot
//!
//! Checks English sentences that use the verb "to be" and explains what is
//! wrong with them.
//!
//! This library provides:
//! - Sentence classification (type and tense)
//! - Structure and agreement validation with learner feedback
//! - A sample corpus and rule catalog
//! - Configuration management

pub mod config;
pub mod report;
pub mod samples;
pub mod validation;

pub use config::Config;
pub use validation::{ValidationResult, Violation, validate};
