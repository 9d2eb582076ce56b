//! Configuration management for edubot.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config file
//!
//! Command-line flags win over the config file, which wins over defaults.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Command-line arguments for edubot
#[derive(Debug, Default, Parser)]
#[command(name = "edubot")]
#[command(about = "Checks English sentences that use the verb TO BE")]
#[command(version)]
pub struct Args {
    /// Sentences to check; stdin is read line by line when none are given
    pub sentences: Vec<String>,

    #[arg(long, value_enum, help = "Output format (text, json)")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Run the built-in sample sentences and report mismatches")]
    pub samples: bool,

    #[arg(long, help = "List every rule in evaluation order")]
    pub rules: bool,

    #[arg(long, help = "Do not append the follow-up prompt to text output")]
    pub no_follow_up: bool,

    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Contents of the config file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub format: Option<OutputFormat>,
    pub log_level: Option<String>,
    pub follow_up: Option<bool>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

/// What the binary should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Check the given sentences, or stdin when empty
    Check(Vec<String>),
    Samples,
    Rules,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,
    pub format: OutputFormat,
    pub follow_up: bool,
    pub log_level: String,
    /// Config file that was loaded, if any
    pub config_file: Option<PathBuf>,
}

impl Config {
    /// Create configuration from command-line arguments and the config file
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let config_file = match &args.config {
            Some(path) => Some(path.clone()),
            None => default_config_path().filter(|path| path.is_file()),
        };

        let file = match &config_file {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        let mut config = Self::merge(args, file);
        config.config_file = config_file;
        Ok(config)
    }

    /// Apply precedence: flags, then file, then defaults
    pub fn merge(args: Args, file: FileConfig) -> Self {
        let command = if args.rules {
            Command::Rules
        } else if args.samples {
            Command::Samples
        } else {
            Command::Check(args.sentences)
        };

        Config {
            command,
            format: args.format.or(file.format).unwrap_or_default(),
            follow_up: !args.no_follow_up && file.follow_up.unwrap_or(true),
            log_level: args
                .log_level
                .or(file.log_level)
                .unwrap_or_else(|| "warn".to_string()),
            config_file: None,
        }
    }
}

/// `<config dir>/edubot/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("edubot").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::merge(Args::default(), FileConfig::default());
        assert_eq!(config.command, Command::Check(Vec::new()));
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.follow_up);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_flags_override_file() {
        let args = Args::parse_from(["edubot", "--format", "json", "--log-level", "debug"]);
        let file = FileConfig {
            format: Some(OutputFormat::Text),
            log_level: Some("info".to_string()),
            follow_up: Some(false),
        };

        let config = Config::merge(args, file);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, "debug");
        assert!(!config.follow_up);
    }

    #[test]
    fn test_rules_take_precedence_over_samples() {
        let args = Args::parse_from(["edubot", "--samples", "--rules"]);
        assert_eq!(Config::merge(args, FileConfig::default()).command, Command::Rules);

        let args = Args::parse_from(["edubot", "I am here.", "You are there."]);
        assert_eq!(
            Config::merge(args, FileConfig::default()).command,
            Command::Check(vec!["I am here.".to_string(), "You are there.".to_string()])
        );
    }
}
