use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use log::info;

use edubot::config::{Command, Config, OutputFormat};
use edubot::report::{render_json, render_rule, render_text};
use edubot::samples::run_samples;
use edubot::validation::{catalog, validate};

fn main() -> Result<()> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    if let Some(path) = &config.config_file {
        info!("loaded config from {}", path.display());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &config.command {
        Command::Rules => {
            for (index, rule) in catalog().iter().enumerate() {
                writeln!(out, "{}", render_rule(index, rule))?;
            }
        }
        Command::Samples => print_samples(&mut out)?,
        Command::Check(sentences) if sentences.is_empty() => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line.context("failed to read from stdin")?;
                if line.trim().is_empty() {
                    continue;
                }
                check(&mut out, &config, &line)?;
            }
        }
        Command::Check(sentences) => {
            for sentence in sentences {
                check(&mut out, &config, sentence)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn check(out: &mut impl Write, config: &Config, sentence: &str) -> Result<()> {
    let result = validate(sentence);
    match config.format {
        OutputFormat::Text => writeln!(out, "{}", render_text(&result, config.follow_up))?,
        OutputFormat::Json => writeln!(out, "{}", render_json(sentence, &result)?)?,
    }
    Ok(())
}

fn print_samples(out: &mut impl Write) -> Result<()> {
    let report = run_samples();
    let mut current = None;

    for (sample, result) in &report.results {
        if current != Some(sample.category) {
            writeln!(out, "\n{}", sample.category.title())?;
            current = Some(sample.category);
        }
        let mark = if result.error_kind() == sample.expected {
            " "
        } else {
            "!"
        };
        writeln!(out, "{} {:<40} {}", mark, sample.sentence, result.feedback)?;
    }

    writeln!(
        out,
        "\n{}/{} samples matched",
        report.passed(),
        report.results.len()
    )?;
    if !report.all_passed() {
        anyhow::bail!("{} samples did not match", report.mismatches.len());
    }
    Ok(())
}
