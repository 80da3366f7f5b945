//! Check command implementation.

use anyhow::{Context, Result};
use loglint_core::{Analyzer, Config};
use loglint_rules::{parse_word_list, LogOptionsOverride, ProblematicLogs};
use std::path::Path;

use crate::OutputFormat;

/// Toggle and word-list overrides taken from command-line flags.
///
/// Absent flags inherit the config-file value (or the built-in default),
/// so the flag path and the config path share one merge semantics.
#[derive(Debug, Default)]
pub struct CheckFlags {
    /// `--lowercase` flag value.
    pub lowercase: Option<bool>,
    /// `--english` flag value.
    pub english: Option<bool>,
    /// `--special` flag value.
    pub special: Option<bool>,
    /// `--sensitive` flag value.
    pub sensitive: Option<bool>,
    /// `--sensitive-words` flag value, comma-separated.
    pub sensitive_words: Option<String>,
}

impl CheckFlags {
    fn into_override(self) -> LogOptionsOverride {
        LogOptionsOverride {
            check_lowercase: self.lowercase,
            check_english: self.english,
            check_special: self.special,
            check_sensitive: self.sensitive,
            sensitive_words: self.sensitive_words.as_deref().map(parse_word_list),
        }
    }
}

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    exclude: Vec<String>,
    config_path: Option<&Path>,
    flags: CheckFlags,
) -> Result<()> {
    let config = resolve_config(path, config_path)?;

    let mut rule = match config.rule_options("problematic-logs") {
        Some(options) => ProblematicLogs::from_value(&options)
            .context("Failed to decode [rules.problematic-logs] options")?,
        None => ProblematicLogs::new(),
    };
    rule.apply(flags.into_override());

    let mut builder = Analyzer::builder().root(path).config(config).rule(rule);

    for pattern in exclude {
        builder = builder.exclude(pattern);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, format)?;

    // Exit with error code if there are errors
    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

/// Resolves the configuration: an explicit `--config` path, else
/// `<root>/loglint.toml` if present, else defaults.
fn resolve_config(root: &Path, explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()));
    }

    let default_path = root.join("loglint.toml");
    if default_path.exists() {
        tracing::info!("Using config: {}", default_path.display());
        return Config::from_file(&default_path)
            .with_context(|| format!("Failed to load config: {}", default_path.display()));
    }

    Ok(Config::default())
}
