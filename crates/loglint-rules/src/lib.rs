//! # loglint-rules
//!
//! Built-in lint rules for loglint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | LL001 | `problematic-logs` | Flags log messages with bad capitalization, non-English text, special characters, or sensitive data |
//!
//! ## Usage
//!
//! ```ignore
//! use loglint_core::Analyzer;
//! use loglint_rules::ProblematicLogs;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(ProblematicLogs::new())
//!     .build()?;
//! ```
//!
//! A host that carries an opaque configuration instead constructs the
//! rule set through [`rules_from_config`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod checks;
mod config;
mod problematic_logs;

pub use config::{parse_word_list, LogOptions, LogOptionsOverride, OptionsError};
pub use problematic_logs::ProblematicLogs;

/// Re-export core types for convenience.
pub use loglint_core::{Rule, RuleBox, Severity, Violation};

/// Plugin entry point: builds the rule set from host configuration.
///
/// Decodes the opaque `[rules.problematic-logs]` option table into the
/// rule's configuration shape, applies it over the built-in defaults,
/// and returns the analysis pass.
///
/// # Errors
///
/// Returns an error if the option table does not decode; the host is
/// expected to abort the run rather than proceed with partial
/// configuration.
pub fn rules_from_config(config: &loglint_core::Config) -> Result<Vec<RuleBox>, OptionsError> {
    let rule = match config.rule_options(problematic_logs::NAME) {
        Some(options) => ProblematicLogs::from_value(&options)?,
        None => ProblematicLogs::new(),
    };
    Ok(vec![Box::new(rule)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_defaults_without_rule_section() {
        let config = loglint_core::Config::default();
        let rules = rules_from_config(&config).expect("builds");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].name(), "problematic-logs");
        assert_eq!(rules[0].code(), "LL001");
    }

    #[test]
    fn factory_decodes_rule_options() {
        let config = loglint_core::Config::parse(
            "[rules.problematic-logs]\ncheck-special = false\n",
        )
        .expect("parses");
        let rules = rules_from_config(&config).expect("builds");
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn factory_rejects_malformed_options() {
        let config = loglint_core::Config::parse(
            "[rules.problematic-logs]\ncheck-specail = false\n",
        )
        .expect("parses");
        assert!(rules_from_config(&config).is_err());
    }
}
