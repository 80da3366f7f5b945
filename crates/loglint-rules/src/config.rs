//! Configuration for the problematic-logs rule.

use serde::Deserialize;

/// Options controlling which checks the problematic-logs rule runs and
/// which names it recognizes.
///
/// Constructed once with built-in defaults, optionally merged with
/// host-supplied overrides via [`LogOptions::apply`] before analysis
/// begins, and read-only thereafter. The word lists are never empty:
/// overrides append to `sensitive_words` and cannot touch
/// `log_functions`, so baseline coverage survives partial configuration.
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Flag messages that start with an uppercase letter.
    pub check_lowercase: bool,
    /// Flag messages containing non-ASCII letters.
    pub check_english: bool,
    /// Flag messages containing characters outside the allow-list.
    pub check_special: bool,
    /// Flag arguments that look like sensitive data.
    pub check_sensitive: bool,

    /// Names recognized as log emission calls (exact, case-sensitive).
    pub log_functions: Vec<String>,
    /// Keywords matched case-insensitively as substrings of identifiers.
    pub sensitive_words: Vec<String>,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            check_lowercase: true,
            check_english: true,
            check_special: true,
            check_sensitive: true,

            log_functions: [
                "Print", "Println", "Printf", "Sprint", "Sprintln", "Sprintf", "Info", "Infof",
                "Warn", "Warnf", "Error", "Errorf", "Debug", "Debugf", "Fatal", "Fatalln",
                "Fatalf", "Panic", "Panicf", "Panicln",
            ]
            .map(String::from)
            .to_vec(),
            sensitive_words: [
                "password", "pass", "token", "api_key", "apikey", "api-key", "secret", "jwt",
                "bearer",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

impl LogOptions {
    /// Reports whether `name` is a known logging function.
    #[must_use]
    pub fn is_log_function(&self, name: &str) -> bool {
        self.log_functions.iter().any(|f| f == name)
    }

    /// Reports whether `name` contains any configured sensitive term,
    /// case-insensitively.
    #[must_use]
    pub fn contains_sensitive_word(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.sensitive_words.iter().any(|w| name.contains(w))
    }

    /// Merges host-supplied overrides into these options.
    ///
    /// Toggles present in the override replace the current value
    /// wholesale; sensitive words are appended so the built-in defaults
    /// are never lost.
    pub fn apply(&mut self, overrides: LogOptionsOverride) {
        if let Some(v) = overrides.check_lowercase {
            self.check_lowercase = v;
        }
        if let Some(v) = overrides.check_english {
            self.check_english = v;
        }
        if let Some(v) = overrides.check_special {
            self.check_special = v;
        }
        if let Some(v) = overrides.check_sensitive {
            self.check_sensitive = v;
        }
        if let Some(words) = overrides.sensitive_words {
            self.sensitive_words.extend(words);
        }
    }
}

/// Host-supplied overrides for [`LogOptions`].
///
/// Decoded from the opaque `[rules.problematic-logs]` option table.
/// Unknown keys are rejected so a typo fails analyzer construction
/// instead of silently running with defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct LogOptionsOverride {
    /// Overrides `check_lowercase`.
    pub check_lowercase: Option<bool>,
    /// Overrides `check_english`.
    pub check_english: Option<bool>,
    /// Overrides `check_special`.
    pub check_special: Option<bool>,
    /// Overrides `check_sensitive`.
    pub check_sensitive: Option<bool>,
    /// Appended to the built-in sensitive words.
    pub sensitive_words: Option<Vec<String>>,
}

/// Splits a comma-separated word list, trimming whitespace around each
/// entry and dropping empty entries.
#[must_use]
pub fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

/// Errors decoding rule options.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    /// The opaque option table does not match the rule's option shape.
    #[error("invalid options for rule '{rule}': {source}")]
    Decode {
        /// Name of the rule whose options failed to decode.
        rule: &'static str,
        /// Underlying decode error.
        #[source]
        source: toml::de::Error,
    },
}
