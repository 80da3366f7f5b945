//! Rule that flags problematic logging statements.
//!
//! # Rationale
//!
//! Log output is easiest to search and aggregate when messages follow a
//! consistent shape: lowercase start, English text, no decoration. Logging
//! variables whose names suggest credentials is a common way secrets leak
//! into log storage.
//!
//! # Detected Patterns
//!
//! - `log.Println("Hello World")`: message starts with an uppercase letter
//! - `logger.Info("запуск сервера")`: message contains non-English letters
//! - `log.Print("hello world!")`: message contains special characters
//! - `logger.Info("user password: " + password)`: argument carries
//!   potentially sensitive data
//!
//! Only calls through a selector are considered: a method call or a
//! qualified path call. A bare `Println("...")` is some local function,
//! not a logging call.
//!
//! # Configuration
//!
//! See [`LogOptions`]: one toggle per check, plus an appendable
//! sensitive-word list.

use crate::checks::{
    classify_arg, has_special_chars, is_english_only, lowercase_first, starts_with_uppercase,
    strip_special_chars, ArgShape,
};
use crate::config::{LogOptions, LogOptionsOverride, OptionsError};
use loglint_core::{FileContext, Location, Rule, Severity, Suggestion, TextEdit, Violation};
use syn::punctuated::Punctuated;
use syn::visit::Visit;
use syn::{Expr, ExprCall, ExprLit, ExprMethodCall, Lit, LitStr, Token};

/// Rule code for problematic-logs.
pub const CODE: &str = "LL001";

/// Rule name for problematic-logs.
pub const NAME: &str = "problematic-logs";

/// Flags log messages with bad capitalization, non-English text, special
/// characters, or arguments that look like sensitive data.
#[derive(Debug, Clone)]
pub struct ProblematicLogs {
    /// Effective rule options.
    pub options: LogOptions,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ProblematicLogs {
    fn default() -> Self {
        Self::new()
    }
}

impl ProblematicLogs {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: LogOptions::default(),
            severity: Severity::Warning,
        }
    }

    /// Replaces the rule options.
    #[must_use]
    pub fn with_options(mut self, options: LogOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Merges host-supplied overrides into the rule options.
    pub fn apply(&mut self, overrides: LogOptionsOverride) {
        self.options.apply(overrides);
    }

    /// Builds the rule from an opaque option table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table does not decode into the rule's
    /// option shape; the caller is expected to abort analyzer
    /// construction rather than run with partial configuration.
    pub fn from_value(value: &toml::Value) -> Result<Self, OptionsError> {
        let overrides: LogOptionsOverride =
            value
                .clone()
                .try_into()
                .map_err(|source| OptionsError::Decode { rule: NAME, source })?;
        tracing::debug!("applying {NAME} option overrides: {overrides:?}");

        let mut rule = Self::new();
        rule.apply(overrides);
        Ok(rule)
    }
}

impl Rule for ProblematicLogs {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Flags log messages with bad capitalization, non-English text, special characters, or sensitive data"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, ast: &syn::File) -> Vec<Violation> {
        let mut visitor = LogCallVisitor {
            ctx,
            rule: self,
            violations: Vec::new(),
        };

        visitor.visit_file(ast);
        visitor.violations
    }
}

struct LogCallVisitor<'a> {
    ctx: &'a FileContext<'a>,
    rule: &'a ProblematicLogs,
    violations: Vec<Violation>,
}

impl<'ast> Visit<'ast> for LogCallVisitor<'_> {
    fn visit_expr_method_call(&mut self, node: &'ast ExprMethodCall) {
        self.check_log_call(&node.method.to_string(), &node.args);
        syn::visit::visit_expr_method_call(self, node);
    }

    fn visit_expr_call(&mut self, node: &'ast ExprCall) {
        // Bare identifier calls are never logging calls; only a
        // qualified path (e.g. `log::Println`) counts as a selector.
        if let Some(name) = qualified_callee(&node.func) {
            self.check_log_call(&name, &node.args);
        }
        syn::visit::visit_expr_call(self, node);
    }
}

impl LogCallVisitor<'_> {
    fn check_log_call(&mut self, name: &str, args: &Punctuated<Expr, Token![,]>) {
        if !self.rule.options.is_log_function(name) {
            return;
        }

        if args.is_empty() {
            return;
        }

        // Check the first argument as a log message.
        if let Some(Expr::Lit(ExprLit {
            lit: Lit::Str(lit), ..
        })) = args.first()
        {
            self.validate_message(lit);
        }

        // Check all arguments for sensitive data.
        if self.rule.options.check_sensitive {
            for arg in args {
                self.scan_sensitive(arg);
            }
        }
    }

    fn validate_message(&mut self, lit: &LitStr) {
        let msg = lit.value();
        if msg.is_empty() {
            return;
        }

        let span = lit.span();
        let (lit_start, lit_end) = self.ctx.span_range(span);
        let interior = cooked_interior(lit, lit_start, lit_end);
        let pos = span.start();
        let location = Location::new(self.ctx.relative_path.clone(), pos.line, pos.column + 1)
            .with_span(lit_start, lit_end - lit_start);
        let options = &self.rule.options;

        if options.check_lowercase && starts_with_uppercase(&msg) {
            let fixed = lowercase_first(&msg);
            let mut violation = Violation::new(
                CODE,
                NAME,
                self.rule.severity,
                location.clone(),
                "log message should start with lowercase letter",
            );
            if let Some((start, end)) = interior {
                violation = violation.with_suggestion(Suggestion::with_edit(
                    "convert first letter to lowercase",
                    TextEdit::new(start, end, fixed.escape_debug().to_string()),
                ));
            }
            self.violations.push(violation);
        }

        if options.check_english && !is_english_only(&msg) {
            self.violations.push(Violation::new(
                CODE,
                NAME,
                self.rule.severity,
                location.clone(),
                "log message should contain only english letters",
            ));
        }

        if options.check_special && has_special_chars(&msg) {
            let fixed = strip_special_chars(&msg);
            let mut violation = Violation::new(
                CODE,
                NAME,
                self.rule.severity,
                location.clone(),
                "log message should not contain special characters",
            );
            if let Some((start, end)) = interior {
                violation = violation.with_suggestion(Suggestion::with_edit(
                    "remove special characters",
                    TextEdit::new(start, end, fixed.escape_debug().to_string()),
                ));
            }
            self.violations.push(violation);
        }
    }

    fn scan_sensitive(&mut self, expr: &Expr) {
        match classify_arg(expr) {
            ArgShape::Ident(ident) => {
                if self
                    .rule
                    .options
                    .contains_sensitive_word(&ident.to_string())
                {
                    let span = ident.span();
                    let (start, end) = self.ctx.span_range(span);
                    let pos = span.start();
                    self.violations.push(Violation::new(
                        CODE,
                        NAME,
                        self.rule.severity,
                        Location::new(self.ctx.relative_path.clone(), pos.line, pos.column + 1)
                            .with_span(start, end - start),
                        "logs should not contain potentially sensitive data",
                    ));
                }
            }
            ArgShape::Concat(left, right) => {
                self.scan_sensitive(left);
                self.scan_sensitive(right);
            }
            ArgShape::Other => {}
        }
    }
}

/// Extracts the callee name from a qualified path call.
///
/// Returns the last segment of a multi-segment path (`log::Println` →
/// `Println`); single-segment paths and non-path callees yield `None`.
fn qualified_callee(func: &Expr) -> Option<String> {
    let Expr::Path(path) = func else {
        return None;
    };
    if path.qself.is_some() || path.path.segments.len() < 2 {
        return None;
    }
    path.path.segments.last().map(|seg| seg.ident.to_string())
}

/// Byte range of the literal's interior, excluding the quotes.
///
/// Only plain cooked `"…"` literals qualify; raw strings and suffixed
/// literals get diagnostics without fixes, since their interior offsets
/// do not follow the one-byte-quote shape.
fn cooked_interior(lit: &LitStr, start: usize, end: usize) -> Option<(usize, usize)> {
    let token = lit.token().to_string();
    if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
        Some((start + 1, end - 1))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn check_rule(rule: &ProblematicLogs, code: &str) -> Vec<Violation> {
        let ast = syn::parse_file(code).expect("Failed to parse");
        let ctx = FileContext {
            path: Path::new("test.rs"),
            content: code,
            relative_path: PathBuf::from("test.rs"),
        };
        rule.check(&ctx, &ast)
    }

    fn check_code(code: &str) -> Vec<Violation> {
        check_rule(&ProblematicLogs::new(), code)
    }

    /// Applies the violation's first suggested edit to the source.
    fn apply_first_edit(code: &str, violation: &Violation) -> String {
        let edit = &violation.suggestions[0].edits[0];
        edit.apply(code).expect("edit applies")
    }

    #[test]
    fn detects_uppercase_start() {
        let code = r#"
fn startup() {
    log.Println("Hello World");
}
"#;
        let violations = check_code(code);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, CODE);
        assert_eq!(violations[0].severity, Severity::Warning);
        assert!(violations[0]
            .message
            .contains("start with lowercase letter"));

        let edit = &violations[0].suggestions[0].edits[0];
        assert_eq!(&code[edit.start..edit.end], "Hello World");
        assert_eq!(edit.new_text, "hello World");
    }

    #[test]
    fn uppercase_fix_is_idempotent() {
        let code = r#"
fn startup() {
    log.Println("Hello World");
}
"#;
        let violations = check_code(code);
        let fixed = apply_first_edit(code, &violations[0]);
        assert!(fixed.contains("\"hello World\""));
        assert!(check_code(&fixed).is_empty());
    }

    #[test]
    fn accented_first_letter_is_lowercased() {
        let code = r#"
fn startup() {
    log.Println("École");
}
"#;
        let violations = check_code(code);
        // uppercase start plus non-ASCII letters
        assert_eq!(violations.len(), 2);
        let edit = &violations[0].suggestions[0].edits[0];
        assert!(edit.new_text.starts_with('é'));
    }

    #[test]
    fn detects_non_english_message() {
        let violations = check_code(
            r#"
fn startup() {
    logger.Info("запуск сервера");
}
"#,
        );
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("only english letters"));
        assert!(violations[0].suggestions.is_empty());
    }

    #[test]
    fn detects_special_characters() {
        let code = r#"
fn startup() {
    log.Print("hello world!");
}
"#;
        let violations = check_code(code);
        assert_eq!(violations.len(), 1);
        assert!(violations[0]
            .message
            .contains("not contain special characters"));

        let edit = &violations[0].suggestions[0].edits[0];
        assert_eq!(&code[edit.start..edit.end], "hello world!");
        assert_eq!(edit.new_text, "hello world");

        let fixed = apply_first_edit(code, &violations[0]);
        assert!(check_code(&fixed).is_empty());
    }

    #[test]
    fn percent_placeholders_are_allowed() {
        let violations = check_code(
            r#"
fn report() {
    log.Printf("served %d requests");
}
"#,
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn valid_message_yields_nothing() {
        let violations = check_code(
            r#"
fn startup() {
    log.Printf("valid string");
}
"#,
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn one_message_can_trip_every_check() {
        let violations = check_code(
            r#"
fn startup() {
    log.Println("Привет!");
}
"#,
        );
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn empty_message_is_skipped() {
        let violations = check_code(
            r#"
fn startup() {
    log.Println("");
}
"#,
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn non_string_first_argument_is_skipped() {
        let violations = check_code(
            r#"
fn startup() {
    log.Println(42);
}
"#,
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn raw_literal_reports_without_fix() {
        let violations = check_code(
            r#"
fn startup() {
    log.Println(r"Hello World");
}
"#,
        );
        assert_eq!(violations.len(), 1);
        assert!(violations[0].suggestions.is_empty());
    }

    #[test]
    fn bare_call_is_not_a_log_call() {
        let violations = check_code(
            r#"
fn startup() {
    Println("Hello World");
}
"#,
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn qualified_path_call_is_a_log_call() {
        let violations = check_code(
            r#"
fn startup() {
    log::Println("Hello World");
}
"#,
        );
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn unknown_method_name_is_ignored() {
        let violations = check_code(
            r#"
fn startup() {
    printer.Printer("Hello World");
    log.println("Hello World");
}
"#,
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn detects_sensitive_identifier_in_concat() {
        let violations = check_code(
            r#"
fn login(password: &str) {
    zap.L().Info("user password: " + password);
}
"#,
        );
        assert_eq!(violations.len(), 1);
        assert!(violations[0]
            .message
            .contains("potentially sensitive data"));
        assert!(violations[0].suggestions.is_empty());
    }

    #[test]
    fn concat_reports_once_per_matching_leaf() {
        let violations = check_code(
            r#"
fn login(password: &str, token: &str, user: &str) {
    log.Println(user + password + token);
}
"#,
        );
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn sensitive_identifier_as_message_argument() {
        let violations = check_code(
            r#"
fn login(password: &str) {
    log.Println(password);
}
"#,
        );
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn sensitive_scan_looks_through_reference() {
        let violations = check_code(
            r#"
fn login(api_key: String) {
    logger.Error("key: ".to_string() + &api_key);
}
"#,
        );
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn sensitive_scan_covers_every_argument() {
        let violations = check_code(
            r#"
fn login(user_token: &str) {
    zap.L().Info("validated", user_token);
}
"#,
        );
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn formatted_call_argument_is_scanned() {
        let violations = check_code(
            r#"
fn login(password: &str) {
    let msg = fmt.Sprintf(password);
}
"#,
        );
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn call_results_are_inert() {
        let violations = check_code(
            r#"
fn login() {
    log.Println(read_password());
}
"#,
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn safe_identifiers_pass() {
        let violations = check_code(
            r#"
fn greet(name: &str) {
    log.Println(name);
}
"#,
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn toggles_disable_checks() {
        let rule = ProblematicLogs::new().with_options(LogOptions {
            check_lowercase: false,
            check_english: false,
            check_special: false,
            check_sensitive: false,
            ..LogOptions::default()
        });

        let violations = check_rule(
            &rule,
            r#"
fn login(password: &str) {
    log.Println("Привет!", password);
}
"#,
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn appended_sensitive_words_match() {
        let mut rule = ProblematicLogs::new();
        rule.apply(LogOptionsOverride {
            sensitive_words: Some(vec!["session".to_string()]),
            ..LogOptionsOverride::default()
        });

        let violations = check_rule(
            &rule,
            r#"
fn track(session_id: &str) {
    log.Println(session_id);
}
"#,
        );
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn from_value_decodes_overrides() {
        let value: toml::Value = toml::from_str(
            "check-english = false\nsensitive-words = [\"device_id\"]",
        )
        .expect("valid toml");
        let rule = ProblematicLogs::from_value(&value).expect("decodes");

        assert!(!rule.options.check_english);
        assert!(rule.options.check_lowercase);
        assert!(rule
            .options
            .sensitive_words
            .contains(&"password".to_string()));
        assert!(rule
            .options
            .sensitive_words
            .contains(&"device_id".to_string()));
    }

    #[test]
    fn from_value_rejects_unknown_keys() {
        let value: toml::Value = toml::from_str("check-engilsh = false").expect("valid toml");
        assert!(ProblematicLogs::from_value(&value).is_err());
    }

    #[test]
    fn severity_builder_applies() {
        let rule = ProblematicLogs::new().severity(Severity::Error);
        let violations = check_rule(
            &rule,
            r#"
fn startup() {
    log.Println("Hello World");
}
"#,
        );
        assert_eq!(violations[0].severity, Severity::Error);
    }

    #[test]
    fn violation_location_covers_the_literal() {
        let code = r#"
fn startup() {
    log.Println("Hello World");
}
"#;
        let violations = check_code(code);
        let loc = &violations[0].location;
        assert_eq!(loc.line, 3);
        assert_eq!(&code[loc.offset..loc.offset + loc.length], "\"Hello World\"");
    }
}
