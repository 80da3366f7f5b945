//! Rule trait for defining lint rules.

use crate::context::FileContext;
use crate::types::{Severity, Violation};

/// A per-file lint rule based on `syn` AST analysis.
///
/// Implement this trait to create rules that analyze individual source
/// files. Rules receive the parsed AST and can use the visitor pattern to
/// traverse it. Implementations must be `Send + Sync`: a host may dispatch
/// independent files concurrently, and rule state is read-only during a run.
///
/// # Example
///
/// ```ignore
/// use loglint_core::{Rule, FileContext, Violation, Severity};
/// use syn::visit::Visit;
///
/// pub struct NoEmptyMessages;
///
/// impl Rule for NoEmptyMessages {
///     fn name(&self) -> &'static str { "no-empty-messages" }
///     fn code(&self) -> &'static str { "LL999" }
///
///     fn check(&self, ctx: &FileContext, ast: &syn::File) -> Vec<Violation> {
///         let mut visitor = MessageVisitor::new(ctx);
///         visitor.visit_file(ast);
///         visitor.violations
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "problematic-logs").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "LL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Checks a single file and returns any violations found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `ast` - The parsed syntax tree of the file
    ///
    /// # Returns
    ///
    /// A vector of violations found in this file.
    fn check(&self, ctx: &FileContext, ast: &syn::File) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
