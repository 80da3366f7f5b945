//! # loglint-core
//!
//! Core framework for log-statement linting based on `syn` AST analysis.
//!
//! This crate provides the host-side contract a lint rule plugs into:
//!
//! - [`Rule`] trait for per-file AST-based rules
//! - [`Analyzer`] for orchestrating lint execution
//! - [`Violation`] for representing lint findings, with [`Suggestion`]
//!   fixes carried as byte-offset [`TextEdit`] splices
//! - [`Config`] for TOML-driven analyzer and rule configuration
//!
//! ## Example
//!
//! ```ignore
//! use loglint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod rule;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use rule::{Rule, RuleBox};
pub use types::{
    LintResult, Location, Severity, Suggestion, TextEdit, Violation, ViolationDiagnostic,
};
