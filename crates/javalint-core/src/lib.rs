//! # javalint-core
//!
//! Core framework for structural linting of Java syntax trees.
//!
//! Parsing is not part of this crate: an external front-end builds a
//! [`SyntaxNode`] tree per source file. This crate provides:
//!
//! - [`SyntaxTree`] and [`Node`] for navigating that tree
//! - [`inspector`] helpers that extract declaration facts (visibility,
//!   annotations, wildcard return-type arguments)
//! - [`Rule`] trait for rules that react to node kinds
//! - [`RuleWalker`] for one pre-order pass over a tree
//! - [`Analyzer`] for running rules over many units in parallel
//!
//! ## Example
//!
//! ```ignore
//! use javalint_core::{Analyzer, SourceUnit};
//!
//! let analyzer = Analyzer::builder()
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze(&[SourceUnit::from_json_file(path)?])?;
//! println!("{}", result.format_report(Severity::Info));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
mod query;
mod rule;
mod syntax;
mod types;
mod walker;

pub mod build;
pub mod inspector;

pub use analyzer::{Analyzer, AnalyzerBuilder, SourceUnit};
pub use config::{AnalyzerConfig, Config, RuleConfig};
pub use error::{AnalyzerError, ConfigurationError, StructuralInvariantViolation};
pub use inspector::{Visibility, WildcardBound};
pub use rule::{Rule, RuleBox};
pub use syntax::{Node, NodeKind, SyntaxNode, SyntaxTree};
pub use types::{Diagnostic, LintResult, Location, Severity, UnitFailure, Violation};
pub use walker::RuleWalker;
