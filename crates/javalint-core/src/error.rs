//! Error types shared by rules and the analyzer.

use crate::syntax::{Node, NodeKind};
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// The input tree breaks an assumption the inspectors rely on.
///
/// This is a defect in the front-end that built the tree, never a normal
/// rule outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("malformed tree: {kind} at line {line} {expectation}")]
#[diagnostic(
    code(javalint::structural),
    help("the syntax tree front-end produced a node shape the rules cannot handle")
)]
pub struct StructuralInvariantViolation {
    /// Kind of the node where the violation was detected.
    pub kind: NodeKind,
    /// Source line of that node.
    pub line: usize,
    /// What the tree was expected to contain.
    pub expectation: String,
}

impl StructuralInvariantViolation {
    /// Creates a violation anchored at `node`.
    #[must_use]
    pub fn at(node: Node<'_>, expectation: impl Into<String>) -> Self {
        Self {
            kind: node.kind(),
            line: node.line(),
            expectation: expectation.into(),
        }
    }

    pub(crate) fn missing_child(node: Node<'_>, kind: NodeKind) -> Self {
        Self::at(node, format!("has no {kind} child"))
    }

    pub(crate) fn missing_ancestor(node: Node<'_>, kinds: &[NodeKind]) -> Self {
        let names: Vec<String> = kinds.iter().map(ToString::to_string).collect();
        Self::at(node, format!("has no enclosing {}", names.join(" or ")))
    }
}

/// Configuration errors.
///
/// Raised while a rule is being built, before any tree is walked.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigurationError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    #[diagnostic(code(javalint::config::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    #[diagnostic(code(javalint::config::parse))]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// A rule option holds a regular expression that does not compile.
    #[error("Invalid pattern for `{rule}.{key}`: {pattern}")]
    #[diagnostic(
        code(javalint::config::pattern),
        help("the pattern must be a valid regular expression")
    )]
    InvalidPattern {
        /// Rule name.
        rule: String,
        /// Option key.
        key: String,
        /// The rejected pattern.
        pattern: String,
        /// Compile error.
        #[source]
        source: regex::Error,
    },

    /// A rule option has the wrong value type.
    #[error("Invalid value for `{rule}.{key}`: expected {expected}")]
    #[diagnostic(code(javalint::config::option))]
    InvalidOption {
        /// Rule name.
        rule: String,
        /// Option key.
        key: String,
        /// Expected value type.
        expected: &'static str,
    },
}

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialized tree could not be decoded.
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// The tree of one unit is malformed.
    #[error("Malformed tree in {path}: {source}")]
    Structural {
        /// Path of the unit being analyzed.
        path: PathBuf,
        /// The violation.
        #[source]
        source: StructuralInvariantViolation,
    },

    /// The worker pool could not be started.
    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{SyntaxNode, SyntaxTree};

    #[test]
    fn test_structural_message() {
        let tree = SyntaxTree::new(SyntaxNode::new(NodeKind::MethodDeclaration, 7));
        let err = StructuralInvariantViolation::missing_ancestor(
            tree.root(),
            &[NodeKind::ClassDeclaration, NodeKind::InterfaceDeclaration],
        );
        assert_eq!(
            err.to_string(),
            "malformed tree: MethodDeclaration at line 7 has no enclosing ClassDeclaration or InterfaceDeclaration"
        );
    }

    #[test]
    fn test_invalid_option_message() {
        let err = ConfigurationError::InvalidOption {
            rule: "forbid-wildcard-as-return-type".into(),
            key: "check_private_methods".into(),
            expected: "a boolean",
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for `forbid-wildcard-as-return-type.check_private_methods`: expected a boolean"
        );
    }
}
