//! Rule to allow at most one logger field per type.
//!
//! # Rationale
//!
//! A second logger in the same class splits log output between two
//! categories for no benefit and is usually a copy-paste leftover.
//!
//! # Detected Patterns
//!
//! ```java
//! class Service {
//!     private static final Logger LOG = LoggerFactory.getLogger(Service.class);
//!     private static final Logger AUDIT = LoggerFactory.getLogger("audit"); // flagged
//! }
//! ```
//!
//! Fields typed `Logger` or `org.slf4j.Logger` in class and enum bodies
//! count. Local variables are ignored, nested types get their own count, and
//! interface, record and annotation bodies are not checked.

use crate::logging::{is_field, is_logger_type};
use javalint_core::{Diagnostic, Node, NodeKind, Rule, Severity, StructuralInvariantViolation};

/// Message key for logger-declarations-count.
pub const KEY: &str = "logging.count.check";

/// Rule name for logger-declarations-count.
pub const NAME: &str = "logger-declarations-count";

/// Type declarations whose bodies are checked.
const CHECKED_OWNERS: [NodeKind; 2] = [NodeKind::ClassDeclaration, NodeKind::EnumDeclaration];

/// Flags every logger field after the first one in a class or enum body.
#[derive(Debug, Clone)]
pub struct LoggerDeclarationsCount {
    severity: Severity,
}

impl Default for LoggerDeclarationsCount {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerDeclarationsCount {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for LoggerDeclarationsCount {
    fn name(&self) -> &'static str {
        NAME
    }

    fn key(&self) -> &'static str {
        KEY
    }

    fn message(&self) -> &'static str {
        "Logger might be declared only once"
    }

    fn description(&self) -> &'static str {
        "Allows a single logger field per class or enum"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn interests(&self) -> &'static [NodeKind] {
        &[NodeKind::VariableDeclaration]
    }

    fn visit(&self, node: Node<'_>) -> Result<Option<Diagnostic>, StructuralInvariantViolation> {
        if !is_field(node) || !is_logger_type(node) {
            return Ok(None);
        }
        let owner = node.nearest_ancestor(NodeKind::TYPE_DECLARATIONS)?;
        if !CHECKED_OWNERS.contains(&owner.kind()) {
            return Ok(None);
        }

        let repeated = node
            .preceding_siblings()
            .any(|s| s.kind() == NodeKind::VariableDeclaration && is_logger_type(s));
        Ok(repeated.then(|| Diagnostic::new(node.line(), KEY)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use javalint_core::build::{class, enumeration, field, interface, method, simple_type};
    use javalint_core::{RuleWalker, SyntaxNode, SyntaxTree};

    fn logger(name: &str, line: usize) -> SyntaxNode {
        field(name, line, &["private", "static", "final"], simple_type("Logger", line))
    }

    fn check(root: SyntaxNode) -> Vec<Diagnostic> {
        let rule = LoggerDeclarationsCount::new();
        RuleWalker::new()
            .rule(&rule)
            .walk(&SyntaxTree::new(root))
            .unwrap()
    }

    #[test]
    fn test_single_logger_ok() {
        let diagnostics = check(class(
            "Service",
            1,
            vec![
                logger("LOG", 2),
                field("name", 3, &["private"], simple_type("String", 3)),
            ],
        ));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_second_logger_flagged() {
        let diagnostics = check(class(
            "Service",
            1,
            vec![
                logger("LOG", 2),
                field("name", 3, &[], simple_type("String", 3)),
                field("AUDIT", 4, &[], simple_type("org.slf4j.Logger", 4)),
                logger("THIRD", 5),
            ],
        ));
        assert_eq!(
            diagnostics,
            vec![Diagnostic::new(4, KEY), Diagnostic::new(5, KEY)]
        );
    }

    #[test]
    fn test_nested_types_counted_separately() {
        let inner = enumeration("Mode", 4, vec![logger("LOG", 5)]);
        let diagnostics = check(class("Outer", 1, vec![logger("LOG", 2), inner]));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_interface_body_not_checked() {
        let diagnostics = check(interface("Api", 1, vec![logger("LOG", 2), logger("AUDIT", 3)]));
        assert!(diagnostics.is_empty());

        let nested = interface("Api", 3, vec![logger("LOG", 4), logger("AUDIT", 5)]);
        let diagnostics = check(class("Service", 1, vec![logger("LOG", 2), nested]));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_local_variables_ignored() {
        let mut body = method("run", 3, &[], &[], simple_type("void", 3));
        body.children.push(logger("local", 4));
        let diagnostics = check(class("Service", 1, vec![logger("LOG", 2), body]));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_body_outside_type_is_structural_error() {
        let block = SyntaxNode::new(NodeKind::ObjectBlock, 1)
            .with_children([logger("LOG", 2), logger("OTHER", 3)]);
        let rule = LoggerDeclarationsCount::new();
        let err = RuleWalker::new()
            .rule(&rule)
            .walk(&SyntaxTree::new(block))
            .unwrap_err();
        assert_eq!(err.line, 2);
    }
}
