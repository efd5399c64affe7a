//! Rule trait for defining lint rules.

use crate::error::StructuralInvariantViolation;
use crate::syntax::{Node, NodeKind};
use crate::types::{Diagnostic, Severity};

/// A structural lint rule over a Java syntax tree.
///
/// A rule declares the node kinds it cares about; the walker calls
/// [`Rule::visit`] once for every node of those kinds, in pre-order.
/// Rules are immutable once built, so one instance can serve any number
/// of trees, concurrently.
///
/// # Example
///
/// ```ignore
/// use javalint_core::{Diagnostic, Node, NodeKind, Rule, StructuralInvariantViolation};
///
/// pub struct NoFinalize;
///
/// impl Rule for NoFinalize {
///     fn name(&self) -> &'static str { "no-finalize" }
///     fn key(&self) -> &'static str { "no.finalize" }
///     fn message(&self) -> &'static str { "finalize() must not be declared" }
///     fn interests(&self) -> &'static [NodeKind] { &[NodeKind::MethodDeclaration] }
///
///     fn visit(&self, node: Node<'_>) -> Result<Option<Diagnostic>, StructuralInvariantViolation> {
///         Ok((node.identifier() == Some("finalize"))
///             .then(|| Diagnostic::new(node.line(), self.key())))
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "forbid-wildcard-as-return-type").
    fn name(&self) -> &'static str;

    /// Returns the message key attached to diagnostics of this rule.
    fn key(&self) -> &'static str;

    /// Returns the human-readable text for [`Rule::key`].
    fn message(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Node kinds this rule wants to visit.
    fn interests(&self) -> &'static [NodeKind];

    /// Inspects one node of an interesting kind.
    ///
    /// # Errors
    ///
    /// Returns [`StructuralInvariantViolation`] if the node's subtree does not
    /// have the shape the rule relies on.
    fn visit(&self, node: Node<'_>) -> Result<Option<Diagnostic>, StructuralInvariantViolation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
