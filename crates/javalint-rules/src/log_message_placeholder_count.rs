//! Rule to match `{}` placeholders in log messages against the arguments.
//!
//! # Rationale
//!
//! SLF4J fills `{}` placeholders from the arguments that follow the message.
//! A surplus placeholder prints literally and a surplus argument is dropped,
//! so either way the log line lies.
//!
//! # Detected Patterns
//!
//! - `LOG.debug("user {} logged in from {}", user)`
//! - `LOG.info("done", elapsed)`
//!
//! Only calls on `LOG` whose message is a plain string literal are inspected.

use crate::logging::is_log_call;
use javalint_core::{Diagnostic, Node, NodeKind, Rule, Severity, StructuralInvariantViolation};

/// Message key for log-message-placeholder-count.
pub const KEY: &str = "logging.placeholder.count";

/// Rule name for log-message-placeholder-count.
pub const NAME: &str = "log-message-placeholder-count";

const PLACEHOLDER: &str = "{}";

/// Checks that each log message has one placeholder per argument.
#[derive(Debug, Clone)]
pub struct LogMessagePlaceholderCount {
    severity: Severity,
}

impl Default for LogMessagePlaceholderCount {
    fn default() -> Self {
        Self::new()
    }
}

impl LogMessagePlaceholderCount {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for LogMessagePlaceholderCount {
    fn name(&self) -> &'static str {
        NAME
    }

    fn key(&self) -> &'static str {
        KEY
    }

    fn message(&self) -> &'static str {
        "Log message placeholders count is incorrect"
    }

    fn description(&self) -> &'static str {
        "Matches `{}` placeholders in log messages with their arguments"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn interests(&self) -> &'static [NodeKind] {
        &[NodeKind::MethodCall]
    }

    fn visit(&self, node: Node<'_>) -> Result<Option<Diagnostic>, StructuralInvariantViolation> {
        if !is_log_call(node) {
            return Ok(None);
        }
        let list = node.require_child(NodeKind::ArgumentList)?;
        let mut arguments = list.children();

        let Some(message) = arguments.next() else {
            return Ok(None);
        };
        if message.kind() != NodeKind::StringLiteral {
            return Ok(None);
        }
        let text = message
            .text()
            .ok_or_else(|| StructuralInvariantViolation::at(message, "has no literal text"))?;

        let placeholders = text.matches(PLACEHOLDER).count();
        let mismatch = placeholders != arguments.len();
        Ok(mismatch.then(|| Diagnostic::new(node.line(), KEY)))
    }
}
