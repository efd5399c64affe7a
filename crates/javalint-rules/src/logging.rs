//! Shared matching for the logging rules.

use javalint_core::{Node, NodeKind};

/// Type names treated as a logger.
pub const LOGGER_TYPE_NAMES: &[&str] = &["Logger", "org.slf4j.Logger"];

/// Qualified callees treated as log statements.
pub const LOG_METHODS: &[&str] = &["LOG.debug", "LOG.info", "LOG.error", "LOG.warn", "LOG.trace"];

/// Dotted name built from the direct `Identifier` children of `node`.
///
/// A qualified name may arrive as one dotted identifier or as one identifier
/// per segment; both produce the same string.
pub fn dotted_name(node: Node<'_>) -> String {
    node.children()
        .filter(|c| c.kind() == NodeKind::Identifier)
        .filter_map(|c| c.text())
        .collect::<Vec<_>>()
        .join(".")
}

/// Whether a variable declaration sits directly in a type body.
pub fn is_field(decl: Node<'_>) -> bool {
    decl.parent()
        .is_some_and(|p| p.kind() == NodeKind::ObjectBlock)
}

/// Whether a variable declaration has a logger type.
pub fn is_logger_type(decl: Node<'_>) -> bool {
    decl.find_first_child(NodeKind::TypeReference)
        .is_some_and(|t| LOGGER_TYPE_NAMES.contains(&dotted_name(t).as_str()))
}

/// Whether a method call invokes one of [`LOG_METHODS`].
pub fn is_log_call(call: Node<'_>) -> bool {
    LOG_METHODS.contains(&dotted_name(call).as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use javalint_core::build::{class, field, method_call, simple_type, string_literal};
    use javalint_core::{SyntaxNode, SyntaxTree};

    fn first(tree: &SyntaxTree, kind: NodeKind) -> Node<'_> {
        tree.pre_order().find(|n| n.kind() == kind).unwrap()
    }

    #[test]
    fn test_logger_type_names() {
        for name in ["Logger", "org.slf4j.Logger"] {
            let tree = SyntaxTree::new(class(
                "A",
                1,
                vec![field("LOG", 2, &[], simple_type(name, 2))],
            ));
            let decl = first(&tree, NodeKind::VariableDeclaration);
            assert!(is_logger_type(decl), "{name}");
            assert!(is_field(decl));
        }

        let tree = SyntaxTree::new(class(
            "A",
            1,
            vec![field("LOG", 2, &[], simple_type("java.util.logging.Logger", 2))],
        ));
        assert!(!is_logger_type(first(&tree, NodeKind::VariableDeclaration)));
    }

    #[test]
    fn test_segmented_type_name() {
        let type_ref = SyntaxNode::new(NodeKind::TypeReference, 2).with_children(
            ["org", "slf4j", "Logger"]
                .into_iter()
                .map(|s| SyntaxNode::new(NodeKind::Identifier, 2).with_text(s)),
        );
        let tree = SyntaxTree::new(class("A", 1, vec![field("LOG", 2, &[], type_ref)]));
        assert!(is_logger_type(first(&tree, NodeKind::VariableDeclaration)));
    }

    #[test]
    fn test_log_call() {
        let tree = SyntaxTree::new(method_call("LOG.warn", 3, vec![string_literal("x", 3)]));
        assert!(is_log_call(tree.root()));

        let tree = SyntaxTree::new(method_call("log.warn", 3, vec![]));
        assert!(!is_log_call(tree.root()));

        let tree = SyntaxTree::new(method_call("LOG.fatal", 3, vec![]));
        assert!(!is_log_call(tree.root()));
    }
}
