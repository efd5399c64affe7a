//! Read-only traversal helpers over [`Node`] handles.

use crate::error::StructuralInvariantViolation;
use crate::syntax::{Node, NodeKind};

impl<'a> Node<'a> {
    /// Returns the first direct child of the given kind.
    #[must_use]
    pub fn find_first_child(&self, kind: NodeKind) -> Option<Node<'a>> {
        self.children().find(|c| c.kind() == kind)
    }

    /// Returns true if a direct child of the given kind exists.
    #[must_use]
    pub fn has_child(&self, kind: NodeKind) -> bool {
        self.find_first_child(kind).is_some()
    }

    /// Returns all direct children of the given kind in source order.
    #[must_use]
    pub fn collect_children(&self, kind: NodeKind) -> Vec<Node<'a>> {
        self.children().filter(|c| c.kind() == kind).collect()
    }

    /// Returns the first direct child of the given kind or a structural error.
    ///
    /// # Errors
    ///
    /// Returns [`StructuralInvariantViolation`] if there is no such child.
    pub fn require_child(&self, kind: NodeKind) -> Result<Node<'a>, StructuralInvariantViolation> {
        self.find_first_child(kind)
            .ok_or_else(|| StructuralInvariantViolation::missing_child(*self, kind))
    }

    /// Walks strictly upward to the closest ancestor whose kind is in `kinds`.
    ///
    /// Only call this where the grammar guarantees such an ancestor, e.g. a
    /// method is always inside a type declaration.
    ///
    /// # Errors
    ///
    /// Returns [`StructuralInvariantViolation`] if the root is passed
    /// without a match.
    pub fn nearest_ancestor(
        &self,
        kinds: &[NodeKind],
    ) -> Result<Node<'a>, StructuralInvariantViolation> {
        let mut current = self.parent();
        while let Some(node) = current {
            if kinds.contains(&node.kind()) {
                return Ok(node);
            }
            current = node.parent();
        }
        Err(StructuralInvariantViolation::missing_ancestor(*self, kinds))
    }

    /// Text of the first direct `Identifier` child.
    #[must_use]
    pub fn identifier(&self) -> Option<&'a str> {
        self.find_first_child(NodeKind::Identifier)
            .and_then(|n| n.text())
    }

    /// Sibling nodes that precede this one under the same parent.
    pub fn preceding_siblings(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        let id = self.id;
        self.parent()
            .into_iter()
            .flat_map(|p| p.children())
            .take_while(move |n| n.id != id)
    }
}
