//! Semantic facts extracted from declaration subtrees.
//!
//! Rules ask these helpers instead of re-walking node shapes themselves.
//! Everything here is purely syntactic: no names are resolved.

use crate::error::StructuralInvariantViolation;
use crate::syntax::{Node, NodeKind};

/// Declared visibility of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// `public`, or any interface member.
    Public,
    /// `protected`.
    Protected,
    /// No visibility keyword.
    PackagePrivate,
    /// `private`.
    Private,
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Protected => write!(f, "protected"),
            Self::PackagePrivate => write!(f, "package"),
            Self::Private => write!(f, "private"),
        }
    }
}

/// Bound carried by a wildcard type argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WildcardBound {
    /// `? extends T`
    Upper,
    /// `? super T`
    Lower,
}

/// Keywords scanned in this order; the first one present wins.
const VISIBILITY_KEYWORDS: [(&str, Visibility); 3] = [
    ("public", Visibility::Public),
    ("private", Visibility::Private),
    ("protected", Visibility::Protected),
];

/// Resolves the visibility of a method declaration.
///
/// Members declared directly in an interface body are always public. Any
/// other member, including one of an anonymous class nested in an interface
/// method, is decided by its `Modifiers` child; without a visibility keyword
/// the member is package-private.
///
/// # Errors
///
/// Returns [`StructuralInvariantViolation`] if the declaration has no
/// enclosing type or no `Modifiers` child.
pub fn visibility(decl: Node<'_>) -> Result<Visibility, StructuralInvariantViolation> {
    decl.nearest_ancestor(NodeKind::TYPE_DECLARATIONS)?;
    if declared_in_interface(decl) {
        return Ok(Visibility::Public);
    }

    let modifiers = decl.require_child(NodeKind::Modifiers)?;
    let keywords: Vec<&str> = modifiers
        .collect_children(NodeKind::Modifier)
        .iter()
        .filter_map(Node::text)
        .collect();

    Ok(VISIBILITY_KEYWORDS
        .iter()
        .find(|(keyword, _)| keywords.contains(keyword))
        .map_or(Visibility::PackagePrivate, |&(_, vis)| vis))
}

fn declared_in_interface(decl: Node<'_>) -> bool {
    decl.parent()
        .filter(|body| body.kind() == NodeKind::ObjectBlock)
        .and_then(|body| body.parent())
        .is_some_and(|owner| owner.kind() == NodeKind::InterfaceDeclaration)
}

/// Checks whether the declaration carries `@name`.
///
/// # Errors
///
/// Returns [`StructuralInvariantViolation`] if the declaration has no
/// `Modifiers` child.
pub fn has_annotation(decl: Node<'_>, name: &str) -> Result<bool, StructuralInvariantViolation> {
    let modifiers = decl.require_child(NodeKind::Modifiers)?;
    Ok(modifiers
        .collect_children(NodeKind::Annotation)
        .iter()
        .any(|a| a.identifier() == Some(name)))
}

/// Returns the `TypeReference` holding the declared return type.
///
/// # Errors
///
/// Returns [`StructuralInvariantViolation`] if the declaration has none.
pub fn return_type(decl: Node<'_>) -> Result<Node<'_>, StructuralInvariantViolation> {
    decl.require_child(NodeKind::TypeReference)
}

/// Returns the bound of a type argument, if it is a bounded wildcard.
#[must_use]
pub fn wildcard_bound(argument: Node<'_>) -> Option<WildcardBound> {
    if argument.has_child(NodeKind::WildcardUpperBound) {
        Some(WildcardBound::Upper)
    } else if argument.has_child(NodeKind::WildcardLowerBound) {
        Some(WildcardBound::Lower)
    } else {
        None
    }
}

/// Returns true if the type argument is a bare `?` without bound.
#[must_use]
pub fn is_unbounded_wildcard(argument: Node<'_>) -> bool {
    argument.has_child(NodeKind::Wildcard) && wildcard_bound(argument).is_none()
}

fn return_type_arguments(decl: Node<'_>) -> Result<Vec<Node<'_>>, StructuralInvariantViolation> {
    let type_ref = return_type(decl)?;
    Ok(type_ref
        .find_first_child(NodeKind::TypeArgumentList)
        .map(|list| list.collect_children(NodeKind::TypeArgument))
        .unwrap_or_default())
}

/// Type arguments of the return type that are bounded wildcards
/// (`? extends T` or `? super T`), in source order.
///
/// Concrete arguments and bare `?` are not included. Only the outermost
/// argument list is inspected.
///
/// # Errors
///
/// Returns [`StructuralInvariantViolation`] if the declaration has no
/// return type.
pub fn return_type_wildcard_arguments(
    decl: Node<'_>,
) -> Result<Vec<Node<'_>>, StructuralInvariantViolation> {
    Ok(return_type_arguments(decl)?
        .into_iter()
        .filter(|arg| wildcard_bound(*arg).is_some())
        .collect())
}

/// Type arguments of the return type that are a bare `?`, in source order.
///
/// # Errors
///
/// Returns [`StructuralInvariantViolation`] if the declaration has no
/// return type.
pub fn return_type_unbounded_wildcard_arguments(
    decl: Node<'_>,
) -> Result<Vec<Node<'_>>, StructuralInvariantViolation> {
    Ok(return_type_arguments(decl)?
        .into_iter()
        .filter(|arg| is_unbounded_wildcard(*arg))
        .collect())
}

/// Leading identifier of the return type, ignoring type arguments.
///
/// # Errors
///
/// Returns [`StructuralInvariantViolation`] if the declaration has no
/// return type or the return type has no identifier.
pub fn return_type_simple_name(decl: Node<'_>) -> Result<&str, StructuralInvariantViolation> {
    let type_ref = return_type(decl)?;
    type_ref
        .identifier()
        .ok_or_else(|| StructuralInvariantViolation::missing_child(type_ref, NodeKind::Identifier))
}
