//! Constructors for common Java tree shapes.
//!
//! Front-ends that emit trees programmatically, and tests, use these to get
//! the node layout the inspectors expect:
//!
//! ```text
//! MethodDeclaration
//! ├── Modifiers
//! │   ├── Annotation ── Identifier "Override"
//! │   └── Modifier "public"
//! ├── TypeReference
//! │   ├── Identifier "Foo"
//! │   └── TypeArgumentList
//! │       └── TypeArgument
//! │           ├── Wildcard
//! │           └── WildcardUpperBound ── TypeReference ── Identifier "Number"
//! ├── Identifier "bar"
//! └── Parameters
//! ```

use crate::syntax::{NodeKind, SyntaxNode};

/// `Identifier` node.
#[must_use]
pub fn identifier(name: &str, line: usize) -> SyntaxNode {
    SyntaxNode::new(NodeKind::Identifier, line).with_text(name)
}

/// `Annotation` node for `@name`.
#[must_use]
pub fn annotation(name: &str, line: usize) -> SyntaxNode {
    SyntaxNode::new(NodeKind::Annotation, line).with_child(identifier(name, line))
}

/// `Modifiers` node: annotations first, then keywords.
#[must_use]
pub fn modifiers(line: usize, keywords: &[&str], annotations: &[&str]) -> SyntaxNode {
    SyntaxNode::new(NodeKind::Modifiers, line)
        .with_children(annotations.iter().map(|a| annotation(a, line)))
        .with_children(
            keywords
                .iter()
                .map(|k| SyntaxNode::new(NodeKind::Modifier, line).with_text(*k)),
        )
}

/// `TypeReference` without type arguments.
#[must_use]
pub fn simple_type(name: &str, line: usize) -> SyntaxNode {
    SyntaxNode::new(NodeKind::TypeReference, line).with_child(identifier(name, line))
}

/// `TypeReference` with a type argument list.
#[must_use]
pub fn generic_type(name: &str, line: usize, arguments: Vec<SyntaxNode>) -> SyntaxNode {
    simple_type(name, line)
        .with_child(SyntaxNode::new(NodeKind::TypeArgumentList, line).with_children(arguments))
}

/// Concrete `TypeArgument` wrapping a type reference.
#[must_use]
pub fn type_argument(type_ref: SyntaxNode) -> SyntaxNode {
    SyntaxNode::new(NodeKind::TypeArgument, type_ref.line).with_child(type_ref)
}

/// `?`
#[must_use]
pub fn unbounded_wildcard(line: usize) -> SyntaxNode {
    SyntaxNode::new(NodeKind::TypeArgument, line)
        .with_child(SyntaxNode::new(NodeKind::Wildcard, line))
}

/// `? extends bound`
#[must_use]
pub fn upper_bounded_wildcard(bound: &str, line: usize) -> SyntaxNode {
    unbounded_wildcard(line).with_child(
        SyntaxNode::new(NodeKind::WildcardUpperBound, line).with_child(simple_type(bound, line)),
    )
}

/// `? super bound`
#[must_use]
pub fn lower_bounded_wildcard(bound: &str, line: usize) -> SyntaxNode {
    unbounded_wildcard(line).with_child(
        SyntaxNode::new(NodeKind::WildcardLowerBound, line).with_child(simple_type(bound, line)),
    )
}

/// `MethodDeclaration` with an empty parameter list.
#[must_use]
pub fn method(
    name: &str,
    line: usize,
    keywords: &[&str],
    annotations: &[&str],
    return_type: SyntaxNode,
) -> SyntaxNode {
    SyntaxNode::new(NodeKind::MethodDeclaration, line)
        .with_child(modifiers(line, keywords, annotations))
        .with_child(return_type)
        .with_child(identifier(name, line))
        .with_child(SyntaxNode::new(NodeKind::Parameters, line))
}

/// Field `VariableDeclaration`.
#[must_use]
pub fn field(name: &str, line: usize, keywords: &[&str], type_ref: SyntaxNode) -> SyntaxNode {
    SyntaxNode::new(NodeKind::VariableDeclaration, line)
        .with_child(modifiers(line, keywords, &[]))
        .with_child(type_ref)
        .with_child(identifier(name, line))
}

fn type_declaration(
    kind: NodeKind,
    name: &str,
    line: usize,
    members: Vec<SyntaxNode>,
) -> SyntaxNode {
    SyntaxNode::new(kind, line)
        .with_child(modifiers(line, &[], &[]))
        .with_child(identifier(name, line))
        .with_child(SyntaxNode::new(NodeKind::ObjectBlock, line).with_children(members))
}

/// `ClassDeclaration` with the given members in its body.
#[must_use]
pub fn class(name: &str, line: usize, members: Vec<SyntaxNode>) -> SyntaxNode {
    type_declaration(NodeKind::ClassDeclaration, name, line, members)
}

/// `InterfaceDeclaration` with the given members in its body.
#[must_use]
pub fn interface(name: &str, line: usize, members: Vec<SyntaxNode>) -> SyntaxNode {
    type_declaration(NodeKind::InterfaceDeclaration, name, line, members)
}

/// `EnumDeclaration` with the given members in its body.
#[must_use]
pub fn enumeration(name: &str, line: usize, members: Vec<SyntaxNode>) -> SyntaxNode {
    type_declaration(NodeKind::EnumDeclaration, name, line, members)
}

/// `CompilationUnit` holding top-level types.
#[must_use]
pub fn compilation_unit(types: Vec<SyntaxNode>) -> SyntaxNode {
    SyntaxNode::new(NodeKind::CompilationUnit, 1).with_children(types)
}

/// `StringLiteral`; `text` is the literal without quotes.
#[must_use]
pub fn string_literal(text: &str, line: usize) -> SyntaxNode {
    SyntaxNode::new(NodeKind::StringLiteral, line).with_text(format!("\"{text}\""))
}

/// `MethodCall` of a dotted callee such as `LOG.debug`.
#[must_use]
pub fn method_call(callee: &str, line: usize, arguments: Vec<SyntaxNode>) -> SyntaxNode {
    SyntaxNode::new(NodeKind::MethodCall, line)
        .with_children(callee.split('.').map(|part| identifier(part, line)))
        .with_child(SyntaxNode::new(NodeKind::ArgumentList, line).with_children(arguments))
}
