//! Syntax tree model.
//!
//! Front-ends hand trees over as owned, recursive [`SyntaxNode`] values
//! (deserializable from JSON). Rules never see that form: it is flattened
//! into a [`SyntaxTree`] arena where every node records its parent, and
//! rules navigate it through copyable [`Node`] handles.

use serde::{Deserialize, Serialize};

/// Kind tag of a syntax node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Root of a source file.
    CompilationUnit,
    /// `class` declaration.
    ClassDeclaration,
    /// `interface` declaration.
    InterfaceDeclaration,
    /// `enum` declaration.
    EnumDeclaration,
    /// `@interface` declaration.
    AnnotationDeclaration,
    /// `record` declaration.
    RecordDeclaration,
    /// Body of a type declaration (`{ ... }`).
    ObjectBlock,
    /// Method declaration.
    MethodDeclaration,
    /// Field or local variable declaration.
    VariableDeclaration,
    /// Parameter list of a method.
    Parameters,
    /// Modifier list of a declaration, possibly empty.
    Modifiers,
    /// Modifier keyword such as `public` or `static`; `text` holds the keyword.
    Modifier,
    /// Annotation usage such as `@Override`.
    Annotation,
    /// Type reference (return type, field type, bound type).
    TypeReference,
    /// `<...>` list of type arguments.
    TypeArgumentList,
    /// Single type argument.
    TypeArgument,
    /// Bare `?` marker of a wildcard type argument.
    Wildcard,
    /// `extends T` bound of a wildcard.
    WildcardUpperBound,
    /// `super T` bound of a wildcard.
    WildcardLowerBound,
    /// Identifier; `text` holds the name.
    Identifier,
    /// Method invocation.
    MethodCall,
    /// Argument list of a method invocation.
    ArgumentList,
    /// String literal; `text` holds the literal as written, quotes included.
    StringLiteral,
    /// Binary `+` expression.
    BinaryPlus,
    /// Any construct the rules do not inspect.
    Other,
}

impl NodeKind {
    /// Kinds that open a new type scope.
    pub const TYPE_DECLARATIONS: &'static [NodeKind] = &[
        NodeKind::ClassDeclaration,
        NodeKind::InterfaceDeclaration,
        NodeKind::EnumDeclaration,
        NodeKind::AnnotationDeclaration,
        NodeKind::RecordDeclaration,
    ];
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Owned tree node as produced by a front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxNode {
    /// Kind tag.
    pub kind: NodeKind,
    /// 1-based source line.
    pub line: usize,
    /// Literal payload (identifier text, keyword, literal value).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Children in source order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Creates a node without payload or children.
    #[must_use]
    pub fn new(kind: NodeKind, line: usize) -> Self {
        Self {
            kind,
            line,
            text: None,
            children: Vec::new(),
        }
    }

    /// Sets the text payload.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn with_child(mut self, child: SyntaxNode) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several children.
    #[must_use]
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = SyntaxNode>,
    {
        self.children.extend(children);
        self
    }
}

/// Index of a node inside a [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    line: usize,
    text: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena holding one source unit's tree.
///
/// Nodes are stored in pre-order, so iterating ids in ascending order
/// visits the tree top-down in source order.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
}

impl SyntaxTree {
    /// Flattens an owned tree into an arena.
    ///
    /// Uses an explicit work stack, so tree depth is bounded by memory
    /// rather than by the call stack.
    #[must_use]
    pub fn new(root: SyntaxNode) -> Self {
        let mut nodes: Vec<NodeData> = Vec::new();
        let mut pending = vec![(root, None)];
        while let Some((node, parent)) = pending.pop() {
            let id = NodeId(nodes.len());
            if let Some(NodeId(p)) = parent {
                nodes[p].children.push(id);
            }
            nodes.push(NodeData {
                kind: node.kind,
                line: node.line,
                text: node.text,
                parent,
                children: Vec::with_capacity(node.children.len()),
            });
            // Reversed so the first child is popped, and numbered, next.
            pending.extend(node.children.into_iter().rev().map(|c| (c, Some(id))));
        }
        Self { nodes }
    }

    /// Parses a JSON-serialized [`SyntaxNode`] and flattens it.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a syntax node.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let root: SyntaxNode = serde_json::from_str(json)?;
        Ok(Self::new(root))
    }

    /// Returns the root node.
    #[must_use]
    pub fn root(&self) -> Node<'_> {
        Node {
            tree: self,
            id: NodeId(0),
        }
    }

    /// Returns the number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates all nodes in pre-order (top-down, source order).
    pub fn pre_order(&self) -> impl Iterator<Item = Node<'_>> {
        (0..self.nodes.len()).map(move |i| Node {
            tree: self,
            id: NodeId(i),
        })
    }
}

/// Copyable handle to a node of a [`SyntaxTree`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    pub(crate) tree: &'a SyntaxTree,
    pub(crate) id: NodeId,
}

impl<'a> Node<'a> {
    fn data(&self) -> &'a NodeData {
        &self.tree.nodes[self.id.0]
    }

    /// Kind tag.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.data().kind
    }

    /// 1-based source line.
    #[must_use]
    pub fn line(&self) -> usize {
        self.data().line
    }

    /// Text payload, if any.
    #[must_use]
    pub fn text(&self) -> Option<&'a str> {
        self.data().text.as_deref()
    }

    /// Parent node; `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Node<'a>> {
        let tree = self.tree;
        self.data().parent.map(|id| Node { tree, id })
    }

    /// Direct children in source order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = Node<'a>> + ExactSizeIterator + 'a {
        let tree = self.tree;
        self.data()
            .children
            .iter()
            .map(move |&id| Node { tree, id })
    }
}

impl std::fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id.0)
            .field("kind", &self.kind())
            .field("line", &self.line())
            .field("text", &self.text())
            .finish()
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for Node<'_> {}
