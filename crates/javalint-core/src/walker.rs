//! Single-pass dispatch of rules over a syntax tree.

use crate::error::StructuralInvariantViolation;
use crate::rule::Rule;
use crate::syntax::SyntaxTree;
use crate::types::Diagnostic;
use tracing::{debug, trace};

/// Drives one top-down traversal of a tree, handing each node to the rules
/// interested in its kind.
///
/// Diagnostics come out in visit order, which for declarations is source
/// order. A walker borrows its rules and holds no other state, so it is
/// cheap to create one per tree.
#[derive(Default)]
pub struct RuleWalker<'r> {
    rules: Vec<&'r dyn Rule>,
}

impl<'r> RuleWalker<'r> {
    /// Creates a walker without rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule.
    #[must_use]
    pub fn rule(mut self, rule: &'r dyn Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Registers several rules.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = &'r dyn Rule>,
    {
        self.rules.extend(rules);
        self
    }

    /// Walks the tree and collects every diagnostic.
    ///
    /// # Errors
    ///
    /// Returns the first [`StructuralInvariantViolation`] raised by a rule;
    /// the walk of this tree stops there.
    pub fn walk(&self, tree: &SyntaxTree) -> Result<Vec<Diagnostic>, StructuralInvariantViolation> {
        let mut diagnostics = Vec::new();
        self.walk_with(tree, |_, diagnostic| diagnostics.push(diagnostic))?;
        Ok(diagnostics)
    }

    /// Walks the tree, passing each diagnostic and the rule that raised it
    /// to `sink`.
    ///
    /// # Errors
    ///
    /// Returns the first [`StructuralInvariantViolation`] raised by a rule.
    pub fn walk_with<F>(
        &self,
        tree: &SyntaxTree,
        mut sink: F,
    ) -> Result<(), StructuralInvariantViolation>
    where
        F: FnMut(&'r dyn Rule, Diagnostic),
    {
        debug!("Walking {} nodes with {} rules", tree.len(), self.rules.len());

        for node in tree.pre_order() {
            let kind = node.kind();
            for &rule in &self.rules {
                if !rule.interests().contains(&kind) {
                    continue;
                }
                trace!("{} visits {} at line {}", rule.name(), kind, node.line());
                if let Some(diagnostic) = rule.visit(node)? {
                    sink(rule, diagnostic);
                }
            }
        }

        Ok(())
    }
}
