//! Rule to forbid wildcard type arguments in method return types.
//!
//! # Rationale
//!
//! A method returning `List<? extends Number>` pushes the wildcard onto every
//! caller, who then has to spell it out in client code. Wildcards belong in
//! parameter types, where they widen what a method accepts; in return types
//! they only leak the API's generics to its users.
//!
//! # Detected Patterns
//!
//! - `public Foo<?> bar()`
//! - `protected Foo<? extends Number> bar()`
//! - `Foo<? super Integer> bar()` (package-private)
//!
//! Only the outermost type arguments count: `Foo<List<?>>` is not flagged.
//!
//! # Configuration
//!
//! - `check_public_methods` (default: true)
//! - `check_protected_methods` (default: true)
//! - `check_package_methods` (default: true)
//! - `check_private_methods` (default: false)
//! - `check_override_methods`: check `@Override` methods (default: false)
//! - `check_deprecated_methods`: check `@Deprecated` methods (default: false)
//! - `allow_return_wildcard_with_extends`: accept `? extends T` (default: false)
//! - `allow_return_wildcard_with_super`: accept `? super T` (default: false)
//! - `return_type_class_names_ignore_regex`: return types whose simple name
//!   matches in full are never flagged (default: `^(Comparator|Comparable)$`)

use javalint_core::inspector::{
    has_annotation, return_type_simple_name, return_type_unbounded_wildcard_arguments,
    return_type_wildcard_arguments, visibility, wildcard_bound,
};
use javalint_core::{
    ConfigurationError, Diagnostic, Node, NodeKind, Rule, RuleConfig, Severity,
    StructuralInvariantViolation, Visibility, WildcardBound,
};
use regex::Regex;

/// Message key for forbid-wildcard-as-return-type.
pub const KEY: &str = "forbid.wildcard.as.return.type";

/// Rule name for forbid-wildcard-as-return-type.
pub const NAME: &str = "forbid-wildcard-as-return-type";

/// Return type names exempted unless configured otherwise.
pub const DEFAULT_IGNORE_PATTERN: &str = "^(Comparator|Comparable)$";

/// Options of [`ForbidWildcardAsReturnType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardReturnConfig {
    /// Check `public` methods and interface methods.
    pub check_public_methods: bool,
    /// Check `protected` methods.
    pub check_protected_methods: bool,
    /// Check package-private methods.
    pub check_package_methods: bool,
    /// Check `private` methods.
    pub check_private_methods: bool,
    /// Check methods annotated with `@Override`.
    pub check_override_methods: bool,
    /// Check methods annotated with `@Deprecated`.
    pub check_deprecated_methods: bool,
    /// Accept `? extends T` arguments.
    pub allow_wildcard_with_extends: bool,
    /// Accept `? super T` arguments.
    pub allow_wildcard_with_super: bool,
    /// Regex matched in full against the return type's simple name.
    pub ignore_pattern: String,
}

impl Default for WildcardReturnConfig {
    fn default() -> Self {
        Self {
            check_public_methods: true,
            check_protected_methods: true,
            check_package_methods: true,
            check_private_methods: false,
            check_override_methods: false,
            check_deprecated_methods: false,
            allow_wildcard_with_extends: false,
            allow_wildcard_with_super: false,
            ignore_pattern: DEFAULT_IGNORE_PATTERN.to_string(),
        }
    }
}

impl WildcardReturnConfig {
    /// Reads options from a `[rules.forbid-wildcard-as-return-type]` table.
    ///
    /// Unset options keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidOption`] for options of the wrong type.
    pub fn from_rule_config(config: &RuleConfig) -> Result<Self, ConfigurationError> {
        let d = Self::default();
        Ok(Self {
            check_public_methods: config.bool_option(
                NAME,
                "check_public_methods",
                d.check_public_methods,
            )?,
            check_protected_methods: config.bool_option(
                NAME,
                "check_protected_methods",
                d.check_protected_methods,
            )?,
            check_package_methods: config.bool_option(
                NAME,
                "check_package_methods",
                d.check_package_methods,
            )?,
            check_private_methods: config.bool_option(
                NAME,
                "check_private_methods",
                d.check_private_methods,
            )?,
            check_override_methods: config.bool_option(
                NAME,
                "check_override_methods",
                d.check_override_methods,
            )?,
            check_deprecated_methods: config.bool_option(
                NAME,
                "check_deprecated_methods",
                d.check_deprecated_methods,
            )?,
            allow_wildcard_with_extends: config.bool_option(
                NAME,
                "allow_return_wildcard_with_extends",
                d.allow_wildcard_with_extends,
            )?,
            allow_wildcard_with_super: config.bool_option(
                NAME,
                "allow_return_wildcard_with_super",
                d.allow_wildcard_with_super,
            )?,
            ignore_pattern: config
                .str_option(NAME, "return_type_class_names_ignore_regex")?
                .map_or(d.ignore_pattern, String::from),
        })
    }

    /// Sets whether `public` methods are checked.
    #[must_use]
    pub fn check_public_methods(mut self, check: bool) -> Self {
        self.check_public_methods = check;
        self
    }

    /// Sets whether `protected` methods are checked.
    #[must_use]
    pub fn check_protected_methods(mut self, check: bool) -> Self {
        self.check_protected_methods = check;
        self
    }

    /// Sets whether package-private methods are checked.
    #[must_use]
    pub fn check_package_methods(mut self, check: bool) -> Self {
        self.check_package_methods = check;
        self
    }

    /// Sets whether `private` methods are checked.
    #[must_use]
    pub fn check_private_methods(mut self, check: bool) -> Self {
        self.check_private_methods = check;
        self
    }

    /// Sets whether `@Override` methods are checked.
    #[must_use]
    pub fn check_override_methods(mut self, check: bool) -> Self {
        self.check_override_methods = check;
        self
    }

    /// Sets whether `@Deprecated` methods are checked.
    #[must_use]
    pub fn check_deprecated_methods(mut self, check: bool) -> Self {
        self.check_deprecated_methods = check;
        self
    }

    /// Sets whether `? extends T` is accepted.
    #[must_use]
    pub fn allow_wildcard_with_extends(mut self, allow: bool) -> Self {
        self.allow_wildcard_with_extends = allow;
        self
    }

    /// Sets whether `? super T` is accepted.
    #[must_use]
    pub fn allow_wildcard_with_super(mut self, allow: bool) -> Self {
        self.allow_wildcard_with_super = allow;
        self
    }

    /// Sets the return type name exemption pattern.
    #[must_use]
    pub fn ignore_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.ignore_pattern = pattern.into();
        self
    }

    fn checks(&self, vis: Visibility) -> bool {
        match vis {
            Visibility::Public => self.check_public_methods,
            Visibility::Protected => self.check_protected_methods,
            Visibility::PackagePrivate => self.check_package_methods,
            Visibility::Private => self.check_private_methods,
        }
    }
}

/// Forbids wildcard type arguments in method return types.
#[derive(Debug, Clone)]
pub struct ForbidWildcardAsReturnType {
    config: WildcardReturnConfig,
    ignore: Regex,
    severity: Severity,
}

impl ForbidWildcardAsReturnType {
    /// Creates the rule from its options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidPattern`] if the ignore pattern
    /// does not compile.
    pub fn new(config: WildcardReturnConfig) -> Result<Self, ConfigurationError> {
        let ignore = Regex::new(&format!("^(?:{})$", config.ignore_pattern)).map_err(|source| {
            ConfigurationError::InvalidPattern {
                rule: NAME.to_string(),
                key: "return_type_class_names_ignore_regex".to_string(),
                pattern: config.ignore_pattern.clone(),
                source,
            }
        })?;
        Ok(Self {
            config,
            ignore,
            severity: Severity::Error,
        })
    }

    /// Creates the rule with default options.
    ///
    /// # Errors
    ///
    /// Never fails for the default pattern; kept fallible like [`Self::new`].
    pub fn with_defaults() -> Result<Self, ConfigurationError> {
        Self::new(WildcardReturnConfig::default())
    }

    /// Creates the rule from a `[rules.forbid-wildcard-as-return-type]` table.
    ///
    /// # Errors
    ///
    /// Returns an error for options of the wrong type or a bad pattern.
    pub fn from_rule_config(config: &RuleConfig) -> Result<Self, ConfigurationError> {
        Self::new(WildcardReturnConfig::from_rule_config(config)?)
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Returns the options this rule was built with.
    #[must_use]
    pub fn config(&self) -> &WildcardReturnConfig {
        &self.config
    }

    /// Decides whether a method declaration violates the rule.
    fn violates(&self, decl: Node<'_>) -> Result<bool, StructuralInvariantViolation> {
        if !self.config.checks(visibility(decl)?) {
            return Ok(false);
        }
        if !self.config.check_override_methods && has_annotation(decl, "Override")? {
            return Ok(false);
        }
        if !self.config.check_deprecated_methods && has_annotation(decl, "Deprecated")? {
            return Ok(false);
        }

        let bounded = return_type_wildcard_arguments(decl)?;
        if bounded.is_empty() && return_type_unbounded_wildcard_arguments(decl)?.is_empty() {
            return Ok(false);
        }

        if self.ignore.is_match(return_type_simple_name(decl)?) {
            return Ok(false);
        }

        Ok(!self.bounds_allowed(&bounded))
    }

    /// Whether the bounded wildcards alone are enough to accept the return type.
    fn bounds_allowed(&self, bounded: &[Node<'_>]) -> bool {
        let has_upper = bounded
            .iter()
            .any(|a| wildcard_bound(*a) == Some(WildcardBound::Upper));
        let has_lower = bounded
            .iter()
            .any(|a| wildcard_bound(*a) == Some(WildcardBound::Lower));

        let only_upper = has_upper && !has_lower;
        let only_lower = has_lower && !has_upper;
        let any_bounded = has_upper || has_lower;

        let extends = self.config.allow_wildcard_with_extends;
        let sup = self.config.allow_wildcard_with_super;

        (extends && sup && any_bounded) || (extends && only_upper) || (sup && only_lower)
    }
}

impl Rule for ForbidWildcardAsReturnType {
    fn name(&self) -> &'static str {
        NAME
    }

    fn key(&self) -> &'static str {
        KEY
    }

    fn message(&self) -> &'static str {
        "Wildcard type used as method return type"
    }

    fn description(&self) -> &'static str {
        "Forbids wildcard generic arguments in method return types"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn interests(&self) -> &'static [NodeKind] {
        &[NodeKind::MethodDeclaration]
    }

    fn visit(&self, node: Node<'_>) -> Result<Option<Diagnostic>, StructuralInvariantViolation> {
        Ok(self
            .violates(node)?
            .then(|| Diagnostic::new(node.line(), KEY)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use javalint_core::build::{
        class, generic_type, interface, lower_bounded_wildcard, method, simple_type, type_argument,
        unbounded_wildcard, upper_bounded_wildcard,
    };
    use javalint_core::{RuleWalker, SyntaxNode, SyntaxTree};

    fn check_with(config: WildcardReturnConfig, members: Vec<SyntaxNode>) -> Vec<Diagnostic> {
        let rule = ForbidWildcardAsReturnType::new(config).expect("valid config");
        let tree = SyntaxTree::new(class("Sample", 1, members));
        RuleWalker::new().rule(&rule).walk(&tree).expect("well-formed tree")
    }

    fn check(members: Vec<SyntaxNode>) -> Vec<Diagnostic> {
        check_with(WildcardReturnConfig::default(), members)
    }

    fn foo(args: Vec<SyntaxNode>) -> SyntaxNode {
        generic_type("Foo", 3, args)
    }

    fn public_method(return_type: SyntaxNode) -> SyntaxNode {
        method("bar", 3, &["public"], &[], return_type)
    }

    #[test]
    fn test_detects_unbounded_wildcard() {
        let diagnostics = check(vec![public_method(foo(vec![unbounded_wildcard(3)]))]);
        assert_eq!(diagnostics, vec![Diagnostic::new(3, KEY)]);
    }

    #[test]
    fn test_allows_upper_bound_when_enabled() {
        let diagnostics = check_with(
            WildcardReturnConfig::default().allow_wildcard_with_extends(true),
            vec![public_method(foo(vec![upper_bounded_wildcard("Number", 3)]))],
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_ignores_private_by_default() {
        let diagnostics = check(vec![method(
            "bar",
            3,
            &["private"],
            &[],
            foo(vec![unbounded_wildcard(3)]),
        )]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_checks_private_when_enabled() {
        let diagnostics = check_with(
            WildcardReturnConfig::default().check_private_methods(true),
            vec![method(
                "bar",
                3,
                &["private"],
                &[],
                foo(vec![unbounded_wildcard(3)]),
            )],
        );
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_comparator_is_exempt() {
        let diagnostics = check(vec![method(
            "compare",
            3,
            &["public"],
            &[],
            generic_type("Comparator", 3, vec![unbounded_wildcard(3)]),
        )]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_ignore_pattern_is_full_match() {
        let diagnostics = check(vec![method(
            "compare",
            3,
            &["public"],
            &[],
            generic_type("MyComparator", 3, vec![unbounded_wildcard(3)]),
        )]);
        assert_eq!(diagnostics.len(), 1);

        let diagnostics = check_with(
            WildcardReturnConfig::default().ignore_pattern("Foo|Bar"),
            vec![public_method(foo(vec![unbounded_wildcard(3)]))],
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_override_is_exempt_regardless_of_bounds() {
        let decl = method(
            "bar",
            3,
            &["public"],
            &["Override"],
            foo(vec![lower_bounded_wildcard("Number", 3)]),
        );
        assert!(check(vec![decl.clone()]).is_empty());

        let diagnostics = check_with(
            WildcardReturnConfig::default().check_override_methods(true),
            vec![decl],
        );
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_deprecated_is_exempt_by_default() {
        let decl = method(
            "bar",
            3,
            &["public"],
            &["Deprecated"],
            foo(vec![unbounded_wildcard(3)]),
        );
        assert!(check(vec![decl.clone()]).is_empty());
        let diagnostics = check_with(
            WildcardReturnConfig::default().check_deprecated_methods(true),
            vec![decl],
        );
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_mixed_bounds_with_only_extends_allowed() {
        let diagnostics = check_with(
            WildcardReturnConfig::default().allow_wildcard_with_extends(true),
            vec![public_method(foo(vec![
                upper_bounded_wildcard("Number", 3),
                lower_bounded_wildcard("Number", 3),
            ]))],
        );
        assert_eq!(diagnostics, vec![Diagnostic::new(3, KEY)]);
    }

    #[test]
    fn test_both_bounds_allowed_exempts_any_bounded() {
        let config = WildcardReturnConfig::default()
            .allow_wildcard_with_extends(true)
            .allow_wildcard_with_super(true);
        for args in [
            vec![upper_bounded_wildcard("Number", 3)],
            vec![lower_bounded_wildcard("Number", 3)],
            vec![
                upper_bounded_wildcard("Number", 3),
                lower_bounded_wildcard("Number", 3),
            ],
            vec![upper_bounded_wildcard("Number", 3), unbounded_wildcard(3)],
        ] {
            assert!(check_with(config.clone(), vec![public_method(foo(args))]).is_empty());
        }
    }

    #[test]
    fn test_bound_flags_never_exempt_unbounded_only() {
        let config = WildcardReturnConfig::default()
            .allow_wildcard_with_extends(true)
            .allow_wildcard_with_super(true);
        let diagnostics = check_with(
            config,
            vec![public_method(foo(vec![
                unbounded_wildcard(3),
                unbounded_wildcard(3),
            ]))],
        );
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_super_only_allowed() {
        let config = WildcardReturnConfig::default().allow_wildcard_with_super(true);
        let lower = check_with(
            config.clone(),
            vec![public_method(foo(vec![lower_bounded_wildcard("Integer", 3)]))],
        );
        assert!(lower.is_empty());

        let upper = check_with(
            config,
            vec![public_method(foo(vec![upper_bounded_wildcard("Integer", 3)]))],
        );
        assert_eq!(upper.len(), 1);
    }

    #[test]
    fn test_no_type_arguments_never_flagged() {
        let everything = WildcardReturnConfig::default()
            .check_private_methods(true)
            .check_override_methods(true)
            .check_deprecated_methods(true);
        let diagnostics = check_with(
            everything,
            vec![
                public_method(simple_type("Foo", 3)),
                method("baz", 4, &["private"], &["Override"], simple_type("int", 4)),
                public_method(foo(vec![type_argument(simple_type("String", 3))])),
            ],
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_nested_wildcard_not_flagged() {
        let diagnostics = check(vec![public_method(foo(vec![type_argument(generic_type(
            "List",
            3,
            vec![unbounded_wildcard(3)],
        ))]))]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_interface_methods_are_public() {
        let rule = ForbidWildcardAsReturnType::with_defaults().unwrap();
        let tree = SyntaxTree::new(interface(
            "Api",
            1,
            vec![method("bar", 2, &[], &[], foo(vec![unbounded_wildcard(2)]))],
        ));
        let diagnostics = RuleWalker::new().rule(&rule).walk(&tree).unwrap();
        assert_eq!(diagnostics, vec![Diagnostic::new(2, KEY)]);

        let rule = ForbidWildcardAsReturnType::new(
            WildcardReturnConfig::default().check_public_methods(false),
        )
        .unwrap();
        assert!(RuleWalker::new().rule(&rule).walk(&tree).unwrap().is_empty());
    }

    #[test]
    fn test_private_method_of_anonymous_class_in_interface_is_skipped() {
        let anonymous = SyntaxNode::new(NodeKind::Other, 3).with_child(
            SyntaxNode::new(NodeKind::ObjectBlock, 3).with_child(method(
                "g",
                4,
                &["private"],
                &[],
                foo(vec![unbounded_wildcard(4)]),
            )),
        );
        let mut default_method = method("f", 2, &["default"], &[], simple_type("Object", 2));
        default_method.children.push(anonymous);

        let rule = ForbidWildcardAsReturnType::with_defaults().unwrap();
        let tree = SyntaxTree::new(interface("Api", 1, vec![default_method]));
        assert!(RuleWalker::new().rule(&rule).walk(&tree).unwrap().is_empty());
    }

    #[test]
    fn test_one_diagnostic_per_declaration() {
        let diagnostics = check(vec![
            public_method(foo(vec![
                unbounded_wildcard(3),
                upper_bounded_wildcard("A", 3),
                lower_bounded_wildcard("B", 3),
            ])),
            method("qux", 7, &[], &[], foo(vec![unbounded_wildcard(7)])),
        ]);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::new(3, KEY), Diagnostic::new(7, KEY)]
        );
    }

    #[test]
    fn test_rule_is_pure() {
        let rule = ForbidWildcardAsReturnType::with_defaults().unwrap();
        let tree = SyntaxTree::new(class(
            "Sample",
            1,
            vec![public_method(foo(vec![unbounded_wildcard(3)]))],
        ));
        let decl = tree
            .pre_order()
            .find(|n| n.kind() == NodeKind::MethodDeclaration)
            .unwrap();
        assert_eq!(rule.visit(decl).unwrap(), rule.visit(decl).unwrap());
    }

    #[test]
    fn test_method_outside_type_is_structural_error() {
        let rule = ForbidWildcardAsReturnType::with_defaults().unwrap();
        let tree = SyntaxTree::new(public_method(foo(vec![unbounded_wildcard(3)])));
        assert!(RuleWalker::new().rule(&rule).walk(&tree).is_err());
    }

    #[test]
    fn test_invalid_pattern_fails_fast() {
        let err = ForbidWildcardAsReturnType::new(
            WildcardReturnConfig::default().ignore_pattern("(Comparator"),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidPattern { .. }));
    }

    #[test]
    fn test_from_rule_config() {
        let table = RuleConfig::default()
            .with_option("check_private_methods", true)
            .with_option("allow_return_wildcard_with_super", true)
            .with_option("return_type_class_names_ignore_regex", "Foo");
        let rule = ForbidWildcardAsReturnType::from_rule_config(&table).unwrap();
        assert_eq!(
            rule.config(),
            &WildcardReturnConfig::default()
                .check_private_methods(true)
                .allow_wildcard_with_super(true)
                .ignore_pattern("Foo")
        );

        let bad = RuleConfig::default().with_option("check_public_methods", 1);
        assert!(matches!(
            ForbidWildcardAsReturnType::from_rule_config(&bad),
            Err(ConfigurationError::InvalidOption { .. })
        ));
    }
}
