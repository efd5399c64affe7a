//! Core analyzer for orchestrating lint execution over many source units.

use crate::config::Config;
use crate::error::{AnalyzerError, StructuralInvariantViolation};
use crate::rule::{Rule, RuleBox};
use crate::syntax::SyntaxTree;
use crate::types::{Diagnostic, LintResult, Location, UnitFailure, Violation};
use crate::walker::RuleWalker;

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// One source file's tree, as handed over by a front-end.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    /// Path of the source file the tree was built from.
    pub path: PathBuf,
    /// The tree.
    pub tree: SyntaxTree,
}

impl SourceUnit {
    /// Creates a unit from an already built tree.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, tree: SyntaxTree) -> Self {
        Self {
            path: path.into(),
            tree,
        }
    }

    /// Reads a JSON-serialized tree from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold a tree.
    pub fn from_json_file(path: &Path) -> Result<Self, AnalyzerError> {
        let content = std::fs::read_to_string(path)?;
        let tree = SyntaxTree::from_json(&content).map_err(|e| AnalyzerError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Self::new(path, tree))
    }
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
    fail_on_structural_error: Option<bool>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether a malformed tree aborts the whole run
    /// (default: taken from the configuration, otherwise false).
    #[must_use]
    pub fn fail_on_structural_error(mut self, fail: bool) -> Self {
        self.fail_on_structural_error = Some(fail);
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker pool cannot be created.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();
        let fail_on_structural_error = self
            .fail_on_structural_error
            .unwrap_or(config.analyzer.fail_on_structural_error);

        let pool = match config.analyzer.parallelism {
            Some(threads) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?,
            ),
            None => None,
        };

        Ok(Analyzer {
            rules: self.rules,
            config,
            fail_on_structural_error,
            pool,
        })
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Every unit gets its own [`RuleWalker`] over the shared, immutable rules,
/// so units are analyzed in parallel.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    rules: Vec<RuleBox>,
    config: Config,
    fail_on_structural_error: bool,
    pool: Option<rayon::ThreadPool>,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Analyzes all units and returns the results.
    ///
    /// A malformed tree aborts only its own unit, which is recorded in
    /// [`LintResult::failures`]; findings of other units are kept.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Structural`] for the first malformed unit if
    /// the analyzer was built to fail on structural errors.
    pub fn analyze(&self, units: &[SourceUnit]) -> Result<LintResult, AnalyzerError> {
        info!("Analyzing {} units with {} rules", units.len(), self.rules.len());

        let active: Vec<&dyn Rule> = self
            .rules
            .iter()
            .map(|rule| &**rule)
            .filter(|rule| {
                let enabled = self.config.is_rule_enabled(rule.name());
                if !enabled {
                    debug!("Skipping disabled rule: {}", rule.name());
                }
                enabled
            })
            .collect();

        let run = || -> Vec<Result<Vec<Violation>, StructuralInvariantViolation>> {
            units
                .par_iter()
                .map(|unit| self.analyze_unit(&active, unit))
                .collect()
        };
        let outcomes = match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        };

        let mut result = LintResult::new();
        for (unit, outcome) in units.iter().zip(outcomes) {
            match outcome {
                Ok(violations) => {
                    result.violations.extend(violations);
                    result.files_checked += 1;
                }
                Err(source) => {
                    warn!("Aborted {}: {}", unit.path.display(), source);
                    if self.fail_on_structural_error {
                        return Err(AnalyzerError::Structural {
                            path: unit.path.clone(),
                            source,
                        });
                    }
                    result.failures.push(UnitFailure {
                        file: unit.path.clone(),
                        message: source.to_string(),
                    });
                }
            }
        }

        // Stable: rules keep their registration order on a shared line.
        result.violations.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
        });

        info!(
            "Analysis complete: {} violations in {} files, {} aborted",
            result.violations.len(),
            result.files_checked,
            result.failures.len()
        );

        Ok(result)
    }

    fn analyze_unit(
        &self,
        rules: &[&dyn Rule],
        unit: &SourceUnit,
    ) -> Result<Vec<Violation>, StructuralInvariantViolation> {
        debug!("Analyzing: {}", unit.path.display());

        let mut violations = Vec::new();
        RuleWalker::new()
            .rules(rules.iter().copied())
            .walk_with(&unit.tree, |rule, diagnostic| {
                violations.push(self.to_violation(rule, &unit.path, diagnostic));
            })?;
        Ok(violations)
    }

    /// Applies severity overrides from configuration.
    fn to_violation(&self, rule: &dyn Rule, path: &Path, diagnostic: Diagnostic) -> Violation {
        let severity = self
            .config
            .rule_severity(rule.name())
            .unwrap_or_else(|| rule.default_severity());
        Violation::new(
            diagnostic.rule_key,
            rule.name(),
            severity,
            Location::new(path.to_path_buf(), diagnostic.line),
            rule.message(),
        )
    }
}
