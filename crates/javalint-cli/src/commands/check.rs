//! Check command implementation.

use anyhow::{Context, Result};
use javalint_core::{
    Analyzer, Config, ConfigurationError, LintResult, RuleBox, Severity, SourceUnit, UnitFailure,
};
use javalint_rules::{build_rules, rule_names};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    paths: &[PathBuf],
    format: OutputFormat,
    rules_filter: Option<String>,
    source: &ConfigSource,
) -> Result<()> {
    let config = load_config(source)?;
    let fail_on = config.fail_on();

    let outcome = execute(paths, rules_filter.as_deref(), config)?;
    let failed = outcome.should_fail(fail_on);

    super::output::print(&outcome.result, format)?;
    for err in outcome.rejected {
        eprintln!("{:?}", miette::Report::new(err));
    }

    if failed {
        std::process::exit(1);
    }

    Ok(())
}

/// Result of a check run together with the rules that could not be built.
#[derive(Debug)]
pub struct CheckOutcome {
    /// Findings and unit failures.
    pub result: LintResult,
    /// Rules left out because their configuration was rejected.
    pub rejected: Vec<ConfigurationError>,
}

impl CheckOutcome {
    /// A run fails on a violation at or above `fail_on`, a unit failure,
    /// or a rule that never ran because its configuration was rejected.
    #[must_use]
    pub fn should_fail(&self, fail_on: Severity) -> bool {
        self.result.has_violations_at(fail_on)
            || !self.result.failures.is_empty()
            || !self.rejected.is_empty()
    }
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    match source.path() {
        None => Ok(Config::default()),
        Some(p) => {
            tracing::info!("Using config: {}", p.display());
            Config::from_file(p).with_context(|| format!("Failed to load config: {}", p.display()))
        }
    }
}

/// Loads every tree under `paths` and analyzes it.
///
/// Rules whose configuration is rejected are left out and returned in
/// [`CheckOutcome::rejected`]; tree files that cannot be decoded are
/// recorded as failures.
pub fn execute(
    paths: &[PathBuf],
    rules_filter: Option<&str>,
    config: Config,
) -> Result<CheckOutcome> {
    let set = build_rules(&config);

    let rules = match rules_filter {
        Some(filter) => {
            let names: Vec<&str> = filter.split(',').map(str::trim).collect();
            filter_rules(set.rules, &names)
        }
        None => set.rules,
    };

    let mut builder = Analyzer::builder().config(config);
    for rule in rules {
        builder = builder.rule_box(rule);
    }
    let analyzer = builder.build().context("Failed to build analyzer")?;

    let (units, unreadable) = load_units(paths)?;
    tracing::info!(
        "Analyzing {} trees with {} rules",
        units.len(),
        analyzer.rule_count()
    );

    let mut result = analyzer.analyze(&units).context("Analysis failed")?;
    result.failures.extend(unreadable);
    Ok(CheckOutcome {
        result,
        rejected: set.rejected,
    })
}

fn filter_rules(rules: Vec<RuleBox>, names: &[&str]) -> Vec<RuleBox> {
    let known = rule_names();
    for name in names {
        if !known.iter().any(|k| k == name) {
            tracing::warn!("Unknown rule: {}", name);
        }
    }
    rules
        .into_iter()
        .filter(|rule| names.contains(&rule.name()))
        .collect()
}

/// Collects `*.json` tree files, walking directories in file-name order.
fn tree_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }
        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry =
                entry.with_context(|| format!("Failed to walk directory: {}", path.display()))?;
            if entry.file_type().is_file() && is_tree_file(entry.path()) {
                files.push(entry.into_path());
            }
        }
    }
    Ok(files)
}

fn is_tree_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

fn load_units(paths: &[PathBuf]) -> Result<(Vec<SourceUnit>, Vec<UnitFailure>)> {
    let mut units = Vec::new();
    let mut unreadable = Vec::new();
    for file in tree_files(paths)? {
        match SourceUnit::from_json_file(&file) {
            Ok(unit) => units.push(unit),
            Err(err) => {
                tracing::warn!("Skipping {}: {}", file.display(), err);
                unreadable.push(UnitFailure {
                    file,
                    message: err.to_string(),
                });
            }
        }
    }
    Ok((units, unreadable))
}

#[cfg(test)]
mod tests {
    use super::*;
    use javalint_core::build::{class, compilation_unit, generic_type, method, unbounded_wildcard};
    use javalint_core::SyntaxNode;
    use std::fs;
    use tempfile::TempDir;

    fn write_tree(dir: &Path, name: &str, root: &SyntaxNode) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, serde_json::to_string(root).unwrap()).unwrap();
        path
    }

    fn wildcard_unit(line: usize) -> SyntaxNode {
        compilation_unit(vec![class(
            "Sample",
            1,
            vec![method(
                "items",
                line,
                &["public"],
                &[],
                generic_type("List", line, vec![unbounded_wildcard(line)]),
            )],
        )])
    }

    #[test]
    fn test_walks_directories_for_json_trees() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("nested");
        fs::create_dir(&nested).unwrap();
        write_tree(tmp.path(), "B.json", &wildcard_unit(3));
        write_tree(&nested, "A.json", &wildcard_unit(4));
        fs::write(tmp.path().join("notes.txt"), "ignored").unwrap();

        let result = execute(&[tmp.path().to_path_buf()], None, Config::default())
            .unwrap()
            .result;

        assert_eq!(result.files_checked, 2);
        assert_eq!(result.violations.len(), 2);
        assert!(result.has_errors());
    }

    #[test]
    fn test_undecodable_tree_recorded_as_failure() {
        let tmp = TempDir::new().unwrap();
        write_tree(tmp.path(), "Good.json", &wildcard_unit(3));
        fs::write(tmp.path().join("Bad.json"), "{ not a tree").unwrap();

        let outcome = execute(&[tmp.path().to_path_buf()], None, Config::default()).unwrap();
        assert!(outcome.should_fail(Severity::Error));

        let result = outcome.result;
        assert_eq!(result.files_checked, 1);
        assert_eq!(result.failures.len(), 1);
        assert!(result.failures[0].file.ends_with("Bad.json"));
    }

    #[test]
    fn test_rules_filter() {
        let tmp = TempDir::new().unwrap();
        let file = write_tree(tmp.path(), "A.json", &wildcard_unit(3));

        let result = execute(
            &[file.clone()],
            Some("logger-declarations-count"),
            Config::default(),
        )
        .unwrap()
        .result;
        assert!(result.violations.is_empty());

        let result = execute(
            &[file],
            Some("forbid-wildcard-as-return-type, nope"),
            Config::default(),
        )
        .unwrap()
        .result;
        assert_eq!(result.violations.len(), 1);
    }

    #[test]
    fn test_rejected_rule_does_not_stop_others() {
        let tmp = TempDir::new().unwrap();
        let file = write_tree(tmp.path(), "A.json", &wildcard_unit(3));
        let config = Config::parse(
            "[rules.forbid-wildcard-as-return-type]\ncheck_public_methods = \"yes\"\n",
        )
        .unwrap();

        let outcome = execute(&[file], None, config).unwrap();
        assert_eq!(outcome.result.files_checked, 1);
        assert!(outcome.result.violations.is_empty());
        assert_eq!(outcome.rejected.len(), 1);
        assert!(outcome.should_fail(Severity::Error));
    }

    #[test]
    fn test_invalid_ignore_pattern_fails_the_run() {
        let tmp = TempDir::new().unwrap();
        let file = write_tree(tmp.path(), "A.json", &wildcard_unit(3));
        let config = Config::parse(
            "[rules.forbid-wildcard-as-return-type]\nreturn_type_class_names_ignore_regex = \"(bad\"\n",
        )
        .unwrap();

        let outcome = execute(&[file], None, config).unwrap();
        assert!(outcome.result.violations.is_empty());
        assert!(outcome.result.failures.is_empty());
        assert!(matches!(
            outcome.rejected[..],
            [ConfigurationError::InvalidPattern { .. }]
        ));
        assert!(outcome.should_fail(Severity::Error));
    }

    #[test]
    fn test_clean_run_does_not_fail() {
        let tmp = TempDir::new().unwrap();
        let file = write_tree(tmp.path(), "A.json", &wildcard_unit(3));
        let config = Config::parse("[rules.forbid-wildcard-as-return-type]\nenabled = false\n")
            .unwrap();

        let outcome = execute(&[file], None, config).unwrap();
        assert!(outcome.rejected.is_empty());
        assert!(!outcome.should_fail(Severity::Info));
    }

    #[test]
    fn test_load_config_from_source() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("javalint.toml");
        fs::write(&path, "fail_on = \"warning\"\n").unwrap();

        let config = load_config(&ConfigSource::Project(path)).unwrap();
        assert_eq!(config.fail_on(), Severity::Warning);
        assert!(load_config(&ConfigSource::Explicit(tmp.path().join("missing.toml"))).is_err());
    }
}
