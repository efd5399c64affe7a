//! Builds the built-in rules from a [`Config`].

use crate::{
    ForbidWildcardAsReturnType, LogMessagePlaceholderCount, LoggerDeclarationsCount,
    forbid_wildcard_as_return_type, log_message_placeholder_count, logger_declarations_count,
};
use javalint_core::{Config, ConfigurationError, RuleBox, RuleConfig};
use tracing::{debug, warn};

type Factory = fn(&RuleConfig) -> Result<RuleBox, ConfigurationError>;

/// Built-in rules by name, in registration order.
const FACTORIES: &[(&str, Factory)] = &[
    (forbid_wildcard_as_return_type::NAME, wildcard_rule),
    (logger_declarations_count::NAME, logger_count_rule),
    (log_message_placeholder_count::NAME, placeholder_rule),
];

fn wildcard_rule(config: &RuleConfig) -> Result<RuleBox, ConfigurationError> {
    let rule = ForbidWildcardAsReturnType::from_rule_config(config)?;
    Ok(Box::new(rule))
}

fn logger_count_rule(_: &RuleConfig) -> Result<RuleBox, ConfigurationError> {
    Ok(Box::new(LoggerDeclarationsCount::new()))
}

fn placeholder_rule(_: &RuleConfig) -> Result<RuleBox, ConfigurationError> {
    Ok(Box::new(LogMessagePlaceholderCount::new()))
}

/// Names of all built-in rules.
#[must_use]
pub fn rule_names() -> Vec<&'static str> {
    FACTORIES.iter().map(|(name, _)| *name).collect()
}

/// Rules built from a configuration.
#[derive(Default)]
pub struct RuleSet {
    /// Rules that were built successfully.
    pub rules: Vec<RuleBox>,
    /// One error per rule whose configuration was rejected.
    pub rejected: Vec<ConfigurationError>,
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .field("rejected", &self.rejected)
            .finish()
    }
}

/// Builds every enabled built-in rule.
///
/// Each rule is built on its own: a rule with invalid options lands in
/// [`RuleSet::rejected`] and the remaining rules are still returned.
#[must_use]
pub fn build_rules(config: &Config) -> RuleSet {
    let defaults = RuleConfig::default();
    let mut set = RuleSet::default();

    for &(name, factory) in FACTORIES {
        if !config.is_rule_enabled(name) {
            debug!(rule = name, "rule disabled by configuration");
            continue;
        }
        match factory(config.rule(name).unwrap_or(&defaults)) {
            Ok(rule) => set.rules.push(rule),
            Err(err) => {
                warn!(rule = name, error = %err, "rule configuration rejected");
                set.rejected.push(err);
            }
        }
    }

    for name in config.rules.keys() {
        if !FACTORIES.iter().any(|(known, _)| *known == name.as_str()) {
            warn!(rule = %name, "configuration for unknown rule ignored");
        }
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds_all() {
        let set = build_rules(&Config::default());
        assert!(set.rejected.is_empty());
        let names: Vec<&str> = set.rules.iter().map(|r| r.name()).collect();
        assert_eq!(names, rule_names());
    }

    #[test]
    fn test_disabled_rule_skipped() {
        let config = Config::parse(
            r#"
[rules.logger-declarations-count]
enabled = false
"#,
        )
        .unwrap();
        let set = build_rules(&config);
        assert_eq!(set.rules.len(), 2);
        assert!(set
            .rules
            .iter()
            .all(|r| r.name() != logger_declarations_count::NAME));
    }

    #[test]
    fn test_invalid_rule_rejected_others_kept() {
        let config = Config::parse(
            r#"
[rules.forbid-wildcard-as-return-type]
return_type_class_names_ignore_regex = "(unclosed"
"#,
        )
        .unwrap();
        let set = build_rules(&config);
        assert_eq!(set.rejected.len(), 1);
        assert!(matches!(
            set.rejected[0],
            ConfigurationError::InvalidPattern { .. }
        ));
        let names: Vec<&str> = set.rules.iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec![
                logger_declarations_count::NAME,
                log_message_placeholder_count::NAME
            ]
        );
    }
}
