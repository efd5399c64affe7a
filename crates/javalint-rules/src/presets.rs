//! Rule presets for common configurations.

use crate::{
    ForbidWildcardAsReturnType, LogMessagePlaceholderCount, LoggerDeclarationsCount,
    WildcardReturnConfig,
};
use javalint_core::{ConfigurationError, RuleBox};

/// Preset configurations for javalint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Recommended rules with sensible defaults.
    Recommended,
    /// Strict rules that also check private, overriding and deprecated methods.
    Strict,
    /// Wildcard return types only.
    Minimal,
}

impl Preset {
    /// Returns the rules for this preset.
    ///
    /// # Errors
    ///
    /// Returns an error if a rule's built-in options fail to compile.
    pub fn rules(self) -> Result<Vec<RuleBox>, ConfigurationError> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Strict => strict_rules(),
            Self::Minimal => minimal_rules(),
        }
    }
}

/// Returns the recommended set of rules.
///
/// Includes:
/// - `forbid-wildcard-as-return-type` with default options
/// - `logger-declarations-count`
/// - `log-message-placeholder-count`
///
/// # Errors
///
/// Returns an error if a rule's built-in options fail to compile.
pub fn recommended_rules() -> Result<Vec<RuleBox>, ConfigurationError> {
    let rules: Vec<RuleBox> = vec![
        Box::new(ForbidWildcardAsReturnType::with_defaults()?),
        Box::new(LoggerDeclarationsCount::new()),
        Box::new(LogMessagePlaceholderCount::new()),
    ];
    Ok(rules)
}

/// Returns the strict set of rules.
///
/// Like [`recommended_rules`], but the wildcard rule checks every method
/// regardless of visibility or annotations.
///
/// # Errors
///
/// Returns an error if a rule's built-in options fail to compile.
pub fn strict_rules() -> Result<Vec<RuleBox>, ConfigurationError> {
    let wildcard = WildcardReturnConfig::default()
        .check_private_methods(true)
        .check_override_methods(true)
        .check_deprecated_methods(true);
    let rules: Vec<RuleBox> = vec![
        Box::new(ForbidWildcardAsReturnType::new(wildcard)?),
        Box::new(LoggerDeclarationsCount::new()),
        Box::new(LogMessagePlaceholderCount::new()),
    ];
    Ok(rules)
}

/// Returns the minimal set of rules.
///
/// # Errors
///
/// Returns an error if a rule's built-in options fail to compile.
pub fn minimal_rules() -> Result<Vec<RuleBox>, ConfigurationError> {
    let rules: Vec<RuleBox> = vec![Box::new(ForbidWildcardAsReturnType::with_defaults()?)];
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_rules() {
        assert_eq!(Preset::Recommended.rules().unwrap().len(), 3);
        assert_eq!(Preset::Strict.rules().unwrap().len(), 3);
        assert_eq!(Preset::Minimal.rules().unwrap().len(), 1);
    }
}
