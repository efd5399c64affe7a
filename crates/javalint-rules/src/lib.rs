//! # javalint-rules
//!
//! Built-in lint rules for javalint.
//!
//! ## Available Rules
//!
//! | Key | Name | Description |
//! |-----|------|-------------|
//! | `forbid.wildcard.as.return.type` | `forbid-wildcard-as-return-type` | Forbids wildcard type arguments in method return types |
//! | `logging.count.check` | `logger-declarations-count` | Allows one logger field per class or enum |
//! | `logging.placeholder.count` | `log-message-placeholder-count` | Matches `{}` placeholders with log arguments |
//!
//! ## Usage
//!
//! ```ignore
//! use javalint_core::Analyzer;
//! use javalint_rules::{ForbidWildcardAsReturnType, WildcardReturnConfig};
//!
//! let rule = ForbidWildcardAsReturnType::new(
//!     WildcardReturnConfig::default().allow_wildcard_with_extends(true),
//! )?;
//! let analyzer = Analyzer::builder().rule(rule).build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod forbid_wildcard_as_return_type;
pub mod log_message_placeholder_count;
pub mod logger_declarations_count;
mod logging;
mod presets;
mod registry;

pub use forbid_wildcard_as_return_type::{ForbidWildcardAsReturnType, WildcardReturnConfig};
pub use log_message_placeholder_count::LogMessagePlaceholderCount;
pub use logger_declarations_count::LoggerDeclarationsCount;
pub use presets::{minimal_rules, recommended_rules, strict_rules, Preset};
pub use registry::{build_rules, rule_names, RuleSet};

/// Re-export core types for convenience.
pub use javalint_core::{Rule, Severity, Violation};
