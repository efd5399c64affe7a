//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# javalint configuration

# Lowest severity that makes `javalint check` exit with status 1
fail_on = "error"

[analyzer]
# Worker threads (default: one per CPU)
# parallelism = 4

# Abort the whole run on the first malformed tree
fail_on_structural_error = false

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.forbid-wildcard-as-return-type]
enabled = true
# severity = "warning"  # Override default severity
check_public_methods = true
check_protected_methods = true
check_package_methods = true
check_private_methods = false
check_override_methods = false
check_deprecated_methods = false
allow_return_wildcard_with_extends = false
allow_return_wildcard_with_super = false
return_type_class_names_ignore_regex = "^(Comparator|Comparable)$"

[rules.logger-declarations-count]
enabled = true

[rules.log-message-placeholder-count]
enabled = true
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("javalint.toml"), force)?;

    println!("Created javalint.toml");
    println!("\nNext steps:");
    println!("  1. Edit javalint.toml to configure rules");
    println!("  2. Run: javalint check");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
