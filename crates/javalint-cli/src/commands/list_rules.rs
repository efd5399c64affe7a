//! List rules command implementation.

use anyhow::Result;
use javalint_rules::recommended_rules;

/// Runs the list-rules command.
pub fn run() -> Result<()> {
    println!("Available rules:\n");
    println!("{:<32} {:<34} Description", "Key", "Name");
    println!("{}", "-".repeat(100));

    for rule in recommended_rules()? {
        println!(
            "{:<32} {:<34} {}",
            rule.key(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nPresets:");
    println!("  recommended  - all rules with default options (default)");
    println!("  strict       - also checks private, @Override and @Deprecated methods");
    println!("  minimal      - forbid-wildcard-as-return-type only");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  javalint check --rules forbid-wildcard-as-return-type,logger-declarations-count");

    Ok(())
}
