//! List rules command implementation.

use loglint_core::Config;
use loglint_rules::rules_from_config;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<20} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in rules_from_config(&Config::default()).unwrap_or_default() {
        println!(
            "{:<10} {:<20} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nPer-check flags for `loglint check`:");
    println!("  --lowercase <BOOL>        messages must start with a lowercase letter");
    println!("  --english <BOOL>          messages must contain only English letters");
    println!("  --special <BOOL>          messages must avoid special characters");
    println!("  --sensitive <BOOL>        arguments must not look like sensitive data");
    println!("  --sensitive-words a,b,c   extra sensitive words (appended to defaults)");
}
