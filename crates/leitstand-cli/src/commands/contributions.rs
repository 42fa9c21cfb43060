//! Contributions command implementation

use std::collections::BTreeSet;

use colored::Colorize;
use leitstand_core::Leitstand;

use crate::error::Result;

/// List the loaded contributions with their target modules.
pub fn run_contributions(leitstand: &Leitstand) -> Result<()> {
    let contributions = leitstand.contributions();

    println!("{}", "Contributions".bold());
    println!();
    if contributions.is_empty() {
        println!("  {}", "None".dimmed());
        return Ok(());
    }

    for contribution in contributions {
        let name = contribution
            .name()
            .or(contribution.base_uri())
            .unwrap_or("<unnamed>");
        let targets: BTreeSet<&str> = contribution
            .extensions()
            .iter()
            .map(|e| e.point().module.as_str())
            .collect();
        let targets: Vec<&str> = targets.into_iter().collect();

        let marker = if contribution.is_new_module() {
            " (new module)".yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "  {} {}{} -> {} ({} extensions)",
            "+".green(),
            name.cyan(),
            marker,
            targets.join(", "),
            contribution.extensions().len()
        );
    }
    Ok(())
}
