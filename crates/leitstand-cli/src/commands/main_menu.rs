//! Main menu and welcome command implementations

use colored::Colorize;
use leitstand_core::Leitstand;

use crate::error::{CliError, Result};

const VIEWS_PREFIX: &str = "/ui/views";

/// List the main menu entries, or print them as JSON.
pub fn run_main_menu(leitstand: &Leitstand, json: bool) -> Result<()> {
    let menu = leitstand.main_menu();
    if json {
        println!("{}", serde_json::to_string_pretty(menu)?);
        return Ok(());
    }

    println!("{}", "Main Menu".bold());
    println!();
    if menu.is_empty() {
        println!("  {}", "No modules".dimmed());
        return Ok(());
    }
    for item in menu.items() {
        println!(
            "  {} {} {} {}",
            "+".green(),
            item.module().cyan(),
            item.label(),
            item.path().dimmed()
        );
    }
    Ok(())
}

/// Print the view path of the welcome module.
pub fn run_welcome(leitstand: &Leitstand) -> Result<()> {
    let item = leitstand
        .welcome_module()
        .ok_or_else(|| CliError::user("No welcome module found: the main menu is empty"))?;
    println!("{}", welcome_view(item.path()));
    Ok(())
}

fn welcome_view(path: &str) -> String {
    if path.starts_with('/') {
        format!("{VIEWS_PREFIX}{path}")
    } else {
        format!("{VIEWS_PREFIX}/{path}")
    }
}
