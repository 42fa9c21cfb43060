//! Settings command implementation

use colored::Colorize;
use leitstand_core::Leitstand;

use crate::error::Result;

/// Print the resolved settings and the paths they point to.
pub fn run_settings(leitstand: &Leitstand) -> Result<()> {
    let root = leitstand.root();
    let settings = leitstand.settings();

    println!("{}", "Settings".bold());
    println!();
    println!("{}:        {}", "Root".dimmed(), root);
    println!(
        "{}: {} ({})",
        "Modules dir".dimmed(),
        settings.modules_dir.cyan(),
        settings.modules_path(root)
    );
    println!(
        "{}: {} ({})",
        "Contrib dir".dimmed(),
        settings.contrib_dir.cyan(),
        settings.contrib_path(root)
    );
    println!(
        "{}:   {} ({})",
        "Main menu".dimmed(),
        settings.main_menu.cyan(),
        settings.main_menu_path(root)
    );
    Ok(())
}
