//! Module command implementation

use std::path::Path;

use colored::Colorize;
use leitstand_core::Leitstand;
use leitstand_fs::{ConfigStore, NormalizedPath};

use crate::error::{CliError, Result};

/// Print the merged descriptor of `name`, or write it to `output`.
pub fn run_module(leitstand: &Leitstand, name: &str, output: Option<&Path>) -> Result<()> {
    let descriptor = leitstand
        .module_descriptor(name)?
        .ok_or_else(|| CliError::user(format!("Module '{name}' not found")))?;

    match output {
        Some(path) => {
            let path = NormalizedPath::new(path);
            ConfigStore::new().save(&path, descriptor.as_ref())?;
            println!(
                "{} Wrote module {} to {}",
                "OK".green().bold(),
                name.cyan(),
                path
            );
        }
        None => println!("{}", serde_json::to_string_pretty(descriptor.as_ref())?),
    }
    Ok(())
}
