//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Leitstand UI - Inspect merged module descriptors and the main menu
#[derive(Parser, Debug)]
#[command(name = "leitstand")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// UI root directory containing leitstand.toml and ui/
    #[arg(long, global = true, env = "LEITSTAND_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show a module descriptor with all contributions merged
    ///
    /// Examples:
    ///   leitstand module inventory
    ///   leitstand module inventory --output inventory.json
    Module {
        /// Module name
        name: String,

        /// Write the descriptor to a file instead of stdout (.json, .yaml or .toml)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the main menu entries
    MainMenu {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the view path of the module shown after login
    Welcome,

    /// List loaded contributions and the modules they extend
    Contributions,

    /// Show the resolved settings
    Settings,

    /// Generate shell completions
    ///
    /// Examples:
    ///   leitstand completions bash > ~/.local/share/bash-completion/completions/leitstand
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
