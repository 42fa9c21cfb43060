//! Leitstand UI CLI
//!
//! Inspects the merged UI metadata of a Leitstand installation.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use leitstand_core::Leitstand;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        // No command provided - show help hint
        println!("{} Leitstand UI CLI", "leitstand".green().bold());
        println!();
        println!("Run {} for available commands.", "leitstand --help".cyan());
        return Ok(());
    };

    if let Commands::Completions { shell } = command {
        commands::run_completions(shell);
        return Ok(());
    }

    let leitstand = Leitstand::open(cli.root.as_path())?;
    execute_command(&leitstand, command)
}

/// Log to stderr so command output on stdout stays machine-readable.
fn init_tracing(verbose: bool) {
    let result = if verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    };
    if let Err(e) = result {
        eprintln!("{}: failed to set tracing subscriber: {e}", "warning".yellow());
    }
    tracing::debug!("Verbose mode enabled");
}

fn execute_command(leitstand: &Leitstand, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Module { name, output } => {
            commands::run_module(leitstand, &name, output.as_deref())
        }
        Commands::MainMenu { json } => commands::run_main_menu(leitstand, json),
        Commands::Welcome => commands::run_welcome(leitstand),
        Commands::Contributions => commands::run_contributions(leitstand),
        Commands::Settings => commands::run_settings(leitstand),
        Commands::Completions { shell } => {
            commands::run_completions(shell);
            Ok(())
        }
    }
}
