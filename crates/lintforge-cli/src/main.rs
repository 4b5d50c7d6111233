//! Lintforge CLI
//!
//! Command-line interface for the lintforge scaffolding toolkit

mod commands;

use clap::{Parser, Subcommand};
use lintforge_core::init_tracing;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

#[derive(Parser)]
#[command(name = "lintforge")]
#[command(about = "Lintforge: merge lint configuration and scaffold ignore files")]
#[command(version = lintforge_core::VERSION)]
#[command(
    long_about = "Lintforge reconciles project scaffolding against canonical templates and\n\
merges partial lint configuration fragments into one effective configuration.\n\
\n\
Examples:\n  \
lintforge ignore sync                     # Reconcile .gitignore against the built-in template\n  \
lintforge ignore sync --target .npmignore # Reconcile .npmignore\n  \
lintforge ignore sync --check             # Fail (exit 1) if the file is out of date\n  \
lintforge config show                     # Print the merged configuration"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile ignore files against canonical templates
    Ignore {
        #[command(subcommand)]
        command: IgnoreCommands,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum IgnoreCommands {
    /// Merge the template into an ignore file, keeping user sections
    Sync {
        /// Ignore file to reconcile (a missing file is created)
        #[arg(long, default_value = ".gitignore")]
        target: PathBuf,

        /// Template file (default: built-in template for the target name)
        #[arg(long)]
        template: Option<PathBuf>,

        /// Append new sections at the end instead of using the managed region
        #[arg(long)]
        no_markers: bool,

        /// Report whether the file would change, without writing it
        #[arg(long)]
        check: bool,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the merged configuration after resolving `extends`
    Show {
        /// Directory to start config discovery from
        #[arg(long, default_value = ".")]
        path: PathBuf,

        /// Explicit configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Ignore {
            command:
                IgnoreCommands::Sync {
                    target,
                    template,
                    no_markers,
                    check,
                },
        } => commands::ignore_sync(&target, template.as_deref(), !no_markers, check),
        Commands::Config {
            command: ConfigCommands::Show { path, config },
        } => commands::config_show(&path, config.as_deref()),
    };

    match outcome {
        Ok(exit) => exit,
        Err(err) => {
            error!("{err:#}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
