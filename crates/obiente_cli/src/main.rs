//! Obiente theme build tool

mod build;
mod config;
mod loader;
mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};
use obiente_theme::ThemeKind;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::ObienteConfig;

#[derive(Parser)]
#[command(
    name = "obiente-themes",
    about = "Build Obiente theme stylesheets, manifests, and runtime assets",
    version
)]
struct Cli {
    /// Path to the config file
    #[arg(short, long, default_value = "obiente.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate per-theme CSS, the manifest, and runtime assets
    Build {
        /// Rebuild whenever the config or theme directory changes
        #[arg(long)]
        watch: bool,
    },
    /// List every registered theme by kind
    List,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Build { watch } => {
            if watch {
                watch::run_watch(&cli.config)
            } else {
                let config = ObienteConfig::load_or_default(&cli.config)?;
                build::run_build(&config)
            }
        }
        Command::List => {
            let config = ObienteConfig::load_or_default(&cli.config)?;
            let registry = build::build_registry(&config)?;
            for kind in [ThemeKind::Base, ThemeKind::Color, ThemeKind::Flair] {
                println!("{kind}:");
                for theme in registry.list_by_kind(kind) {
                    match theme.description() {
                        Some(description) => {
                            println!("  {:<24} {} - {description}", theme.id(), theme.name())
                        }
                        None => println!("  {:<24} {}", theme.id(), theme.name()),
                    }
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_declaration_is_consistent() {
        Cli::command().debug_assert();
    }
}
