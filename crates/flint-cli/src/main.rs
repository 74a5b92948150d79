//! Flint CLI - Command-line front end for the Flint asset resolver

mod commands;
mod sink;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::{check, identify, resolve};
use flint_resolver::ResolverConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flint")]
#[command(about = "Resolve asset paths and entity references through a Flint asset manager", long_about = None)]
#[command(version)]
struct Cli {
    /// Resolver config file (skips the global and project layers)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one or more asset paths or entity references
    Resolve {
        /// Asset paths or entity references
        #[arg(required = true)]
        locators: Vec<String>,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = parse_format)]
        format: String,
    },

    /// Print the identifier the resolver assigns to a locator
    Identify {
        /// Asset path or entity reference
        locator: String,

        /// Resolved path of the layer the locator appears in
        #[arg(long)]
        anchor: Option<String>,
    },

    /// Construct the resolver and report the asset manager in use
    Check,
}

fn parse_format(s: &str) -> Result<String, String> {
    match s {
        "text" | "json" => Ok(s.to_string()),
        _ => Err(format!("unknown format '{}'; valid values: text, json", s)),
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<ResolverConfig> {
    let config = match path {
        Some(path) => ResolverConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ResolverConfig::load().context("Failed to load resolver config")?,
    };
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Resolve { locators, format } => resolve::run(&config, &locators, &format),
        Commands::Identify { locator, anchor } => {
            identify::run(&config, &locator, anchor.as_deref())
        }
        Commands::Check => check::run(&config),
    }
}
