//! Command-line surface for stockist.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use stockist_core::{
    config::Config, normalizer::parse_features, normalizer::parse_specifications_with,
    SeparatorStyle, SpecOptions,
};

#[derive(Parser, Debug)]
#[command(name = "stockist", about = "Stockist — product text normalization for the storefront")]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/stockist/config.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level (overridden by RUST_LOG).
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Normalize feature text and print it as a JSON array.
    Features {
        /// Read from this file instead of stdin.
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Normalize specification text and print it as a JSON object.
    Specs {
        /// Read from this file instead of stdin.
        #[arg(long)]
        input: Option<PathBuf>,
        /// Also accept `-` and `=` as key/value separators.
        #[arg(long)]
        lenient: bool,
    },
    /// Serve the HTTP API.
    Serve {
        /// Address to bind, overriding `server.bind`.
        #[arg(long)]
        bind: Option<String>,
    },
}

/// Run `cli`, writing command output to stdout.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Features { input } => {
            let raw = read_input(input.as_deref())?;
            println!("{}", render_features(&raw)?);
        }
        Command::Specs { input, lenient } => {
            let raw = read_input(input.as_deref())?;
            println!("{}", render_specifications(&raw, &config, lenient)?);
        }
        Command::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            let state = stockist_http::AppState::new(config);
            stockist_http::serve(state, &bind).await?;
        }
    }
    Ok(())
}

pub fn render_features(raw: &str) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&parse_features(raw))?)
}

pub fn render_specifications(raw: &str, config: &Config, lenient: bool) -> anyhow::Result<String> {
    let separators = if lenient {
        SeparatorStyle::Lenient
    } else {
        SeparatorStyle::ColonOnly
    };
    let options = SpecOptions::from(&config.normalizer).with_separators(separators);
    Ok(serde_json::to_string_pretty(&parse_specifications_with(raw, &options))?)
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}
