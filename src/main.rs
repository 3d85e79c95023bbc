//! Command-line lookup into the built-in site copy.

use std::io::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use copy_dict::config::{
    ConfigError,
    load_settings,
};
use copy_dict::{
    DictionaryError,
    Vars,
    copy,
};
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Look up strings in the built-in site copy.
#[derive(Debug, Parser)]
#[command(name = "copy-dict", version, about)]
struct Cli {
    /// Dotted paths to look up (e.g. `site.title`)
    #[arg(required_unless_present = "keys")]
    paths: Vec<String>,

    /// Placeholder value, repeatable
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_var)]
    vars: Vec<(String, String)>,

    /// Print whether each path resolves to a string instead of the string itself
    #[arg(long, conflicts_with = "keys")]
    has: bool,

    /// List every path in the copy
    #[arg(long)]
    keys: bool,

    /// Dictionary settings file (JSON)
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,
}

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
enum CliError {
    /// Building the dictionary failed.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// The settings file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing to stdout failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses a `NAME=VALUE` pair.
fn parse_var(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))
}

/// Executes the lookups requested on the command line.
fn run(cli: &Cli) -> Result<(), CliError> {
    let mut dictionary = copy::english()?;
    if let Some(path) = &cli.settings {
        dictionary = dictionary.with_settings(load_settings(path)?)?;
    }

    let mut out = std::io::stdout().lock();

    if cli.keys {
        for key in dictionary.keys() {
            writeln!(out, "{key}")?;
        }
        return Ok(());
    }

    let vars: Vars = cli.vars.iter().cloned().collect();
    for path in &cli.paths {
        if cli.has {
            writeln!(out, "{}", dictionary.has(path))?;
        } else {
            writeln!(out, "{}", dictionary.t_with(path, &vars))?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder().with_default_directive(LevelFilter::WARN.into()).from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
