//! starlog CLI - the interactive catalog console
//!
//! Reads commands from stdin, one per line, and writes reports to stdout.
//! Diagnostics go to stderr through tracing.
//!
//! # Design Philosophy
//!
//! - **Smart defaults**: no default prompt when stdin is not a terminal
//! - **Config then flags**: a JSON config file sets defaults, flags win
//! - **Recoverable input errors**: only startup problems end the process early

// Exclude from coverage - CLI binary tested via integration tests
#![cfg_attr(tarpaulin, ignore)]

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use starlog::core::{Console, ConsoleConfig, OutputFormat, Theme};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::{info, Level};

/// 🌌 starlog: record and browse galaxies, stars, planets and moons.
#[derive(Parser, Debug)]
#[command(name = "starlog")]
#[command(version = starlog::VERSION)]
#[command(about = "🌌 starlog: an interactive catalog of celestial bodies")]
#[command(after_help = "EXAMPLES:
  # Start an interactive session
  starlog

  # Run a script of commands without decorations
  starlog --theme plain < commands.txt

  # Emit one JSON document per report
  starlog --format json --no-banner < commands.txt

Type 'help' inside the console for the command language.
")]
struct Cli {
    // ═══════════════════════════════════════════════════════════════════════════
    // 🔭 CONSOLE
    // ═══════════════════════════════════════════════════════════════════════════

    /// Config file path (JSON)
    #[arg(short = 'c', long = "config", value_name = "FILE", help_heading = "🔭 CONSOLE")]
    config: Option<PathBuf>,

    /// Prompt shown before each command (empty to disable)
    #[arg(long = "prompt", value_name = "TEXT", help_heading = "🔭 CONSOLE")]
    prompt: Option<String>,

    /// Do not print the greeting line
    #[arg(long = "no-banner", help_heading = "🔭 CONSOLE")]
    no_banner: bool,

    // ═══════════════════════════════════════════════════════════════════════════
    // 🎨 OUTPUT
    // ═══════════════════════════════════════════════════════════════════════════

    /// Visual theme [full, minimal, plain]
    #[arg(long = "theme", value_enum, help_heading = "🎨 OUTPUT")]
    theme: Option<ThemeArg>,

    /// Report format [text, json]
    #[arg(long = "format", value_enum, help_heading = "🎨 OUTPUT")]
    format: Option<FormatArg>,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, help_heading = "🎨 OUTPUT")]
    verbose: u8,
}

// =============================================================================
// Argument Enums
// =============================================================================

/// Visual theme.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    /// Emoji markers
    Full,
    /// ASCII markers
    Minimal,
    /// No markers
    Plain,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Full => Theme::Full,
            ThemeArg::Minimal => Theme::Minimal,
            ThemeArg::Plain => Theme::Plain,
        }
    }
}

/// Report format.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// One JSON document per line
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Merge the config file (if any) with command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<ConsoleConfig> {
    let mut config = match &cli.config {
        Some(path) => ConsoleConfig::from_file(path)
            .with_context(|| format!("could not load config file {}", path.display()))?,
        None => ConsoleConfig::default(),
    };

    match &cli.prompt {
        Some(prompt) => config.prompt = prompt.clone(),
        // Piped input drops the built-in prompt; a config file prompt is kept
        None if cli.config.is_none() && !io::stdin().is_terminal() => config.prompt.clear(),
        None => {}
    }
    if cli.no_banner {
        config.banner = false;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme.into();
    }
    if let Some(format) = cli.format {
        config.format = format.into();
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = build_config(&cli)?;
    info!(?config, "starting console");

    let mut console = Console::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    console
        .run(stdin.lock(), stdout.lock())
        .context("console I/O failed")?;
    Ok(())
}
