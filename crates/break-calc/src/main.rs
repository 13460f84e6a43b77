//! CLI entry point for break-calc.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod commands;
mod config;
mod tui;

/// Rest-break windows for a shift, in the terminal.
#[derive(Parser, Debug)]
#[command(
    name = "break-calc",
    version,
    about = "break-calc: rest-break windows computed from a shift start time"
)]
struct Cli {
    /// Path to the config file (defaults to the user config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the break windows for a shift starting at the given time.
    Calc {
        /// Shift start in 24-hour `HH:mm` form (for example `9:30`).
        #[arg(long)]
        start: String,

        /// Output format.
        #[arg(long, value_enum, default_value_t = CalcFormat::Table)]
        format: CalcFormat,
    },

    /// Launch interactive terminal UI.
    Tui,

    /// Write the default config file with all key bindings spelled out.
    InitConfig {
        /// Destination path (defaults to the user config directory).
        #[arg(long)]
        output: Option<PathBuf>,

        /// Overwrite an existing file without prompting.
        #[arg(long)]
        force: bool,
    },
}

/// Output format for `calc`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum CalcFormat {
    /// Pipe-separated rows, one per break window.
    Table,
    /// JSON array of windows.
    Json,
}

fn main() -> Result<()> {
    let Cli { config, cmd } = Cli::parse();
    let cmd = cmd.unwrap_or(Command::Tui);

    if should_install_tracing(&cmd) {
        install_tracing();
    }

    execute_command(config.as_deref(), cmd)
}

fn execute_command(config_path: Option<&Path>, command: Command) -> Result<()> {
    match command {
        Command::Tui => tui::run(config_path),
        Command::InitConfig { output, force } => config::init_config(output.as_deref(), force),
        other => commands::run(other),
    }
}

const fn should_install_tracing(cmd: &Command) -> bool {
    // JSON output is meant for pipes; keep stdout free of log lines.
    !matches!(
        cmd,
        Command::Calc {
            format: CalcFormat::Json,
            ..
        }
    )
}

fn install_tracing() {
    // RUST_LOG overrides the filter. Defaults to INFO.
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
}
