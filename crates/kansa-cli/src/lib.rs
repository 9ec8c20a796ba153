//! Argument parsing and run orchestration for the `kansa` binary.
//!
//! One subcommand per validation class plus `all`, each taking no required
//! flags. The repository root defaults to the current directory.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::error;

use kansa_kernel::reporter::EXIT_FAILURE;
use kansa_types::TargetKind;

/// kansa (監査) — deterministic repository validation.
#[derive(Debug, Parser)]
#[command(name = "kansa", version, about)]
pub struct Cli {
    /// Repository root to validate.
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// One entry point per validation class.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum Command {
    /// Validate the syntax of all .kai scripts under the root.
    Scripts,
    /// Validate the syntax of all .json files under the root.
    Json,
    /// Check every plugins/* directory for its plugin.json manifest.
    Plugins,
    /// Run all three validation classes in one combined report.
    All,
}

impl Command {
    fn kinds(self) -> &'static [TargetKind] {
        match self {
            Command::Scripts => &[TargetKind::Script],
            Command::Json => &[TargetKind::Json],
            Command::Plugins => &[TargetKind::PluginManifest],
            Command::All => &[
                TargetKind::Script,
                TargetKind::Json,
                TargetKind::PluginManifest,
            ],
        }
    }
}

/// Run a parsed invocation, writing the report to `out`.
///
/// Returns the process exit code. Expected per-target failures are part of
/// the report; only fatal conditions surface as `Err`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<i32> {
    let report = kansa_kernel::run(&cli.root, cli.command.kinds())
        .with_context(|| format!("validation run aborted in {}", cli.root.display()))?;
    let code = kansa_kernel::render(&report, out).context("failed to write report")?;
    Ok(code)
}

/// Parse real process arguments and run, mapping a fatal abort onto the
/// error stream and a non-zero exit code.
pub fn main_impl() -> i32 {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    match run(&cli, &mut stdout.lock()) {
        Ok(code) => code,
        Err(err) => {
            error!(error = %err, "fatal abort");
            eprintln!("kansa: fatal: {err:#}");
            EXIT_FAILURE
        }
    }
}
