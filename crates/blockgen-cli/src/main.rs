//! # blockgen
//!
//! Interactive generator for ACF blocks.
//!
//! ## Startup sequence
//!
//! 1. Load `.env`, then parse CLI arguments.
//! 2. Load configuration (defaults + file + env).
//! 3. Initialise the tracing subscriber.
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the command handler (`new` when none is given).
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                               |
//! |------|---------------------------------------|
//! |  0   | Success, or cancelled by the operator |
//! |  1   | Internal error or partial generation  |
//! |  2   | User / input error                    |
//! |  3   | Resource not found                    |
//! |  4   | Configuration error                   |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod prompt;

fn main() -> ExitCode {
    // Missing .env is the normal case.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let verbose = cli.global.verbose > 0;

    let config = match load_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(e, verbose),
    };

    let _log_guard = match init_logging(&cli.global, config.logging.file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialise logging: {e:#}");
            return ExitCode::from(1);
        }
    };

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let output = OutputManager::new(&cli.global, &config);

    match run(cli, config, output) {
        Ok(()) => {
            info!("blockgen completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// `init` and `completions` must work even when the config file is broken.
fn load_config(cli: &Cli) -> CliResult<AppConfig> {
    match cli.command {
        Some(Commands::Init(_)) | Some(Commands::Completions(_)) => Ok(AppConfig::default()),
        _ => AppConfig::load(cli.global.config.as_deref())
            .with_cli_context(|| "Failed to load configuration"),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let Cli { global, command } = cli;
    match command.unwrap_or_else(|| Commands::New(Default::default())) {
        Commands::New(cmd) => commands::new::execute(cmd, config, output),
        Commands::Init(cmd) => commands::init::execute(cmd, global, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => commands::config::execute(cmd, global, config, output),
    }
}

/// Translate a `CliError` into a user message and an exit code.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    let msg = if std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}
