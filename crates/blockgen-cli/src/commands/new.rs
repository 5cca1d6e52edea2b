//! Implementation of the `blockgen new` command.
//!
//! Responsibility: wire the adapters to the core generator, run the
//! question flow, and report what happened. No block rules live here.

use std::io::{self, IsTerminal as _};
use std::path::PathBuf;

use tracing::{debug, info, instrument};

use blockgen_adapters::{
    JsonManifestPatcher, LocalFilesystem, MarkerRenderer, required_store, store_for,
};
use blockgen_core::{
    application::{
        BlockGenerator, CancellationToken, GenerationReport, RunState, TemplateStore, WriteMode,
    },
    error::BlockgenResult,
};

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::{OutputManager, Status},
    prompt::{DialoguerPrompter, PromptDefaults, PromptFlow},
};

/// Execute the `blockgen new` command.
///
/// 1. Refuse to run without a terminal
/// 2. Install the Ctrl-C handler on a fresh cancellation token
/// 3. Build the generator from config and flags
/// 4. Ask the questions and generate
/// 5. Print one line per artifact and map the outcome to an exit status
#[instrument(skip_all)]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    if !io::stdin().is_terminal() {
        return Err(CliError::NotInteractive);
    }

    let cancel = CancellationToken::new();
    install_interrupt_handler(&cancel)?;

    let settings = RunSettings::resolve(&args, &config);
    debug!(?settings, "Run settings resolved");
    let generator = build_generator(&settings)?;

    output.heading("New ACF block")?;

    let flow = PromptFlow::new(
        DialoguerPrompter::new(),
        PromptDefaults {
            namespace: config.defaults.namespace.clone(),
            icon: config.defaults.icon.clone(),
        },
    );

    let report = match generator.run(&flow, &cancel) {
        Ok(report) => report,
        Err(e) if e.is_cancellation() => {
            info!("Cancelled before writing");
            output.status(Status::Note, "Operation cancelled, no files were created")?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    present(&report, &output)
}

/// Where and how this run writes.
#[derive(Debug, Clone, PartialEq)]
struct RunSettings {
    blocks_dir: PathBuf,
    stubs_dir: PathBuf,
    /// `--stubs-dir` was given, so there is no fallback to the built-in stubs.
    stubs_required: bool,
    mode: WriteMode,
}

impl RunSettings {
    /// Flags win over config.
    fn resolve(args: &NewArgs, config: &AppConfig) -> Self {
        let staged = args.staged || config.generator.staged;
        Self {
            blocks_dir: args
                .blocks_dir
                .clone()
                .unwrap_or_else(|| config.paths.blocks_dir.clone()),
            stubs_dir: args
                .stubs_dir
                .clone()
                .unwrap_or_else(|| config.paths.stubs_dir.clone()),
            stubs_required: args.stubs_dir.is_some(),
            mode: if staged {
                WriteMode::Staged
            } else {
                WriteMode::BestEffort
            },
        }
    }
}

fn template_store(settings: &RunSettings) -> BlockgenResult<Box<dyn TemplateStore>> {
    if settings.stubs_required {
        required_store(&settings.stubs_dir)
    } else {
        Ok(store_for(&settings.stubs_dir))
    }
}

fn build_generator(settings: &RunSettings) -> CliResult<BlockGenerator> {
    Ok(BlockGenerator::new(
        template_store(settings)?,
        Box::new(MarkerRenderer::new()),
        Box::new(JsonManifestPatcher::new()),
        Box::new(LocalFilesystem::new()),
        settings.blocks_dir.clone(),
    )
    .with_mode(settings.mode))
}

fn install_interrupt_handler(cancel: &CancellationToken) -> CliResult<()> {
    let token = cancel.clone();
    ctrlc::set_handler(move || {
        token.cancel();
    })
    .map_err(CliError::SignalHandler)
}

fn present(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    let committed = report.mode == WriteMode::BestEffort || report.state == RunState::Done;
    for (kind, outcome) in &report.artifacts {
        output.artifact(*kind, outcome, committed)?;
    }

    let failed = report.failures().count();
    let destination = report.destination().to_path_buf();

    match report.state {
        RunState::Cancelled => {
            output.status(Status::Note, &cancelled_message(report))?;
            Ok(())
        }
        RunState::RolledBack => Err(CliError::GenerationFailed {
            failed,
            destination,
            rolled_back: true,
        }),
        RunState::Done if failed > 0 => Err(CliError::GenerationFailed {
            failed,
            destination,
            rolled_back: false,
        }),
        RunState::Done => {
            output.line("")?;
            output.status(
                Status::Done,
                &format!(
                    "Block '{}' created in {}",
                    report.identifiers.qualified_name(),
                    destination.display()
                ),
            )?;
            Ok(())
        }
    }
}

/// What an interrupt during writing left behind.
fn cancelled_message(report: &GenerationReport) -> String {
    let destination = report.destination().display();
    match report.mode {
        WriteMode::Staged => "Operation cancelled, nothing was written".to_string(),
        WriteMode::BestEffort if report.written().next().is_none() => {
            format!("Operation cancelled, {destination} was created but is empty")
        }
        WriteMode::BestEffort => {
            format!("Operation cancelled, files already written remain in {destination}")
        }
    }
}
