//! `blockgen init`: write the default configuration to disk.

use std::path::PathBuf;

use tracing::info;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::{AppConfig, LOCAL_CONFIG},
    error::{CliError, CliResult, IntoCli},
    output::{OutputManager, Status},
};

/// Create a default blockgen configuration file.
pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let path = target_path(&args, &global);

    if path.exists() && !args.force {
        output.status(
            Status::Attention,
            &format!(
                "Config already exists at {}  (use --force to overwrite)",
                path.display(),
            ),
        )?;
        return Ok(());
    }

    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(&path, toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;

    info!(path = %path.display(), "Configuration written");
    output.status(
        Status::Done,
        &format!("Configuration created at {}", path.display()),
    )?;

    Ok(())
}

/// `--config` wins, then `--local`, then the platform location.
fn target_path(args: &InitArgs, global: &GlobalArgs) -> PathBuf {
    match (&global.config, args.local) {
        (Some(explicit), _) => explicit.clone(),
        (None, true) => PathBuf::from(LOCAL_CONFIG),
        (None, false) => AppConfig::config_path(),
    }
}
