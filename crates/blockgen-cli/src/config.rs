//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `BLOCKGEN__SECTION__KEY`
//! 3. Config file: `--config FILE`, else the platform config file and
//!    `.blockgen.toml` in the current directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// File name of the per-project configuration.
pub const LOCAL_CONFIG: &str = ".blockgen.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where blocks are written and stubs are read.
    pub paths: PathsConfig,
    /// Prompt defaults.
    pub defaults: Defaults,
    /// Generator behaviour.
    pub generator: GeneratorConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Log sinks.
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    pub blocks_dir: PathBuf,
    pub stubs_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    pub namespace: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub staged: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Also write logs (without colour) to this file.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            paths: PathsConfig {
                blocks_dir: PathBuf::from("blocks"),
                stubs_dir: PathBuf::from("stubs"),
            },
            defaults: Defaults {
                namespace: "moonsio".into(),
                icon: "star-filled".into(),
            },
            generator: GeneratorConfig { staged: false },
            output: OutputConfig { no_color: false },
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with_env(config_file, Environment::with_prefix("BLOCKGEN"))
    }

    fn load_with_env(config_file: Option<&Path>, env: Environment) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default configuration")?;

        let mut builder = Config::builder().add_source(defaults);

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder
                .add_source(File::from(Self::config_path()).required(false))
                .add_source(File::from(Path::new(LOCAL_CONFIG)).required(false)),
        };

        builder = builder.add_source(env.separator("__").try_parsing(true));

        builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.blockgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("nl", "moonsio", "blockgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG))
    }

    /// The file `--config` points at, or the default location.
    pub fn active_path(explicit: Option<&Path>) -> PathBuf {
        match explicit {
            Some(path) => path.to_path_buf(),
            None if Path::new(LOCAL_CONFIG).is_file() => PathBuf::from(LOCAL_CONFIG),
            None => Self::config_path(),
        }
    }

    /// Look up a dotted key.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "paths.blocks_dir" => self.paths.blocks_dir.display().to_string(),
            "paths.stubs_dir" => self.paths.stubs_dir.display().to_string(),
            "defaults.namespace" => self.defaults.namespace.clone(),
            "defaults.icon" => self.defaults.icon.clone(),
            "generator.staged" => self.generator.staged.to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            "logging.file" => self
                .logging
                .file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            _ => return None,
        };
        Some(value)
    }

    /// Every key accepted by [`get`](Self::get).
    pub const KEYS: [&'static str; 7] = [
        "paths.blocks_dir",
        "paths.stubs_dir",
        "defaults.namespace",
        "defaults.icon",
        "generator.staged",
        "output.no_color",
        "logging.file",
    ];
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn no_env() -> Environment {
        Environment::with_prefix("BLOCKGEN").source(Some(HashMap::new()))
    }

    #[test]
    fn defaults_match_the_documented_values() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.namespace, "moonsio");
        assert_eq!(cfg.defaults.icon, "star-filled");
        assert_eq!(cfg.paths.blocks_dir, PathBuf::from("blocks"));
        assert_eq!(cfg.paths.stubs_dir, PathBuf::from("stubs"));
        assert!(!cfg.generator.staged);
        assert!(cfg.logging.file.is_none());
    }

    #[test]
    fn file_overrides_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("blockgen.toml");
        std::fs::write(
            &path,
            "[defaults]\nnamespace = \"acme\"\n\n[generator]\nstaged = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load_with_env(Some(&path), no_env()).unwrap();
        assert_eq!(cfg.defaults.namespace, "acme");
        assert!(cfg.generator.staged);
        // untouched keys keep their defaults
        assert_eq!(cfg.defaults.icon, "star-filled");
    }

    #[test]
    fn environment_overrides_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("blockgen.toml");
        std::fs::write(&path, "[paths]\nblocks_dir = \"from-file\"\n").unwrap();

        let env = Environment::with_prefix("BLOCKGEN").source(Some(HashMap::from([
            ("BLOCKGEN__PATHS__BLOCKS_DIR".to_string(), "from-env".to_string()),
            ("BLOCKGEN__GENERATOR__STAGED".to_string(), "true".to_string()),
        ])));

        let cfg = AppConfig::load_with_env(Some(&path), env).unwrap();
        assert_eq!(cfg.paths.blocks_dir, PathBuf::from("from-env"));
        assert!(cfg.generator.staged);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope.toml");
        assert!(AppConfig::load_with_env(Some(&missing), no_env()).is_err());
    }

    #[test]
    fn serialized_defaults_round_trip_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn every_documented_key_resolves() {
        let cfg = AppConfig::default();
        for key in AppConfig::KEYS {
            assert!(cfg.get(key).is_some(), "{key} not resolvable");
        }
        assert_eq!(cfg.get("defaults.namespace").as_deref(), Some("moonsio"));
        assert!(cfg.get("does.not.exist").is_none());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
