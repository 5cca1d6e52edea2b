//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "blockgen",
    bin_name = "blockgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Interactive ACF block generator",
    long_about = "blockgen asks a few questions and writes a ready-to-register \
                  ACF block: view.php, config.php, block.json and stylesheets.",
    after_help = "EXAMPLES:\n\
        \x20 blockgen                      # same as `blockgen new`\n\
        \x20 blockgen new --staged\n\
        \x20 blockgen init --local\n\
        \x20 blockgen completions bash > /usr/share/bash-completion/completions/blockgen",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute. Defaults to `new`.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new block interactively.
    #[command(
        visible_alias = "n",
        about = "Create a new block (default)",
        after_help = "EXAMPLES:\n\
            \x20 blockgen new\n\
            \x20 blockgen new --blocks-dir wp-content/themes/site/blocks\n\
            \x20 blockgen new --staged"
    )]
    New(NewArgs),

    /// Initialise a blockgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 blockgen init            # platform config directory\n\
            \x20 blockgen init --local    # .blockgen.toml in CWD\n\
            \x20 blockgen -c my.toml init # explicit path"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 blockgen completions bash > ~/.local/share/bash-completion/completions/blockgen\n\
            \x20 blockgen completions zsh  > ~/.zfunc/_blockgen\n\
            \x20 blockgen completions fish > ~/.config/fish/completions/blockgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the blockgen configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 blockgen config get defaults.namespace\n\
            \x20 blockgen config list\n\
            \x20 blockgen config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `blockgen new`.
#[derive(Debug, Default, Args)]
pub struct NewArgs {
    /// Write into a staging directory and move it into place only if every
    /// file succeeded.
    #[arg(long = "staged", help = "All-or-nothing write")]
    pub staged: bool,

    /// Override `paths.blocks_dir`.
    #[arg(
        short = 'o',
        long = "blocks-dir",
        value_name = "DIR",
        help = "Directory the block is created in"
    )]
    pub blocks_dir: Option<PathBuf>,

    /// Override `paths.stubs_dir`.
    #[arg(
        long = "stubs-dir",
        value_name = "DIR",
        help = "Directory holding block.php.txt, config.php.txt and block.json.txt"
    )]
    pub stubs_dir: Option<PathBuf>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `blockgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.blockgen.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `blockgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `blockgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.namespace`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
