//! Flags accepted before or after any subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args};

#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// More log output on stderr. `RUST_LOG` takes precedence.
    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Log level for stderr and the log file:
    (none)  - warnings and errors
    -v      - info: directory created, store in use, commit
    -vv     - debug: identifiers, answers, each artifact
    -vvv    - trace"
    )]
    pub verbose: u8,

    /// Drop status lines on stdout. Failures are still printed.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print status lines without ANSI colours. Also set by `NO_COLOR`.
    #[arg(long = "no-color", global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read settings from FILE instead of the platform or `.blockgen.toml`
    /// file. The file must exist.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
