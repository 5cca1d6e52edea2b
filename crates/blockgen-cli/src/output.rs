//! Status lines on stdout.
//!
//! Logs go to stderr through tracing. Everything the operator is meant to
//! read after a run goes through [`OutputManager`].

use std::io;

use console::Term;
use owo_colors::OwoColorize;

use blockgen_core::{application::ArtifactOutcome, domain::ArtifactKind};

use crate::cli::global::GlobalArgs;
use crate::config::AppConfig;

/// Kind of status line. Picks the glyph and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Done,
    Failed,
    Attention,
    Note,
}

impl Status {
    const fn glyph(self) -> char {
        match self {
            Self::Done => '\u{2713}',
            Self::Failed => '\u{2717}',
            Self::Attention => '\u{26a0}',
            Self::Note => '\u{2139}',
        }
    }

    fn paint(self, text: &str) -> String {
        match self {
            Self::Done => text.green().to_string(),
            Self::Failed => text.red().to_string(),
            Self::Attention => text.yellow().to_string(),
            Self::Note => text.blue().to_string(),
        }
    }
}

/// `<glyph> <msg>`, coloured unless `no_color`.
pub fn format_status(status: Status, msg: &str, no_color: bool) -> String {
    let glyph = status.glyph().to_string();
    if no_color {
        format!("{glyph} {msg}")
    } else {
        format!("{} {}", status.paint(&glyph).bold(), status.paint(msg))
    }
}

/// Status and text for one artifact of a run.
///
/// When the run's output was not `committed` (staged output that was
/// discarded), a written artifact is reported as discarded.
pub fn artifact_status(
    kind: ArtifactKind,
    outcome: &ArtifactOutcome,
    committed: bool,
) -> (Status, String) {
    match outcome {
        ArtifactOutcome::Written { path } if committed => {
            (Status::Done, format!("Created {}", path.display()))
        }
        ArtifactOutcome::Written { .. } => (Status::Attention, format!("{kind}: discarded")),
        ArtifactOutcome::Failed(e) => (Status::Failed, format!("{kind}: {e}")),
        ArtifactOutcome::Skipped => (Status::Attention, format!("{kind}: skipped")),
    }
}

pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let term = Term::stdout();
        Self {
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || !term.features().colors_supported(),
            term,
        }
    }

    /// Raw line, e.g. a config value meant for scripts. Quiet mode drops it.
    pub fn line(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn heading(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.no_color {
            self.term.write_line(text)
        } else {
            self.term.write_line(&text.cyan().bold().to_string())
        }
    }

    /// Failures are printed even in quiet mode.
    pub fn status(&self, status: Status, msg: &str) -> io::Result<()> {
        if self.quiet && status != Status::Failed {
            return Ok(());
        }
        self.term
            .write_line(&format_status(status, msg, self.no_color))
    }

    pub fn artifact(
        &self,
        kind: ArtifactKind,
        outcome: &ArtifactOutcome,
        committed: bool,
    ) -> io::Result<()> {
        let (status, msg) = artifact_status(kind, outcome, committed);
        self.status(status, &msg)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use blockgen_core::{application::ApplicationError, error::BlockgenError};

    use super::*;

    fn manager(quiet: bool) -> OutputManager {
        let args = GlobalArgs {
            quiet,
            no_color: true,
            ..GlobalArgs::default()
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn plain_status_has_glyph_and_message() {
        assert_eq!(format_status(Status::Done, "ok", true), "\u{2713} ok");
        assert_eq!(format_status(Status::Failed, "no", true), "\u{2717} no");
    }

    #[test]
    fn coloured_status_keeps_the_message() {
        let line = format_status(Status::Note, "hello", false);
        assert!(line.contains("hello"));
        assert!(line.contains('\u{1b}'));
    }

    #[test]
    fn written_artifact_shows_path() {
        let outcome = ArtifactOutcome::Written {
            path: PathBuf::from("blocks/hero/block.json"),
        };
        assert_eq!(
            artifact_status(ArtifactKind::Manifest, &outcome, true),
            (Status::Done, "Created blocks/hero/block.json".to_string())
        );
    }

    #[test]
    fn uncommitted_artifact_is_discarded() {
        let outcome = ArtifactOutcome::Written {
            path: PathBuf::from("blocks/hero/view.php"),
        };
        assert_eq!(
            artifact_status(ArtifactKind::RenderTemplate, &outcome, false),
            (Status::Attention, "view.php: discarded".to_string())
        );
    }

    #[test]
    fn failed_artifact_names_cause() {
        let err: BlockgenError = ApplicationError::ArtifactWriteFailure {
            path: PathBuf::from("blocks/hero/editor.scss"),
            reason: "disk full".into(),
        }
        .into();
        let (status, msg) = artifact_status(
            ArtifactKind::EditorStylesheet,
            &ArtifactOutcome::Failed(err),
            true,
        );
        assert_eq!(status, Status::Failed);
        assert!(msg.starts_with("editor.scss: "));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn skipped_artifact() {
        assert_eq!(
            artifact_status(ArtifactKind::RenderTemplate, &ArtifactOutcome::Skipped, true).1,
            "view.php: skipped"
        );
    }

    #[test]
    fn quiet_still_accepts_every_status() {
        let out = manager(true);
        assert!(out.line("x").is_ok());
        assert!(out.status(Status::Done, "x").is_ok());
        assert!(out.status(Status::Failed, "x").is_ok());
    }

    #[test]
    fn colour_can_be_turned_off_by_flag_or_config() {
        assert!(manager(false).no_color);

        let mut config = AppConfig::default();
        config.output.no_color = true;
        assert!(OutputManager::new(&GlobalArgs::default(), &config).no_color);
    }
}
