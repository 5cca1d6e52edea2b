//! Generate Service - main application orchestrator.
//!
//! This service coordinates one generator run:
//! 1. Collect answers
//! 2. Derive identifiers and compose field fragments
//! 3. Check the destination, then create it
//! 4. Render and write each artifact, in write order
//!
//! ```text
//! Collecting → Deriving → CheckingDestination → Writing(0..6) → Done
//!      │           │               │                  │
//!      └───────────┴───────────────┴──────────────────┴──→ Cancelled | Rejected
//! ```
//!
//! Rejections (invalid answers, an existing destination, a directory that
//! cannot be created) are returned as errors and leave the filesystem as it
//! was. Once writing has started the run always produces a
//! [`GenerationReport`].

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, CancellationToken,
        ports::{AnswerCollector, DocumentPatcher, Filesystem, TemplateStore, TextRenderer},
    },
    domain::{
        ArtifactKind, BlockAnswers, BlockIdentifiers, ComposedFields, DomainValidator as validator,
        ManifestPatch, RenderContext, TemplateKind, compose,
    },
    error::{BlockgenError, BlockgenResult},
};

/// How artifacts reach the destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Write straight into the destination; a failed artifact leaves the
    /// others in place.
    #[default]
    BestEffort,
    /// Write into a hidden sibling directory and move it onto the
    /// destination only if every artifact succeeded.
    Staged,
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BestEffort => f.write_str("best-effort"),
            Self::Staged => f.write_str("staged"),
        }
    }
}

/// What happened to one artifact.
#[derive(Debug, Clone, PartialEq)]
pub enum ArtifactOutcome {
    Written { path: PathBuf },
    Failed(BlockgenError),
    /// Not attempted because the run was cancelled first.
    Skipped,
}

/// How a run that reached the writing stage ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Done,
    Cancelled,
    /// Staged output was discarded; nothing is at the destination.
    RolledBack,
}

/// Summary of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub identifiers: BlockIdentifiers,
    pub mode: WriteMode,
    pub artifacts: Vec<(ArtifactKind, ArtifactOutcome)>,
    pub state: RunState,
}

impl GenerationReport {
    pub fn destination(&self) -> &Path {
        self.identifiers.destination()
    }

    pub fn written(&self) -> impl Iterator<Item = ArtifactKind> + '_ {
        self.artifacts
            .iter()
            .filter(|(_, o)| matches!(o, ArtifactOutcome::Written { .. }))
            .map(|(kind, _)| *kind)
    }

    pub fn failures(&self) -> impl Iterator<Item = (ArtifactKind, &BlockgenError)> + '_ {
        self.artifacts.iter().filter_map(|(kind, o)| match o {
            ArtifactOutcome::Failed(e) => Some((*kind, e)),
            _ => None,
        })
    }

    pub fn outcome(&self, kind: ArtifactKind) -> Option<&ArtifactOutcome> {
        self.artifacts
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, o)| o)
    }

    /// `true` when every artifact was written and the run completed.
    pub fn is_complete(&self) -> bool {
        self.state == RunState::Done && self.failures().next().is_none()
    }
}

/// Main generator service.
pub struct BlockGenerator {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TextRenderer>,
    patcher: Box<dyn DocumentPatcher>,
    filesystem: Box<dyn Filesystem>,
    blocks_root: PathBuf,
    mode: WriteMode,
}

impl BlockGenerator {
    /// Create a generator writing blocks under `blocks_root`.
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TextRenderer>,
        patcher: Box<dyn DocumentPatcher>,
        filesystem: Box<dyn Filesystem>,
        blocks_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store,
            renderer,
            patcher,
            filesystem,
            blocks_root: blocks_root.into(),
            mode: WriteMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn blocks_root(&self) -> &Path {
        &self.blocks_root
    }

    /// Collect answers, then generate.
    pub fn run(
        &self,
        collector: &dyn AnswerCollector,
        cancel: &CancellationToken,
    ) -> BlockgenResult<GenerationReport> {
        let answers = collector.collect(cancel)?;
        self.generate(&answers, cancel)
    }

    /// Generate a block from already collected answers.
    ///
    /// # Errors
    ///
    /// Domain validation errors, `DestinationExists`,
    /// `DirectoryCreateFailure`, `CancelledByOperator` when the token is set
    /// before the directory is created, and `CommitFailed` when staged
    /// output cannot be moved into place.
    #[instrument(
        skip_all,
        fields(
            title = %answers.title,
            blocks_root = %self.blocks_root.display(),
            mode = %self.mode
        )
    )]
    pub fn generate(
        &self,
        answers: &BlockAnswers,
        cancel: &CancellationToken,
    ) -> BlockgenResult<GenerationReport> {
        cancel.checkpoint()?;

        validator::validate_answers(answers)?;
        let ids = BlockIdentifiers::derive(answers, &self.blocks_root)?;
        let composed = compose(&answers.fields);
        debug!(
            slug = ids.slug(),
            namespace_key = ids.namespace_key(),
            fields = %answers.fields,
            "Identifiers derived"
        );

        if self.filesystem.exists(ids.destination()) {
            return Err(ApplicationError::DestinationExists {
                path: ids.destination().to_path_buf(),
            }
            .into());
        }

        cancel.checkpoint()?;

        let work_dir = match self.mode {
            WriteMode::BestEffort => ids.destination().to_path_buf(),
            WriteMode::Staged => self.staging_dir(&ids),
        };
        self.filesystem
            .create_dir_all(&work_dir)
            .map_err(|e| ApplicationError::DirectoryCreateFailure {
                path: work_dir.clone(),
                reason: e.to_string(),
            })?;
        info!(
            path = %work_dir.display(),
            stubs = %self.store.describe(),
            "Block directory created"
        );

        let (artifacts, cancelled) = self.write_artifacts(&ids, answers, &composed, &work_dir, cancel);

        let state = match self.mode {
            WriteMode::BestEffort if cancelled => {
                warn!("Cancelled during writing, written artifacts are kept");
                RunState::Cancelled
            }
            WriteMode::BestEffort => RunState::Done,
            WriteMode::Staged => {
                let cancelled = cancelled || cancel.is_cancelled();
                self.finish_staged(&ids, &work_dir, &artifacts, cancelled)?
            }
        };

        let report = GenerationReport {
            identifiers: ids,
            mode: self.mode,
            artifacts,
            state,
        };

        match report.failures().count() {
            0 => info!(state = ?report.state, "Generation finished"),
            n => warn!(failed = n, state = ?report.state, "Generation finished with failures"),
        }

        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn staging_dir(&self, ids: &BlockIdentifiers) -> PathBuf {
        self.blocks_root
            .join(format!(".{}.staging-{}", ids.slug(), uuid::Uuid::new_v4()))
    }

    /// Attempt every artifact in write order. Returns the outcomes and
    /// whether cancellation was observed.
    fn write_artifacts(
        &self,
        ids: &BlockIdentifiers,
        answers: &BlockAnswers,
        composed: &ComposedFields,
        work_dir: &Path,
        cancel: &CancellationToken,
    ) -> (Vec<(ArtifactKind, ArtifactOutcome)>, bool) {
        let mut outcomes = Vec::with_capacity(ArtifactKind::WRITE_ORDER.len());
        let mut cancelled = false;

        for kind in ArtifactKind::WRITE_ORDER {
            if cancelled || cancel.is_cancelled() {
                cancelled = true;
                outcomes.push((kind, ArtifactOutcome::Skipped));
                continue;
            }

            let outcome = match self.write_artifact(kind, ids, answers, composed, work_dir) {
                Ok(()) => {
                    debug!(artifact = %kind, "Artifact written");
                    ArtifactOutcome::Written {
                        path: ids.destination().join(kind.file_name()),
                    }
                }
                Err(e) => {
                    error!(artifact = %kind, error = %e, "Artifact failed");
                    ArtifactOutcome::Failed(e)
                }
            };
            outcomes.push((kind, outcome));
        }

        (outcomes, cancelled)
    }

    fn write_artifact(
        &self,
        kind: ArtifactKind,
        ids: &BlockIdentifiers,
        answers: &BlockAnswers,
        composed: &ComposedFields,
        work_dir: &Path,
    ) -> BlockgenResult<()> {
        let content = self.render_artifact(kind, ids, answers, composed)?;
        let path = work_dir.join(kind.file_name());

        self.filesystem.write_file(&path, &content).map_err(|e| {
            ApplicationError::ArtifactWriteFailure {
                path,
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn render_artifact(
        &self,
        kind: ArtifactKind,
        ids: &BlockIdentifiers,
        answers: &BlockAnswers,
        composed: &ComposedFields,
    ) -> BlockgenResult<String> {
        if let Some(css) = kind.stylesheet(&ids.css_prefix()) {
            return Ok(css);
        }

        match kind.template() {
            Some(TemplateKind::FieldConfig) => {
                let stub = self.store.load(TemplateKind::FieldConfig)?;
                self.renderer
                    .render(&stub, &RenderContext::for_field_config(composed))
            }
            Some(TemplateKind::RenderTemplate) => {
                let stub = self.store.load(TemplateKind::RenderTemplate)?;
                let context = RenderContext::for_render_template(ids, answers, composed);
                self.renderer.render(&stub, &context)
            }
            Some(TemplateKind::Manifest) => {
                let stub = self.store.load(TemplateKind::Manifest)?;
                self.patcher
                    .patch(&stub, &ManifestPatch::for_block(ids, answers))
            }
            None => Err(BlockgenError::Internal {
                message: format!("artifact {kind} has neither a stylesheet nor a stub"),
            }),
        }
    }

    /// Commit or discard the staging directory. `cancelled` must reflect the
    /// token as of now, so an interrupt after the last write still discards.
    fn finish_staged(
        &self,
        ids: &BlockIdentifiers,
        staging: &Path,
        artifacts: &[(ArtifactKind, ArtifactOutcome)],
        cancelled: bool,
    ) -> BlockgenResult<RunState> {
        let failed = artifacts
            .iter()
            .any(|(_, o)| matches!(o, ArtifactOutcome::Failed(_)));

        if cancelled || failed {
            self.discard(staging);
            return Ok(if cancelled {
                RunState::Cancelled
            } else {
                RunState::RolledBack
            });
        }

        if let Err(e) = self.filesystem.rename(staging, ids.destination()) {
            self.discard(staging);
            return Err(ApplicationError::CommitFailed {
                path: ids.destination().to_path_buf(),
                reason: e.to_string(),
            }
            .into());
        }

        info!(path = %ids.destination().display(), "Staged block committed");
        Ok(RunState::Done)
    }

    /// Best-effort removal of the staging directory.
    fn discard(&self, staging: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(staging) {
            warn!(
                error = %e,
                path = %staging.display(),
                "Failed to remove staging directory"
            );
        } else {
            info!("Staged output discarded");
        }
    }
}
