use std::path::{Path, PathBuf};

use blockgen_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::TemplateKind,
    error::BlockgenResult,
};
use tracing::{debug, instrument};

/// Reads stubs from a directory on every load.
#[derive(Debug, Clone)]
pub struct FilesystemTemplateStore {
    dir: PathBuf,
}

impl FilesystemTemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl TemplateStore for FilesystemTemplateStore {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn load(&self, kind: TemplateKind) -> BlockgenResult<String> {
        let path = self.dir.join(kind.file_name());
        debug!(path = %path.display(), "Reading stub");

        std::fs::read_to_string(&path).map_err(|e| {
            ApplicationError::TemplateReadFailure {
                template: kind.to_string(),
                reason: format!("{}: {e}", path.display()),
            }
            .into()
        })
    }

    fn describe(&self) -> String {
        format!("stubs in {}", self.dir.display())
    }
}
