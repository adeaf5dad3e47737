use std::path::{Component, Path, PathBuf};

use snafu::Snafu;
use tracing::debug;

/// Maps the open document to the absolute folder whose notes are listed.
pub trait PathResolver {
    fn resolve_folder(&self, document: &Path) -> Result<PathBuf, ResolveError>;
}

/// Resolves documents addressed relative to a vault on the local filesystem.
///
/// Absolute document paths are taken as they are; relative ones are joined
/// onto the vault base path.
#[derive(Debug, Clone)]
pub struct VaultPathResolver {
    base_path: PathBuf,
}

impl VaultPathResolver {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl PathResolver for VaultPathResolver {
    fn resolve_folder(&self, document: &Path) -> Result<PathBuf, ResolveError> {
        if !matches!(document.components().next_back(), Some(Component::Normal(_))) {
            return Err(ResolveError::NoFileName {
                document: document.to_path_buf(),
            });
        }
        let folder = match document.parent() {
            Some(parent) if parent.is_absolute() => parent.to_path_buf(),
            Some(parent) if !parent.as_os_str().is_empty() => self.base_path.join(parent),
            _ => self.base_path.clone(),
        };
        debug!(
            "Resolved folder of {} to {}",
            document.display(),
            folder.display()
        );
        Ok(folder)
    }
}

#[derive(Debug, Snafu)]
pub enum ResolveError {
    #[snafu(display("Document path {} does not name a file", document.display()))]
    NoFileName { document: PathBuf },
}
