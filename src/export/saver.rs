//! File saving.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ExportError;

use super::ExportPayload;

/// Somewhere a finished payload can be handed off to.
pub trait FileSaver {
    fn save_file(&mut self, payload: &ExportPayload) -> Result<(), ExportError>;
}

/// Writes payloads into a directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct DirectorySaver {
    dir: PathBuf,
}

impl DirectorySaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileSaver for DirectorySaver {
    fn save_file(&mut self, payload: &ExportPayload) -> Result<(), ExportError> {
        fs::create_dir_all(&self.dir).map_err(|source| ExportError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.dir.join(&payload.file_name);
        fs::write(&path, payload.content.as_bytes()).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;

        info!(
            path = %path.display(),
            mime_type = payload.mime_type,
            bytes = payload.content.len(),
            "Export file written"
        );
        Ok(())
    }
}
