use std::fs;
use std::path::{Path, PathBuf};

use super::PostStore;
use crate::error::{BlogError, Result};
use crate::model::Post;

/// File-backed store: the whole collection as one JSON array file.
///
/// The file is pretty-printed UTF-8 with non-ASCII preserved literally, so
/// it stays hand-editable. Every save rewrites it in full.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("storage.json");
        self.path
            .with_file_name(format!(".{}-{}.tmp", file_name, std::process::id()))
    }
}

impl PostStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Post>> {
        if !self.path.exists() {
            // First run: file doesn't exist yet
            log::debug!("no storage file at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(BlogError::Io)?;
        match serde_json::from_str::<Vec<Post>>(&content) {
            Ok(posts) => Ok(posts),
            Err(err) => {
                log::warn!(
                    "ignoring malformed storage file {}: {}",
                    self.path.display(),
                    err
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, posts: &[Post]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(BlogError::Io)?;
            }
        }

        let content = serde_json::to_string_pretty(posts).map_err(BlogError::Serialization)?;

        // Atomic write
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content).map_err(BlogError::Io)?;
        fs::rename(&tmp_path, &self.path).map_err(BlogError::Io)?;

        Ok(())
    }
}
