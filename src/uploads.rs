use crate::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

/// Filesystem store for uploaded images. Files accumulate under one
/// directory; there is no cleanup or retention policy.
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Open the store, creating the directory if it does not exist yet.
    pub async fn ensure(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        info!("Upload directory ready: {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist one upload. The client-supplied filename is sanitized and
    /// prefixed with a UUID so concurrent uploads of the same name never
    /// collide, then the bytes are written in full. Returns the stored path.
    pub async fn save(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
        let stored_name = format!("{}_{}", Uuid::new_v4(), sanitize_filename(filename));
        let path = self.dir.join(stored_name);

        tokio::fs::write(&path, bytes).await?;

        debug!("Saved upload '{}' to {}", filename, path.display());
        Ok(path)
    }
}

/// Reduce an untrusted filename to a safe path segment: keep only the final
/// path component, replace anything outside `[A-Za-z0-9._-]` with `_`, and
/// strip leading dots so the result can never traverse or hide.
pub fn sanitize_filename(name: &str) -> String {
    let last = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let cleaned: String = last
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.').to_string();

    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}
