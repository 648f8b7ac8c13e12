//! Backing File
//!
//! Reads and rewrites the JSON array that holds every post.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config::SyncStrategy;
use crate::error::{PostboxError, Result};
use crate::post::Post;

/// Handle on the single file that mirrors the store
#[derive(Debug, Clone)]
pub struct PostFile {
    path: PathBuf,
    sync_strategy: SyncStrategy,
}

impl PostFile {
    pub fn new(path: impl Into<PathBuf>, sync_strategy: SyncStrategy) -> Self {
        Self {
            path: path.into(),
            sync_strategy,
        }
    }

    /// Read every post from disk
    ///
    /// - Missing file: empty collection
    /// - Unparseable JSON, or a parseable array that breaks the
    ///   post invariants: `CorruptStore`
    pub fn load(&self) -> Result<Vec<Post>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No backing file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(PostboxError::Io(e)),
        };

        let posts: Vec<Post> =
            serde_json::from_str(&raw).map_err(|e| self.corrupt(e.to_string()))?;

        let mut seen = HashSet::with_capacity(posts.len());
        for post in &posts {
            if post.id == 0 {
                return Err(self.corrupt("post id 0 is not allowed".to_string()));
            }
            if !seen.insert(post.id) {
                return Err(self.corrupt(format!("duplicate post id {}", post.id)));
            }
            if post.title.is_empty() || post.content.is_empty() {
                return Err(self.corrupt(format!("post {} has an empty field", post.id)));
            }
        }

        Ok(posts)
    }

    /// Rewrite the whole file with `posts`
    ///
    /// Writes `<file>.tmp` next to the target and renames it into place,
    /// so a crash mid-write leaves the previous contents intact.
    pub fn save(&self, posts: &[Post]) -> Result<()> {
        let encoded = serde_json::to_vec_pretty(posts)?;
        let tmp_path = self.tmp_path();

        let write = || -> std::io::Result<()> {
            let mut file = File::create(&tmp_path)?;
            file.write_all(&encoded)?;
            file.write_all(b"\n")?;
            if self.sync_strategy == SyncStrategy::EveryWrite {
                file.sync_all()?;
            }
            fs::rename(&tmp_path, &self.path)
        };

        write().map_err(|source| {
            let _ = fs::remove_file(&tmp_path);
            PostboxError::Persistence {
                path: self.path.clone(),
                source,
            }
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn corrupt(&self, reason: String) -> PostboxError {
        PostboxError::CorruptStore {
            path: self.path.clone(),
            reason,
        }
    }
}
