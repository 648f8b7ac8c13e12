//! Post Store
//!
//! The single owner of the post collection.

use std::fs;
use std::path::Path;

use parking_lot::Mutex;

use crate::config::Config;
use crate::error::{PostboxError, Result};
use crate::post::{NewPost, Post, PostUpdate};

use super::PostFile;

/// Durable post collection
///
/// ## Concurrency Model: Single Lock
///
/// - `posts` is guarded by one `Mutex` that is held across the in-memory
///   mutation AND the file rewrite, so the collection and the backing file
///   never disagree from a caller's point of view.
/// - Every mutation is applied to a working copy first. The copy replaces
///   the live collection only after it was persisted; a failed persist
///   leaves the collection at the last persisted state.
/// - `list()` clones under the lock and returns; sorting and searching run
///   on the clone without holding it.
///
/// ## Id Allocation
///
/// A new id is `max(existing ids) + 1`, or 1 for an empty store. There is
/// no separate counter: deleting the highest-id post lets the next create
/// reuse that id. When the max is already `u64::MAX`, create fails with
/// `IdsExhausted` and nothing is written.
pub struct PostStore {
    /// Backing file (exclusively owned by this store)
    file: PostFile,

    /// Posts in insertion order
    posts: Mutex<Vec<Post>>,
}

impl PostStore {
    // =========================================================================
    // Internal Path Constants
    // =========================================================================
    const POSTS_FILENAME: &'static str = "posts.json";

    /// Open or create a store with the given config
    ///
    /// On startup:
    /// 1. Create data directory if it doesn't exist
    /// 2. Load and validate the backing file (missing = empty)
    /// 3. Seed the sample posts if configured and the store is empty
    pub fn open(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)?;

        let file = PostFile::new(
            config.data_dir.join(Self::POSTS_FILENAME),
            config.sync_strategy,
        );
        let posts = file.load()?;

        tracing::info!(
            "Loaded {} posts from {}",
            posts.len(),
            file.path().display()
        );

        let store = Self {
            file,
            posts: Mutex::new(posts),
        };

        if config.seed_sample_posts {
            let seeded = store.seed(crate::post::sample_posts())?;
            if seeded > 0 {
                tracing::info!("Seeded {} sample posts", seeded);
            }
        }

        Ok(store)
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().data_dir(path).build();
        Self::open(config)
    }

    /// Snapshot of all posts in insertion order
    pub fn list(&self) -> Vec<Post> {
        self.posts.lock().clone()
    }

    /// Copy of a single post
    pub fn get(&self, id: u64) -> Result<Post> {
        self.posts
            .lock()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(PostboxError::NotFound(id))
    }

    /// Validate, assign the next id, append and persist
    pub fn create(&self, draft: NewPost) -> Result<Post> {
        let (title, content) = draft.validate()?;

        let mut posts = self.posts.lock();
        let post = Post::new(Self::next_id(&posts)?, title, content);

        let mut working = posts.clone();
        working.push(post.clone());
        self.commit(&mut posts, working)?;

        tracing::debug!("Created post {}", post.id);
        Ok(post)
    }

    /// Overwrite the non-empty fields of post `id` and persist
    ///
    /// An update with nothing to change still succeeds and returns the
    /// current post, without rewriting the file.
    pub fn update(&self, id: u64, update: PostUpdate) -> Result<Post> {
        let mut posts = self.posts.lock();
        let index = Self::position(&posts, id)?;

        let mut post = posts[index].clone();
        if !update.apply(&mut post) {
            return Ok(post);
        }

        let mut working = posts.clone();
        working[index] = post.clone();
        self.commit(&mut posts, working)?;

        tracing::debug!("Updated post {}", id);
        Ok(post)
    }

    /// Remove post `id` and persist
    pub fn delete(&self, id: u64) -> Result<()> {
        let mut posts = self.posts.lock();
        let index = Self::position(&posts, id)?;

        let mut working = posts.clone();
        working.remove(index);
        self.commit(&mut posts, working)?;

        tracing::debug!("Deleted post {}", id);
        Ok(())
    }

    /// Insert `drafts` if the store is empty
    ///
    /// Returns how many posts were inserted (0 when the store already had
    /// posts). All drafts are validated before anything is written.
    pub fn seed(&self, drafts: Vec<NewPost>) -> Result<usize> {
        let mut posts = self.posts.lock();
        if !posts.is_empty() {
            return Ok(0);
        }

        let mut working = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let (title, content) = draft.validate()?;
            let id = Self::next_id(&working)?;
            working.push(Post::new(id, title, content));
        }

        let count = working.len();
        if count > 0 {
            self.commit(&mut posts, working)?;
        }
        Ok(count)
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of posts currently stored
    pub fn len(&self) -> usize {
        self.posts.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.lock().is_empty()
    }

    /// Path of the backing file
    pub fn file_path(&self) -> &Path {
        self.file.path()
    }

    // =========================================================================
    // Internal helpers (called with the lock held)
    // =========================================================================

    fn next_id(posts: &[Post]) -> Result<u64> {
        match posts.iter().map(|p| p.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or(PostboxError::IdsExhausted),
        }
    }

    fn position(posts: &[Post], id: u64) -> Result<usize> {
        posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(PostboxError::NotFound(id))
    }

    /// Persist `working`, then make it the live collection
    fn commit(&self, live: &mut Vec<Post>, working: Vec<Post>) -> Result<()> {
        if let Err(e) = self.file.save(&working) {
            tracing::warn!("Mutation rolled back: {}", e);
            return Err(e);
        }
        *live = working;
        Ok(())
    }
}
