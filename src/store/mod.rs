//! Store Module
//!
//! Authoritative, concurrency-safe collection of posts with write-through
//! persistence.
//!
//! ## Responsibilities
//! - Assign ids (`max(existing) + 1`, or 1 when empty)
//! - Serialize every mutation and the persist that follows it
//! - Hand out snapshots, never references into the live collection
//! - Load and validate the backing file on startup
//!
//! ## File Format
//! ```text
//! {data_dir}/posts.json
//! [
//!   { "id": 1, "title": "First post", "content": "This is the first post." },
//!   ...
//! ]
//! ```
//! The whole file is rewritten on each mutation: written to a sibling
//! temp file, then renamed over the old one.

mod file;
mod posts;

pub use file::PostFile;
pub use posts::PostStore;
