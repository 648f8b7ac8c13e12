//! Query Module
//!
//! Pure transformations over a snapshot of posts. Nothing here touches the
//! store; callers take a snapshot with `PostStore::list()` first.
//!
//! ## Sorting
//! - No field: input order is returned as-is
//! - Field must be `title` or `content`, direction `asc` (default) or `desc`
//! - Case-insensitive, stable
//!
//! ## Searching
//! - Case-insensitive substring match on title OR content
//! - No queries at all yields an empty result

mod sort;
mod search;

pub use sort::{sort_posts, SortDirection, SortField};
pub use search::search_posts;
