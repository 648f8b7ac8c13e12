//! Sorting
//!
//! Validated, case-insensitive, stable ordering by title or content.

use std::cmp::Reverse;
use std::str::FromStr;

use crate::error::{PostboxError, Result};
use crate::post::Post;

/// Field a listing can be sorted on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Content,
}

impl SortField {
    fn key<'a>(&self, post: &'a Post) -> &'a str {
        match self {
            SortField::Title => &post.title,
            SortField::Content => &post.content,
        }
    }
}

impl FromStr for SortField {
    type Err = PostboxError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "title" => Ok(SortField::Title),
            "content" => Ok(SortField::Content),
            other => Err(PostboxError::InvalidSortField(other.to_string())),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = PostboxError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(PostboxError::InvalidDirection(other.to_string())),
        }
    }
}

/// Sort `posts` by the named field and direction
///
/// Empty strings count as absent. Without a field the input comes back
/// unchanged and `direction` is not looked at. Ties keep their input
/// order in both directions.
pub fn sort_posts(
    mut posts: Vec<Post>,
    field: Option<&str>,
    direction: Option<&str>,
) -> Result<Vec<Post>> {
    let Some(field) = field.filter(|f| !f.is_empty()) else {
        return Ok(posts);
    };

    let field: SortField = field.parse()?;
    let direction = match direction.filter(|d| !d.is_empty()) {
        Some(d) => d.parse()?,
        None => SortDirection::default(),
    };

    match direction {
        SortDirection::Asc => posts.sort_by_cached_key(|p| field.key(p).to_lowercase()),
        SortDirection::Desc => {
            posts.sort_by_cached_key(|p| Reverse(field.key(p).to_lowercase()))
        }
    }

    Ok(posts)
}
