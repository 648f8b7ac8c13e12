//! Searching
//!
//! Case-insensitive substring filter over titles and contents.

use crate::post::Post;

/// Posts whose title contains `title` or whose content contains `content`
///
/// An absent or empty query matches nothing for its field. With both
/// absent the result is empty, even for a non-empty input.
pub fn search_posts(posts: &[Post], title: Option<&str>, content: Option<&str>) -> Vec<Post> {
    let title = normalize(title);
    let content = normalize(content);

    if title.is_none() && content.is_none() {
        return Vec::new();
    }

    posts
        .iter()
        .filter(|post| {
            contains(&post.title, title.as_deref()) || contains(&post.content, content.as_deref())
        })
        .cloned()
        .collect()
}

fn normalize(query: Option<&str>) -> Option<String> {
    query.filter(|q| !q.is_empty()).map(str::to_lowercase)
}

fn contains(haystack: &str, needle: Option<&str>) -> bool {
    needle.is_some_and(|n| haystack.to_lowercase().contains(n))
}
