//! Tests for sort_posts
//!
//! These tests verify:
//! - Absent field leaves order untouched
//! - Field/direction validation
//! - Case-insensitive ordering
//! - Stability and idempotence
//! - desc is the reverse of asc for distinct keys

use postbox::query::sort_posts;
use postbox::{Post, PostboxError};

// =============================================================================
// Helper Functions
// =============================================================================

fn sample() -> Vec<Post> {
    vec![
        Post::new(1, "First post", "This is the first post."),
        Post::new(2, "Second post", "This is the second post."),
    ]
}

fn mixed_case() -> Vec<Post> {
    vec![
        Post::new(1, "banana", "c"),
        Post::new(2, "Apple", "B"),
        Post::new(3, "cherry", "a"),
        Post::new(4, "apricot", "D"),
    ]
}

fn ids(posts: &[Post]) -> Vec<u64> {
    posts.iter().map(|p| p.id).collect()
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_no_field_returns_input() {
    let posts = mixed_case();

    assert_eq!(sort_posts(posts.clone(), None, None).unwrap(), posts);
    assert_eq!(sort_posts(posts.clone(), Some(""), Some("desc")).unwrap(), posts);
}

#[test]
fn test_invalid_field() {
    let err = sort_posts(sample(), Some("id"), None).unwrap_err();

    assert!(matches!(err, PostboxError::InvalidSortField(ref f) if f == "id"));
    assert_eq!(
        err.to_string(),
        "Invalid sort field 'id'. Must be 'title' or 'content'."
    );
}

#[test]
fn test_invalid_direction() {
    let err = sort_posts(sample(), Some("title"), Some("up")).unwrap_err();

    assert!(matches!(err, PostboxError::InvalidDirection(ref d) if d == "up"));
    assert_eq!(
        err.to_string(),
        "Invalid direction 'up'. Must be 'asc' or 'desc'."
    );
}

#[test]
fn test_field_checked_before_direction() {
    let err = sort_posts(sample(), Some("bogus"), Some("bogus")).unwrap_err();

    assert!(matches!(err, PostboxError::InvalidSortField(_)));
}

// =============================================================================
// Ordering Tests
// =============================================================================

#[test]
fn test_default_direction_is_ascending() {
    let sorted = sort_posts(mixed_case(), Some("title"), None).unwrap();

    assert_eq!(ids(&sorted), vec![2, 4, 1, 3]);
}

#[test]
fn test_sort_title_desc_scenario() {
    let sorted = sort_posts(sample(), Some("title"), Some("desc")).unwrap();

    assert_eq!(ids(&sorted), vec![2, 1]);
}

#[test]
fn test_sort_content_case_insensitive() {
    let sorted = sort_posts(mixed_case(), Some("content"), Some("asc")).unwrap();

    assert_eq!(ids(&sorted), vec![3, 2, 1, 4]);
}

#[test]
fn test_desc_reverses_asc_for_unique_keys() {
    let asc = sort_posts(mixed_case(), Some("title"), Some("asc")).unwrap();
    let mut desc = sort_posts(mixed_case(), Some("title"), Some("desc")).unwrap();
    desc.reverse();

    assert_eq!(asc, desc);
}

#[test]
fn test_sort_is_stable_in_both_directions() {
    let posts = vec![
        Post::new(1, "same", "x"),
        Post::new(2, "SAME", "y"),
        Post::new(3, "other", "z"),
        Post::new(4, "Same", "w"),
    ];

    let asc = sort_posts(posts.clone(), Some("title"), Some("asc")).unwrap();
    let desc = sort_posts(posts, Some("title"), Some("desc")).unwrap();

    assert_eq!(ids(&asc), vec![3, 1, 2, 4]);
    assert_eq!(ids(&desc), vec![1, 2, 4, 3]);
}

#[test]
fn test_sort_is_idempotent() {
    for direction in ["asc", "desc"] {
        let once = sort_posts(mixed_case(), Some("content"), Some(direction)).unwrap();
        let twice = sort_posts(once.clone(), Some("content"), Some(direction)).unwrap();
        assert_eq!(once, twice);
    }
}

#[test]
fn test_sort_empty_input() {
    assert!(sort_posts(Vec::new(), Some("title"), Some("desc"))
        .unwrap()
        .is_empty());
}
