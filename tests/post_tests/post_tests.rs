//! Tests for the Post model
//!
//! These tests verify:
//! - JSON shape of Post and the request bodies
//! - Create validation
//! - Partial update semantics

use postbox::post::sample_posts;
use postbox::{NewPost, Post, PostUpdate, PostboxError};
use serde_json::json;

// =============================================================================
// Serialization Tests
// =============================================================================

#[test]
fn test_post_json_shape() {
    let post = Post::new(3, "T", "C");

    assert_eq!(
        serde_json::to_value(&post).unwrap(),
        json!({ "id": 3, "title": "T", "content": "C" })
    );
}

#[test]
fn test_new_post_accepts_missing_and_null_fields() {
    let draft: NewPost = serde_json::from_value(json!({ "title": null })).unwrap();

    assert_eq!(draft, NewPost::default());
}

#[test]
fn test_update_ignores_unknown_fields() {
    let update: PostUpdate =
        serde_json::from_value(json!({ "title": "x", "id": 99 })).unwrap();

    assert_eq!(update, PostUpdate::default().title("x"));
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_validate_ok() {
    let (title, content) = NewPost::new("T", "C").validate().unwrap();

    assert_eq!(title, "T");
    assert_eq!(content, "C");
}

#[test]
fn test_validate_missing_content() {
    let err = NewPost {
        title: Some("T".into()),
        content: None,
    }
    .validate()
    .unwrap_err();

    assert!(matches!(err, PostboxError::Validation { .. }));
    assert_eq!(err.to_string(), "Missing fields: content");
}

#[test]
fn test_sample_posts_are_valid() {
    let drafts = sample_posts();

    assert_eq!(drafts.len(), 2);
    for draft in drafts {
        assert!(draft.validate().is_ok());
    }
}

// =============================================================================
// Update Tests
// =============================================================================

#[test]
fn test_apply_both_fields() {
    let mut post = Post::new(1, "old", "old");

    let changed = PostUpdate::default()
        .title("new title")
        .content("new content")
        .apply(&mut post);

    assert!(changed);
    assert_eq!(post, Post::new(1, "new title", "new content"));
}

#[test]
fn test_apply_nothing() {
    let mut post = Post::new(1, "old", "old");

    assert!(!PostUpdate::default().apply(&mut post));
    assert!(!PostUpdate::default().title("").content("").apply(&mut post));
    assert_eq!(post, Post::new(1, "old", "old"));
}

#[test]
fn test_apply_same_value_reports_unchanged() {
    let mut post = Post::new(1, "same", "body");

    assert!(!PostUpdate::default().title("same").apply(&mut post));
}
