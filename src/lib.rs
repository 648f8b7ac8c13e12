//! # Postbox
//!
//! A small durable post service with:
//! - Create/read/update/delete of short text posts
//! - Case-insensitive sorting and substring search
//! - Write-through persistence to a single JSON file
//! - Single-lock concurrency model
//! - JSON HTTP API
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HTTP Server                             │
//! │                  (axum, many requests)                       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │ snapshot                │ mutate
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Query     │          │  PostStore  │
//!   │ (sort/find) │          │   (Mutex)   │
//!   └─────────────┘          └──────┬──────┘
//!                                   │ whole-file rewrite
//!                                   ▼
//!                           ┌─────────────┐
//!                           │ posts.json  │
//!                           └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod post;
pub mod store;
pub mod query;
pub mod http;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{PostboxError, Result};
pub use config::Config;
pub use post::{NewPost, Post, PostUpdate};
pub use store::PostStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Postbox
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
