//! HTTP Module
//!
//! JSON API over a shared `PostStore`.
//!
//! ## Routes
//! ```text
//! GET    /api/posts           ?sort=title|content&direction=asc|desc
//! POST   /api/posts           {"title", "content"}           -> 201
//! GET    /api/posts/search    ?title=..&content=..
//! GET    /api/posts/{id}
//! PUT    /api/posts/{id}      {"title"?, "content"?}
//! DELETE /api/posts/{id}                                     -> {"message"}
//! ```
//! Errors are `{"error": "..."}` with 400, 404 or 500.

mod response;
mod routes;
mod server;

pub use response::{ErrorBody, MessageBody};
pub use routes::router;
pub use server::Server;
