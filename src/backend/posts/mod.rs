//! Posts Module
//!
//! Post authoring, reading and engagement.
//!
//! # Module Structure
//!
//! ```text
//! posts/
//! ├── mod.rs          - Module exports and documentation
//! ├── ownership.rs    - Ownership check (identity vs. recorded owner)
//! ├── mutation.rs     - Load, authorize, mutate, persist for edit/delete
//! ├── types.rs        - Request and response types
//! └── handlers.rs     - HTTP handlers
//! ```
//!
//! # Handlers
//!
//! - **`create_post`** - POST /posts (authenticated; caller becomes owner)
//! - **`list_posts`** - GET /posts
//! - **`get_post`** - GET /posts/{id}
//! - **`edit_post`** - PUT /posts/{id} (owner only)
//! - **`delete_post`** - DELETE /posts/{id} (owner only)
//! - **`like_post`** - POST /posts/{id}/like
//! - **`add_comment`** - POST /posts/{id}/comments
//! - **`list_comments`** - GET /posts/{id}/comments

/// Ownership check
pub mod ownership;

/// Owned resource mutation sequence
pub mod mutation;

/// Request and response types
pub mod types;

/// HTTP handlers
pub mod handlers;

pub use handlers::{
    add_comment, create_post, delete_post, edit_post, get_post, like_post, list_comments,
    list_posts,
};
pub use mutation::{delete_owned, edit_owned, load_owned};
pub use ownership::{authorize, Decision};
