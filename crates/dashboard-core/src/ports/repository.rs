use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::RepoError;

/// Post repository - the durable store is the sole owner of post state.
///
/// Single-operation atomicity is the store's responsibility; no additional
/// locking happens at this layer.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a freshly created post.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// All current posts, most recently created first.
    /// Freshly queried per call; an empty list is valid.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its unique id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Persist the new state of an existing post.
    /// Fails with `RepoError::NotFound` when the id is unknown.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    /// Remove the post matching id.
    /// Fails with `RepoError::NotFound` when the id is unknown.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}
