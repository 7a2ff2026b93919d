//! Test doubles and fixtures shared by handler tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use dashboard_core::domain::Post;
use dashboard_core::error::RepoError;
use dashboard_core::ports::{PostRepository, TokenService};
use dashboard_infra::auth::{Argon2PasswordService, CredentialStore, JwtTokenService};

use crate::state::AppState;

/// In-memory post repository backing handler tests.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: Mutex<Vec<Post>>,
}

impl InMemoryPostRepository {
    /// Place a post in the store without going through a handler.
    pub fn seed(&self, post: Post) {
        self.posts.lock().unwrap().push(post);
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let mut posts = self.posts.lock().unwrap().clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.lock().unwrap();
        match posts.iter_mut().find(|p| p.id == post.id) {
            Some(existing) => {
                *existing = post.clone();
                Ok(post)
            }
            None => Err(RepoError::NotFound),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

/// Repository double whose every operation fails like an unreachable store.
pub struct FailingPostRepository;

#[async_trait]
impl PostRepository for FailingPostRepository {
    async fn insert(&self, _post: Post) -> Result<Post, RepoError> {
        Err(RepoError::Query("connection reset by peer".to_string()))
    }

    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        Err(RepoError::Query("connection reset by peer".to_string()))
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Post>, RepoError> {
        Err(RepoError::Query("connection reset by peer".to_string()))
    }

    async fn update(&self, _post: Post) -> Result<Post, RepoError> {
        Err(RepoError::Query("connection reset by peer".to_string()))
    }

    async fn delete(&self, _id: Uuid) -> Result<(), RepoError> {
        Err(RepoError::Query("connection reset by peer".to_string()))
    }
}

/// Application state over the given repository with the default operator
/// credentials (`jorge` / `dashboard123`).
pub fn test_state(posts: Arc<dyn PostRepository>) -> AppState {
    let credentials = CredentialStore::new(
        "jorge".to_string(),
        "dashboard123",
        Box::new(Argon2PasswordService::new()),
    )
    .unwrap();

    AppState {
        posts,
        credentials: Arc::new(credentials),
    }
}

pub fn test_token_service() -> Arc<dyn TokenService> {
    Arc::new(JwtTokenService::new("test-secret"))
}
