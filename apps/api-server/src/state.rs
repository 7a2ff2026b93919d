//! Application state - shared across all handlers.

use std::sync::Arc;

use dashboard_core::ports::PostRepository;
use dashboard_infra::auth::CredentialStore;

/// Shared application state.
///
/// Everything here is immutable after startup; the repository delegates all
/// mutable state to the durable store.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub credentials: Arc<CredentialStore>,
}
