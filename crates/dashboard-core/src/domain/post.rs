use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Post entity - the persisted content record managed by the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial field replacement for an existing post.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Post {
    /// Create a new post with a generated id and fresh timestamps.
    ///
    /// Title and content are required, non-empty fields.
    pub fn new(title: String, content: String) -> Result<Self, DomainError> {
        validate_field("title", &title)?;
        validate_field("content", &content)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            content,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a partial update and refresh `updated_at`.
    ///
    /// `id` and `created_at` are immutable for the lifetime of the record.
    pub fn apply(&mut self, changes: PostChanges) -> Result<(), DomainError> {
        if let Some(title) = &changes.title {
            validate_field("title", title)?;
        }
        if let Some(content) = &changes.content {
            validate_field("content", content)?;
        }

        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

fn validate_field(name: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!(
            "{name} is required and must not be empty"
        )));
    }
    Ok(())
}
