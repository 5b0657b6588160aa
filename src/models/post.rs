use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Notice-board entry. The author identity is copied from the bearer's
/// credentials at creation time; only `content` is updatable afterwards.
#[derive(Debug, Clone, Deserialize, Serialize, sqlx::FromRow)]
pub struct Post {
    pub id: i32,
    pub author: String,
    pub account_number: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Insert set for a post; the database assigns id and created_at.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub author: String,
    pub account_number: String,
    pub content: String,
}
