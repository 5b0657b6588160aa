use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::required_field;
use crate::models::{Error, Post};

#[derive(Debug, Deserialize, ToSchema)]
pub struct UploadPost {
    pub content: String,
}

impl UploadPost {
    pub fn normalized(self) -> Result<Self, Error> {
        Ok(Self {
            content: required_field("content", &self.content)?,
        })
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePost {
    pub content: String,
}

impl UpdatePost {
    pub fn normalized(self) -> Result<Self, Error> {
        Ok(Self {
            content: required_field("content", &self.content)?,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i32,
    /// Author full name.
    pub user: String,
    pub account_number: String,
    pub content: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            user: post.author,
            account_number: post.account_number,
            content: post.content,
            created_at: post.created_at.to_string(),
            updated_at: post.updated_at.map(|at| at.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostCreatedResponse {
    pub message: String,
    pub post_id: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PostUpdatedResponse {
    pub message: String,
    pub post: PostResponse,
}
