use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plain `{"message": ...}` body used for errors and acknowledgements.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
