use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// bcrypt cost factor applied to every stored password.
pub const HASH_COST: u32 = 10;

/// Account roles. Stored in the `user_role` database enum and embedded
/// verbatim in token claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
            Role::User => "user",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub full_name: String,
    pub id_number: String,
    pub account_number: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert set for a user; the database assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub full_name: String,
    pub id_number: String,
    pub account_number: String,
    pub password_hash: String,
    pub role: Role,
}
