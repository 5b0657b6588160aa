#[cfg(test)]
mod memory;
mod postgres;

#[cfg(test)]
pub use memory::InMemoryDatabase;
pub use postgres::PostgresDatabase;

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;

use crate::models::{Error, NewPayment, NewPost, NewUser, Payment, Post, Role, User};

/// Connects to a PostgreSQL database with the given `db_url`, returning a connection pool for accessing it
pub async fn connect_sqlx(db_url: &str) -> sqlx::PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .idle_timeout(Duration::from_secs(30))
        .max_connections(32)
        .min_connections(4)
        .connect(db_url)
        .await
        .expect("Could not connect to the database")
}

/// Data-access seam for the route handlers. The server runs on
/// [`PostgresDatabase`]; the handler tests run on `InMemoryDatabase`.
#[async_trait]
pub trait Database: Send + Sync {
    /// Insert a user. A taken account number is a [`Error::DuplicateAccount`].
    async fn create_user(&self, user: &NewUser) -> Result<User, Error>;

    /// Look a user up by account number.
    async fn get_user_by_account_number(&self, account_number: &str)
        -> Result<Option<User>, Error>;

    /// Any user holding `role`, if one exists. Used by the admin bootstrap.
    async fn get_user_with_role(&self, role: Role) -> Result<Option<User>, Error>;

    async fn create_post(&self, post: &NewPost) -> Result<Post, Error>;

    async fn list_posts(&self) -> Result<Vec<Post>, Error>;

    /// Replace a post's content, stamping `updated_at`. `None` when the id
    /// does not exist.
    async fn update_post_content(&self, id: i32, content: &str) -> Result<Option<Post>, Error>;

    async fn create_payment(&self, payment: &NewPayment) -> Result<Payment, Error>;
}
