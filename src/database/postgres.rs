use async_trait::async_trait;
use sqlx::PgPool;

use super::Database;
use crate::models::{Error, NewPayment, NewPost, NewUser, Payment, Post, Role, User};

pub struct PostgresDatabase {
    sqlx_db: PgPool,
}

impl PostgresDatabase {
    pub fn new(sqlx_db: PgPool) -> Self {
        PostgresDatabase { sqlx_db }
    }

    /// Applies the embedded migrations from `./migrations`.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!().run(&self.sqlx_db).await
    }
}

#[async_trait]
impl Database for PostgresDatabase {
    async fn create_user(&self, user: &NewUser) -> Result<User, Error> {
        let row = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO app_user (full_name, id_number, account_number, password_hash, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, full_name, id_number, account_number, password_hash, role,
                      created_at, updated_at
            "#,
        )
        .bind(&user.full_name)
        .bind(&user.id_number)
        .bind(&user.account_number)
        .bind(&user.password_hash)
        .bind(user.role)
        .fetch_one(&self.sqlx_db)
        .await?;

        Ok(row)
    }

    async fn get_user_by_account_number(
        &self,
        account_number: &str,
    ) -> Result<Option<User>, Error> {
        let row = sqlx::query_as::<_, User>(
            r#"
            SELECT id, full_name, id_number, account_number, password_hash, role,
                   created_at, updated_at
            FROM app_user
            WHERE account_number = $1
            "#,
        )
        .bind(account_number)
        .fetch_optional(&self.sqlx_db)
        .await?;

        Ok(row)
    }

    async fn get_user_with_role(&self, role: Role) -> Result<Option<User>, Error> {
        let row = sqlx::query_as::<_, User>(
            r#"
            SELECT id, full_name, id_number, account_number, password_hash, role,
                   created_at, updated_at
            FROM app_user
            WHERE role = $1
            LIMIT 1
            "#,
        )
        .bind(role)
        .fetch_optional(&self.sqlx_db)
        .await?;

        Ok(row)
    }

    async fn create_post(&self, post: &NewPost) -> Result<Post, Error> {
        let row = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO post (author, account_number, content)
            VALUES ($1, $2, $3)
            RETURNING id, author, account_number, content, created_at, updated_at
            "#,
        )
        .bind(&post.author)
        .bind(&post.account_number)
        .bind(&post.content)
        .fetch_one(&self.sqlx_db)
        .await?;

        Ok(row)
    }

    async fn list_posts(&self) -> Result<Vec<Post>, Error> {
        let rows = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, author, account_number, content, created_at, updated_at
            FROM post
            ORDER BY id
            "#,
        )
        .fetch_all(&self.sqlx_db)
        .await?;

        Ok(rows)
    }

    async fn update_post_content(&self, id: i32, content: &str) -> Result<Option<Post>, Error> {
        let row = sqlx::query_as::<_, Post>(
            r#"
            UPDATE post
            SET content = $2, updated_at = now()
            WHERE id = $1
            RETURNING id, author, account_number, content, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(content)
        .fetch_optional(&self.sqlx_db)
        .await?;

        Ok(row)
    }

    async fn create_payment(&self, payment: &NewPayment) -> Result<Payment, Error> {
        let row = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payment (user_id, amount, currency, account_info, swift_code)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, amount, currency, account_info, swift_code, status,
                      created_at
            "#,
        )
        .bind(payment.user_id)
        .bind(payment.amount)
        .bind(&payment.currency)
        .bind(&payment.account_info)
        .bind(&payment.swift_code)
        .fetch_one(&self.sqlx_db)
        .await?;

        Ok(row)
    }
}
