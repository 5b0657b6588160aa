use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use super::Database;
use crate::models::{
    Error, NewPayment, NewPost, NewUser, Payment, PaymentStatus, Post, Role, User,
};

/// Store backing the handler tests; mirrors the Postgres behavior, including
/// the unique account-number constraint.
#[derive(Default)]
pub struct InMemoryDatabase {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    posts: Vec<Post>,
    payments: Vec<Payment>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Database for InMemoryDatabase {
    async fn create_user(&self, user: &NewUser) -> Result<User, Error> {
        let mut inner = self.inner.lock().unwrap();
        if inner
            .users
            .iter()
            .any(|existing| existing.account_number == user.account_number)
        {
            return Err(Error::DuplicateAccount);
        }

        let now = Utc::now();
        let user = User {
            id: inner.users.len() as i32 + 1,
            full_name: user.full_name.clone(),
            id_number: user.id_number.clone(),
            account_number: user.account_number.clone(),
            password_hash: user.password_hash.clone(),
            role: user.role,
            created_at: now,
            updated_at: now,
        };
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn get_user_by_account_number(
        &self,
        account_number: &str,
    ) -> Result<Option<User>, Error> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .users
            .iter()
            .find(|user| user.account_number == account_number)
            .cloned())
    }

    async fn get_user_with_role(&self, role: Role) -> Result<Option<User>, Error> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().find(|user| user.role == role).cloned())
    }

    async fn create_post(&self, post: &NewPost) -> Result<Post, Error> {
        let mut inner = self.inner.lock().unwrap();
        let post = Post {
            id: inner.posts.len() as i32 + 1,
            author: post.author.clone(),
            account_number: post.account_number.clone(),
            content: post.content.clone(),
            created_at: Utc::now(),
            updated_at: None,
        };
        inner.posts.push(post.clone());
        Ok(post)
    }

    async fn list_posts(&self) -> Result<Vec<Post>, Error> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.posts.clone())
    }

    async fn update_post_content(&self, id: i32, content: &str) -> Result<Option<Post>, Error> {
        let mut inner = self.inner.lock().unwrap();
        let Some(post) = inner.posts.iter_mut().find(|post| post.id == id) else {
            return Ok(None);
        };
        post.content = content.to_string();
        post.updated_at = Some(Utc::now());
        Ok(Some(post.clone()))
    }

    async fn create_payment(&self, payment: &NewPayment) -> Result<Payment, Error> {
        let mut inner = self.inner.lock().unwrap();
        let payment = Payment {
            id: inner.payments.len() as i32 + 1,
            user_id: payment.user_id,
            amount: payment.amount,
            currency: payment.currency.clone(),
            account_info: payment.account_info.clone(),
            swift_code: payment.swift_code.clone(),
            status: PaymentStatus::Pending,
            created_at: Utc::now(),
        };
        inner.payments.push(payment.clone());
        Ok(payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(account_number: &str) -> NewUser {
        NewUser {
            full_name: "Test Person".to_string(),
            id_number: "9001015800084".to_string(),
            account_number: account_number.to_string(),
            password_hash: "hash".to_string(),
            role: Role::User,
        }
    }

    #[tokio::test]
    async fn duplicate_account_number_is_rejected() {
        let db = InMemoryDatabase::new();
        db.create_user(&new_user("10012345")).await.unwrap();

        let result = db.create_user(&new_user("10012345")).await;
        assert!(matches!(result, Err(Error::DuplicateAccount)));
    }

    #[tokio::test]
    async fn update_missing_post_returns_none() {
        let db = InMemoryDatabase::new();
        let updated = db.update_post_content(42, "new content").await.unwrap();
        assert!(updated.is_none());
    }
}
