use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Settlement state of a payment. Submissions always enter as `Pending`;
/// the later states are reserved for back-office processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "payment_status", rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Rejected,
}

#[derive(Debug, Clone, Deserialize, Serialize, sqlx::FromRow)]
pub struct Payment {
    pub id: i32,
    pub user_id: i32,
    pub amount: f64,
    pub currency: String,
    pub account_info: String,
    pub swift_code: String,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

/// Insert set for a payment. The status column defaults to `pending`.
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub user_id: i32,
    pub amount: f64,
    pub currency: String,
    pub account_info: String,
    pub swift_code: String,
}
