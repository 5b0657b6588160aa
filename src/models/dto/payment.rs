use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::required_field;
use crate::models::{Error, Payment, PaymentStatus};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewPaymentInfo {
    pub amount: f64,
    pub currency: String,
    pub account_info: String,
    pub swift_code: String,
}

impl NewPaymentInfo {
    /// Trims the string fields and rejects non-positive amounts.
    pub fn normalized(self) -> Result<Self, Error> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(Error::Validation(
                "amount must be a positive number".to_string(),
            ));
        }
        Ok(Self {
            amount: self.amount,
            currency: required_field("currency", &self.currency)?,
            account_info: required_field("accountInfo", &self.account_info)?,
            swift_code: required_field("swiftCode", &self.swift_code)?,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub id: i32,
    pub user_id: i32,
    pub amount: f64,
    pub currency: String,
    pub account_info: String,
    pub swift_code: String,
    pub status: PaymentStatus,
    pub created_at: String,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id,
            user_id: payment.user_id,
            amount: payment.amount,
            currency: payment.currency,
            account_info: payment.account_info,
            swift_code: payment.swift_code,
            status: payment.status,
            created_at: payment.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentSubmittedResponse {
    pub message: String,
    pub payment: PaymentResponse,
}
