use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::required_field;
use crate::models::{Error, Role};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupInfo {
    pub full_name: String,
    pub id_number: String,
    pub account_number: String,
    pub password: String,
}

impl SignupInfo {
    /// Trims every field and rejects empties.
    pub fn normalized(self) -> Result<Self, Error> {
        Ok(Self {
            full_name: required_field("fullName", &self.full_name)?,
            id_number: required_field("idNumber", &self.id_number)?,
            account_number: required_field("accountNumber", &self.account_number)?,
            password: required_field("password", &self.password)?,
        })
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginInfo {
    pub account_number: String,
    pub password: String,
}

impl LoginInfo {
    pub fn normalized(self) -> Result<Self, Error> {
        Ok(Self {
            account_number: required_field("accountNumber", &self.account_number)?,
            password: required_field("password", &self.password)?,
        })
    }
}

/// Account-creation request used by the admin and employee tiers. The
/// requested role is validated against the caller's assignable set.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountInfo {
    pub full_name: String,
    pub id_number: String,
    pub account_number: String,
    pub password: String,
    #[schema(example = "employee")]
    pub role: Role,
}

impl CreateAccountInfo {
    pub fn normalized(self) -> Result<Self, Error> {
        Ok(Self {
            full_name: required_field("fullName", &self.full_name)?,
            id_number: required_field("idNumber", &self.id_number)?,
            account_number: required_field("accountNumber", &self.account_number)?,
            password: required_field("password", &self.password)?,
            role: self.role,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
    pub role: Role,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserCreatedResponse {
    pub message: String,
    pub user_id: i32,
}
