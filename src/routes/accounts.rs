use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::IntoResponse,
    routing::post,
    Extension, Json, Router,
};
use tracing::info;
use utoipa::OpenApi;

use crate::{
    models::{
        dto::{CreateAccountInfo, UserCreatedResponse},
        user::HASH_COST,
        Error, NewUser, Permission, Role, TokenClaim, User,
    },
    AppState,
};

use super::middlewares::{auth_guard, require_permission};

#[derive(OpenApi)]
#[openapi(paths(create_account_handler, create_user_handler))]
/// Defines the OpenAPI spec for the tiered account-creation endpoints
pub struct AccountsApi;

/// Used to group account-creation endpoints together in the OpenAPI documentation
pub const ACCOUNTS_API_GROUP: &str = "ACCOUNTS";

/// Builds the admin-only router. Admins may create employee and user
/// accounts.
pub fn admin_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/create-account", post(create_account_handler))
        .route_layer(middleware::from_fn(|req: Request, next: Next| {
            require_permission(Permission::ProvisionAccounts, req, next)
        }))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_guard))
}

/// Builds the employee-only router. Employees may create user accounts.
pub fn employee_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/create-user", post(create_user_handler))
        .route_layer(middleware::from_fn(|req: Request, next: Next| {
            require_permission(Permission::RegisterCustomers, req, next)
        }))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_guard))
}

// Create account handler function (admin tier)
#[utoipa::path(
    post,
    path = "/api/admin/create-account",
    tag = ACCOUNTS_API_GROUP,
    request_body = CreateAccountInfo,
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 201, description = "Account successfully created", body = UserCreatedResponse),
        (status = 400, description = "Invalid fields, unassignable role, or duplicate account number"),
        (status = 403, description = "Bearer is not an admin"),
    )
)]
pub async fn create_account_handler(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<TokenClaim>,
    Json(body): Json<CreateAccountInfo>,
) -> Result<impl IntoResponse, Error> {
    let user = provision_account(&state, claims.role, body).await?;
    Ok((
        StatusCode::CREATED,
        Json(UserCreatedResponse {
            message: "Account successfully created".to_string(),
            user_id: user.id,
        }),
    ))
}

// Create user handler function (employee tier)
#[utoipa::path(
    post,
    path = "/api/employee/create-user",
    tag = ACCOUNTS_API_GROUP,
    request_body = CreateAccountInfo,
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 201, description = "User account successfully created", body = UserCreatedResponse),
        (status = 400, description = "Invalid fields, unassignable role, or duplicate account number"),
        (status = 403, description = "Bearer is not an employee"),
    )
)]
pub async fn create_user_handler(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<TokenClaim>,
    Json(body): Json<CreateAccountInfo>,
) -> Result<impl IntoResponse, Error> {
    let user = provision_account(&state, claims.role, body).await?;
    Ok((
        StatusCode::CREATED,
        Json(UserCreatedResponse {
            message: "User account successfully created".to_string(),
            user_id: user.id,
        }),
    ))
}

/// Shared creation flow for both tiers. The requested role must sit inside
/// the creator's assignable set.
async fn provision_account(
    state: &AppState,
    creator: Role,
    body: CreateAccountInfo,
) -> Result<User, Error> {
    let body = body.normalized()?;

    if !creator.may_assign(body.role) {
        return Err(Error::Validation(format!(
            "role {} may not assign role {}",
            creator, body.role
        )));
    }

    if state
        .db
        .get_user_by_account_number(&body.account_number)
        .await?
        .is_some()
    {
        return Err(Error::DuplicateAccount);
    }

    let password_hash = bcrypt::hash(&body.password, HASH_COST)?;
    let user = state
        .db
        .create_user(&NewUser {
            full_name: body.full_name,
            id_number: body.id_number,
            account_number: body.account_number,
            password_hash,
            role: body.role,
        })
        .await?;

    info!(account_number = %user.account_number, role = %user.role, "account created");
    Ok(user)
}
