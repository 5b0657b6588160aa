use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    models::{
        dto::{LoginInfo, SignupInfo, TokenResponse, UserCreatedResponse},
        user::HASH_COST,
        Error, NewUser, Role, TokenClaim,
    },
    AppState,
};

#[derive(OpenApi)]
#[openapi(paths(signup_handler, login_handler))]
/// Defines the OpenAPI spec for user endpoints
pub struct UsersApi;

/// Used to group user endpoints together in the OpenAPI documentation
pub const USER_API_GROUP: &str = "USER";

/// Builds a router for all the user routes
pub fn user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/signup", post(signup_handler))
        .route("/login", post(login_handler))
}

// Signup handler function
#[utoipa::path(
    post,
    path = "/api/user/signup",
    tag = USER_API_GROUP,
    request_body = SignupInfo,
    responses(
        (status = 201, description = "User successfully created", body = UserCreatedResponse),
        (status = 400, description = "Invalid fields or account number already exists"),
    )
)]
pub async fn signup_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SignupInfo>,
) -> Result<impl IntoResponse, Error> {
    let body = body.normalized()?;

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
            role: Role::User,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserCreatedResponse {
            message: "User created successfully".to_string(),
            user_id: user.id,
        }),
    ))
}

// Login handler function
#[utoipa::path(
    post,
    path = "/api/user/login",
    tag = USER_API_GROUP,
    request_body = LoginInfo,
    responses(
        (status = 200, description = "Authentication successful", body = TokenResponse),
        (status = 401, description = "Unknown account number or wrong password"),
    )
)]
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginInfo>,
) -> Result<impl IntoResponse, Error> {
    let body = body.normalized()?;

    let user = state
        .db
        .get_user_by_account_number(&body.account_number)
        .await?
        .ok_or(Error::InvalidCredentials)?;

    if !bcrypt::verify(&body.password, &user.password_hash)? {
        return Err(Error::InvalidCredentials);
    }

    let token = TokenClaim::issue(&user, &state.config.jwt_secret)?;

    Ok(Json(TokenResponse {
        token,
        role: user.role,
    }))
}
