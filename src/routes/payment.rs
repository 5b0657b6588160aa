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
        dto::{NewPaymentInfo, PaymentResponse, PaymentSubmittedResponse},
        Error, NewPayment, Permission, TokenClaim,
    },
    AppState,
};

use super::middlewares::{auth_guard, require_permission};

#[derive(OpenApi)]
#[openapi(paths(submit_payment_handler))]
/// Defines the OpenAPI spec for payment endpoints
pub struct PaymentsApi;

/// Used to group payment endpoints together in the OpenAPI documentation
pub const PAYMENT_API_GROUP: &str = "PAYMENT";

/// Builds a router for the international-payment route.
pub fn payment_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(submit_payment_handler))
        .route_layer(middleware::from_fn(|req: Request, next: Next| {
            require_permission(Permission::SubmitPayment, req, next)
        }))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_guard))
}

// Submit payment handler function
#[utoipa::path(
    post,
    path = "/api/payment",
    tag = PAYMENT_API_GROUP,
    request_body = NewPaymentInfo,
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 201, description = "Payment accepted for processing", body = PaymentSubmittedResponse),
        (status = 400, description = "Invalid payment fields"),
        (status = 401, description = "Token missing or invalid"),
        (status = 403, description = "Bearer role may not submit payments"),
    )
)]
pub async fn submit_payment_handler(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<TokenClaim>,
    Json(body): Json<NewPaymentInfo>,
) -> Result<impl IntoResponse, Error> {
    let body = body.normalized()?;

    let payment = state
        .db
        .create_payment(&NewPayment {
            user_id: claims.sub,
            amount: body.amount,
            currency: body.currency,
            account_info: body.account_info,
            swift_code: body.swift_code,
        })
        .await?;

    info!(payment_id = payment.id, user_id = payment.user_id, "payment submitted");

    Ok((
        StatusCode::CREATED,
        Json(PaymentSubmittedResponse {
            message: "Payment successfully submitted".to_string(),
            payment: PaymentResponse::from(payment),
        }),
    ))
}
