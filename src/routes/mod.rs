mod accounts;
mod health;
mod middlewares;
mod payment;
mod post;
mod swagger;
mod user;

use health::health_checker_handler;

use crate::AppState;

use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::{routing::get, Router};
use std::error::Error;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Assembles the full application router around the shared state built in
/// `main` (or by the tests).
pub fn make_app(state: Arc<AppState>) -> Result<Router, Box<dyn Error>> {
    let cors_origin = state.config.cors_origin.parse::<HeaderValue>()?;
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE]);

    let ret = Router::new()
        .route("/api", get(health_checker_handler))
        .route("/api/health", get(health_checker_handler))
        .nest("/api/user", user::user_routes())
        .nest("/api/post", post::post_routes(state.clone()))
        .nest("/api/payment", payment::payment_routes(state.clone()))
        .nest("/api/admin", accounts::admin_routes(state.clone()))
        .nest("/api/employee", accounts::employee_routes(state.clone()))
        .merge(swagger::build_documentation())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    Ok(ret)
}
