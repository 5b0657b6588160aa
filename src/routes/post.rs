use std::sync::Arc;

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::IntoResponse,
    routing::{get, patch, post},
    Extension, Json, Router,
};
use utoipa::OpenApi;

use crate::{
    models::{
        dto::{PostCreatedResponse, PostResponse, PostUpdatedResponse, UpdatePost, UploadPost},
        Error, NewPost, Permission, TokenClaim,
    },
    AppState,
};

use super::middlewares::{auth_guard, require_permission};

#[derive(OpenApi)]
#[openapi(paths(list_posts_handler, upload_post_handler, update_post_handler))]
/// Defines the OpenAPI spec for post endpoints
pub struct PostsApi;

/// Used to group post endpoints together in the OpenAPI documentation
pub const POST_API_GROUP: &str = "POST";

/// Builds a router for the notice-board routes. Listing is public; creating
/// and editing require a bearer.
pub fn post_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_posts_handler))
        .route(
            "/upload",
            post(upload_post_handler)
                .route_layer(middleware::from_fn(|req: Request, next: Next| {
                    require_permission(Permission::PublishPost, req, next)
                }))
                .route_layer(middleware::from_fn_with_state(state.clone(), auth_guard)),
        )
        .route(
            "/:id",
            patch(update_post_handler)
                .route_layer(middleware::from_fn(|req: Request, next: Next| {
                    require_permission(Permission::EditPost, req, next)
                }))
                .route_layer(middleware::from_fn_with_state(state.clone(), auth_guard)),
        )
}

// List posts handler function
#[utoipa::path(
    get,
    path = "/api/post",
    tag = POST_API_GROUP,
    responses(
        (status = 200, description = "All posts", body = [PostResponse]),
    )
)]
pub async fn list_posts_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, Error> {
    let posts = state.db.list_posts().await?;
    let posts: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();
    Ok(Json(posts))
}

// Upload post handler function
#[utoipa::path(
    post,
    path = "/api/post/upload",
    tag = POST_API_GROUP,
    request_body = UploadPost,
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 201, description = "Post created", body = PostCreatedResponse),
        (status = 401, description = "Token missing or invalid"),
    )
)]
pub async fn upload_post_handler(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<TokenClaim>,
    Json(body): Json<UploadPost>,
) -> Result<impl IntoResponse, Error> {
    let body = body.normalized()?;

    // The token carries only {id, account number, role}; the author name
    // comes from the credential store.
    let author = state
        .db
        .get_user_by_account_number(&claims.account_number)
        .await?
        .ok_or(Error::Unauthenticated)?;

    let post = state
        .db
        .create_post(&NewPost {
            author: author.full_name,
            account_number: claims.account_number,
            content: body.content,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PostCreatedResponse {
            message: "Post created".to_string(),
            post_id: post.id,
        }),
    ))
}

// Update post handler function
#[utoipa::path(
    patch,
    path = "/api/post/{id}",
    tag = POST_API_GROUP,
    request_body = UpdatePost,
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Post updated", body = PostUpdatedResponse),
        (status = 404, description = "Post not found"),
    ),
    params(
        ("id" = i32, Path, description = "Post ID")
    )
)]
pub async fn update_post_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(body): Json<UpdatePost>,
) -> Result<impl IntoResponse, Error> {
    let body = body.normalized()?;

    let post = state
        .db
        .update_post_content(id, &body.content)
        .await?
        .ok_or(Error::NotFound("Post"))?;

    Ok(Json(PostUpdatedResponse {
        message: "Post updated".to_string(),
        post: PostResponse::from(post),
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};
    use tower::ServiceExt; // for `oneshot`

    use crate::models::dto::{PostCreatedResponse, PostResponse, PostUpdatedResponse};
    use crate::models::Role;
    use crate::routes::test_utils::{
        bare_request, json_request, json_request_with_bearer, seed_user, test_app,
    };

    #[tokio::test]
    async fn listing_is_public_and_starts_empty() {
        let (app, _state) = test_app();

        let response = app
            .oneshot(bare_request("GET", "/api/post"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let posts: Vec<PostResponse> = serde_json::from_slice(&body).unwrap();
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn upload_without_token_is_rejected() {
        let (app, _state) = test_app();

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/post/upload",
                &json!({ "content": "hello" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn upload_attaches_the_bearer_identity() {
        let (app, state) = test_app();
        let (user, bearer) = seed_user(&state, Role::User, "10012345", "pw").await;

        let response = app
            .clone()
            .oneshot(json_request_with_bearer(
                "POST",
                "/api/post/upload",
                &json!({ "content": "first post" }),
                &bearer,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let created: PostCreatedResponse = serde_json::from_slice(&body).unwrap();

        let response = app
            .oneshot(bare_request("GET", "/api/post"))
            .await
            .unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let posts: Vec<PostResponse> = serde_json::from_slice(&body).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, created.post_id);
        assert_eq!(posts[0].user, user.full_name);
        assert_eq!(posts[0].account_number, user.account_number);
        assert_eq!(posts[0].content, "first post");
        assert!(posts[0].updated_at.is_none());
    }

    #[tokio::test]
    async fn patching_a_missing_post_returns_404() {
        let (app, state) = test_app();
        let (_user, bearer) = seed_user(&state, Role::User, "10012345", "pw").await;

        let response = app
            .oneshot(json_request_with_bearer(
                "PATCH",
                "/api/post/999",
                &json!({ "content": "edited" }),
                &bearer,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn patch_replaces_content_only() {
        let (app, state) = test_app();
        let (_user, bearer) = seed_user(&state, Role::User, "10012345", "pw").await;

        let response = app
            .clone()
            .oneshot(json_request_with_bearer(
                "POST",
                "/api/post/upload",
                &json!({ "content": "original" }),
                &bearer,
            ))
            .await
            .unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let created: PostCreatedResponse = serde_json::from_slice(&body).unwrap();

        let response = app
            .oneshot(json_request_with_bearer(
                "PATCH",
                &format!("/api/post/{}", created.post_id),
                &json!({ "content": "edited" }),
                &bearer,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let updated: PostUpdatedResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(updated.post.content, "edited");
        assert!(updated.post.updated_at.is_some());
    }

    #[tokio::test]
    async fn patch_with_stale_token_is_rejected() {
        let (app, _state) = test_app();

        let response = app
            .oneshot(json_request_with_bearer(
                "PATCH",
                "/api/post/1",
                &json!({ "content": "edited" }),
                "Bearer not.a.real.token",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn blank_content_is_a_validation_error() {
        let (app, state) = test_app();
        let (_user, bearer) = seed_user(&state, Role::User, "10012345", "pw").await;

        let response = app
            .oneshot(json_request_with_bearer(
                "POST",
                "/api/post/upload",
                &json!({ "content": "   " }),
                &bearer,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["message"], "content is required");
    }
}
