//! User endpoints
//!
//! Each handler issues exactly one store call. Routes accept any method.

use axum::{extract::State, http::StatusCode, routing::any, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, UserIdQuery};
use crate::models::{NewUser, User};
use crate::state::AppState;

/// POST /users - create a user, 201 with the stored record
async fn create_user(
    State(state): State<AppState>,
    JsonBody(new): JsonBody<NewUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state.store().create(new).await?;
    tracing::debug!(id = user.id, "user created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users/get - every user as a JSON array
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.store().list().await?;
    Ok(Json(users))
}

/// POST /users/update - replace name and email by id, 204 even if no row matched
async fn update_user(
    State(state): State<AppState>,
    JsonBody(user): JsonBody<User>,
) -> Result<StatusCode, ApiError> {
    let rows = state.store().update(&user).await?;
    tracing::debug!(id = user.id, rows, "user updated");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /users/delete?id=N - delete by id, 204 even if no row matched
async fn delete_user(
    State(state): State<AppState>,
    UserIdQuery(id): UserIdQuery,
) -> Result<StatusCode, ApiError> {
    let rows = state.store().delete(id).await?;
    tracing::debug!(%id, rows, "user deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", any(create_user))
        .route("/users/get", any(list_users))
        .route("/users/update", any(update_user))
        .route("/users/delete", any(delete_user))
}
