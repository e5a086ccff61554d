//! User resource controller.
//!
//! Translates `/users` requests into single service calls. Empty results and
//! missing records become 404s here; the service itself never fails on
//! absence.

use crate::{
    responses::{empty_ok, not_found, ok, ApiResult, ErrorBody, NO_USERS_FOUND, USER_NOT_FOUND},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Router,
};
use roster_core::{User, UserId};
use tracing::debug;
use utoipa::IntoParams;

/// Query string of `GET /users`.
#[derive(Debug, Default, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserQuery {
    /// Substring to search for. An empty value matches nothing. When given
    /// more than once, the first value is used.
    pub name: Option<String>,
}

impl UserQuery {
    /// Builds the query from raw pairs, keeping the first `name`.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let name = pairs
            .into_iter()
            .find(|(key, _)| key == "name")
            .map(|(_, value)| value);
        Self { name }
    }
}

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/:user_id", get(get_user))
        .route("/add/:name", get(add_user))
        .route("/remove/:user_id", get(remove_user))
}

/// Lists all users, or those whose name contains `name`, sorted by name.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(UserQuery),
    responses(
        (status = 200, description = "Users sorted by name", body = [User]),
        (status = 404, description = "No user matched", body = ErrorBody)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult {
    let query = UserQuery::from_pairs(pairs);
    let mut users = match query.name.as_deref() {
        Some(name) => {
            debug!("Find users request: {}", name);
            state.user_service.find_users(name).await?
        }
        None => {
            debug!("List users request");
            state.user_service.list_users().await?
        }
    };

    if users.is_empty() {
        return not_found(NO_USERS_FOUND);
    }

    users.sort_by(User::by_name);
    ok(users)
}

/// Gets a user by ID.
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 400, description = "ID is not an integer"),
        (status = 404, description = "No such user", body = ErrorBody)
    )
)]
pub async fn get_user(State(state): State<AppState>, Path(user_id): Path<UserId>) -> ApiResult {
    debug!("Get user request: {}", user_id);

    match state.user_service.get_user(user_id).await? {
        Some(user) => ok(user),
        None => not_found(USER_NOT_FOUND),
    }
}

/// Adds a user. The new record is not read back.
#[utoipa::path(
    get,
    path = "/users/add/{name}",
    tag = "users",
    params(("name" = String, Path, description = "Name of the new user")),
    responses((status = 200, description = "Accepted; empty body"))
)]
pub async fn add_user(State(state): State<AppState>, Path(name): Path<String>) -> ApiResult {
    debug!("Add user request: {}", name);

    state.user_service.add_user(&name).await?;
    empty_ok()
}

/// Removes a user. Unknown IDs are accepted silently.
#[utoipa::path(
    get,
    path = "/users/remove/{user_id}",
    tag = "users",
    params(("user_id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Accepted; empty body"),
        (status = 400, description = "ID is not an integer")
    )
)]
pub async fn remove_user(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> ApiResult {
    debug!("Remove user request: {}", user_id);

    state.user_service.remove_user(user_id).await?;
    empty_ok()
}
