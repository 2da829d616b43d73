use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use shared::{UserPayload, UserView};

use super::error::ApiError;
use super::views::{user_fields, user_view};
use crate::application::users::commands::{
    add_friend, common_friends, confirm_friendship, create_user, find_users, list_friends,
    remove_friend, update_user,
};
use crate::domain::{DomainError, UserId};
use crate::infrastructure::AppState;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user).put(update_user))
        .route("/users/:id", get(get_user))
        .route("/users/:id/friends", get(list_friends))
        .route("/users/:id/friends/requests", get(friend_requests))
        .route("/users/:id/friends/common/:other_id", get(common_friends))
        .route(
            "/users/:id/friends/:friend_id",
            put(add_friend).delete(remove_friend),
        )
        .route("/users/:id/friends/:friend_id/confirm", put(confirm_friendship))
}

async fn list_users(State(state): State<AppState>) -> Json<Vec<UserView>> {
    let users = state.users.read().await;
    Json(find_users::all(&**users).into_iter().map(user_view).collect())
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<UserView>, ApiError> {
    let users = state.users.read().await;
    let user = find_users::by_id(&**users, id)
        .ok_or_else(|| DomainError::user_not_found(UserId::from_u64(id)))?;
    Ok(Json(user_view(user)))
}

async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<UserView>, ApiError> {
    let (_, fields) = user_fields(payload);
    let mut users = state.users.write().await;
    let user = create_user::execute(&mut **users, fields)?;
    Ok(Json(user_view(&user)))
}

async fn update_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<UserView>, ApiError> {
    let (id, fields) = user_fields(payload);
    let mut users = state.users.write().await;
    let user = update_user::execute(&mut **users, update_user::UpdateUserCommand { id, fields })?;
    Ok(Json(user_view(&user)))
}

async fn add_friend(
    State(state): State<AppState>,
    Path((id, friend_id)): Path<(u64, u64)>,
) -> Result<StatusCode, ApiError> {
    let mut users = state.users.write().await;
    add_friend::execute(&mut **users, id, friend_id)?;
    Ok(StatusCode::OK)
}

async fn confirm_friendship(
    State(state): State<AppState>,
    Path((id, friend_id)): Path<(u64, u64)>,
) -> Result<StatusCode, ApiError> {
    let mut users = state.users.write().await;
    confirm_friendship::execute(&mut **users, id, friend_id)?;
    Ok(StatusCode::OK)
}

async fn remove_friend(
    State(state): State<AppState>,
    Path((id, friend_id)): Path<(u64, u64)>,
) -> Result<StatusCode, ApiError> {
    let mut users = state.users.write().await;
    remove_friend::execute(&mut **users, id, friend_id)?;
    Ok(StatusCode::OK)
}

async fn list_friends(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<UserView>>, ApiError> {
    let users = state.users.read().await;
    let friends = list_friends::execute(&**users, id)?;
    Ok(Json(friends.into_iter().map(user_view).collect()))
}

async fn friend_requests(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<UserView>>, ApiError> {
    let users = state.users.read().await;
    let pending = list_friends::pending(&**users, id)?;
    Ok(Json(pending.into_iter().map(user_view).collect()))
}

async fn common_friends(
    State(state): State<AppState>,
    Path((id, other_id)): Path<(u64, u64)>,
) -> Result<Json<Vec<UserView>>, ApiError> {
    let users = state.users.read().await;
    let common = common_friends::execute(&**users, id, other_id)?;
    Ok(Json(common.into_iter().map(user_view).collect()))
}
