use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use shared::{FilmPayload, FilmView, PopularQuery};

use super::error::ApiError;
use super::views::{film_fields, film_view};
use crate::application::films::commands::{
    add_like, create_film, find_films, popular_films, remove_like, update_film,
};
use crate::domain::{DomainError, FilmId};
use crate::infrastructure::AppState;

pub fn film_routes() -> Router<AppState> {
    Router::new()
        .route("/films", get(list_films).post(create_film).put(update_film))
        .route("/films/popular", get(popular_films))
        .route("/films/:id", get(get_film))
        .route("/films/:id/like/:user_id", put(add_like).delete(remove_like))
}

async fn list_films(State(state): State<AppState>) -> Json<Vec<FilmView>> {
    let films = state.films.read().await;
    Json(find_films::all(&**films).into_iter().map(film_view).collect())
}

async fn get_film(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<FilmView>, ApiError> {
    let films = state.films.read().await;
    let film = find_films::by_id(&**films, id)
        .ok_or_else(|| DomainError::film_not_found(FilmId::from_u64(id)))?;
    Ok(Json(film_view(film)))
}

async fn create_film(
    State(state): State<AppState>,
    Json(payload): Json<FilmPayload>,
) -> Result<Json<FilmView>, ApiError> {
    let (_, fields) = film_fields(payload);
    let mut films = state.films.write().await;
    let film = create_film::execute(&mut **films, fields)?;
    Ok(Json(film_view(&film)))
}

async fn update_film(
    State(state): State<AppState>,
    Json(payload): Json<FilmPayload>,
) -> Result<Json<FilmView>, ApiError> {
    let (id, fields) = film_fields(payload);
    let mut films = state.films.write().await;
    let film = update_film::execute(&mut **films, update_film::UpdateFilmCommand { id, fields })?;
    Ok(Json(film_view(&film)))
}

async fn add_like(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(u64, u64)>,
) -> Result<StatusCode, ApiError> {
    let mut films = state.films.write().await;
    let users = state.users.read().await;
    add_like::execute(&mut **films, &**users, id, user_id)?;
    Ok(StatusCode::OK)
}

async fn remove_like(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(u64, u64)>,
) -> Result<StatusCode, ApiError> {
    let mut films = state.films.write().await;
    let users = state.users.read().await;
    remove_like::execute(&mut **films, &**users, id, user_id)?;
    Ok(StatusCode::OK)
}

async fn popular_films(
    State(state): State<AppState>,
    Query(query): Query<PopularQuery>,
) -> Result<Json<Vec<FilmView>>, ApiError> {
    let count = query.count.unwrap_or(state.popular_default_count);
    let films = state.films.read().await;
    let top = popular_films::execute(&**films, count)?;
    Ok(Json(top.into_iter().map(film_view).collect()))
}
