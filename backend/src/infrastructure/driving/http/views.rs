// Conversions between domain entities and the wire types in `shared`

use shared::{
    FilmPayload, FilmView, FriendshipStatusView, FriendshipView, GenreView, UserPayload, UserView,
};

use crate::application::films::{FilmFields, GenreInput};
use crate::application::users::UserFields;
use crate::domain::{Film, FriendshipStatus, User};

pub fn film_view(film: &Film) -> FilmView {
    FilmView {
        id: film.id().as_u64(),
        name: film.name().as_str().to_string(),
        description: film.description().as_str().to_string(),
        release_date: film.release_date().as_date(),
        duration: film.duration().minutes(),
        likes: film.likes().iter().map(|id| id.as_u64()).collect(),
        genres: film
            .genres()
            .iter()
            .map(|genre| GenreView {
                id: genre.id().as_u64(),
                name: genre.name().to_string(),
            })
            .collect(),
        mpa: film.mpa().map(|mpa| mpa.to_string()),
    }
}

pub fn user_view(user: &User) -> UserView {
    UserView {
        id: user.id().as_u64(),
        email: user.email().as_str().to_string(),
        login: user.login().as_str().to_string(),
        name: user.name().as_str().to_string(),
        birthday: user.birthday().as_date(),
        friendship: user
            .friendships()
            .iter()
            .map(|(id, status)| FriendshipView {
                user_id: id.as_u64(),
                status: match status {
                    FriendshipStatus::Unconfirmed => FriendshipStatusView::Unconfirmed,
                    FriendshipStatus::Confirmed => FriendshipStatusView::Confirmed,
                },
            })
            .collect(),
    }
}

pub fn film_fields(payload: FilmPayload) -> (Option<u64>, FilmFields) {
    let fields = FilmFields {
        name: payload.name,
        description: payload.description,
        release_date: payload.release_date,
        duration: payload.duration,
        genres: payload.genres.map(|genres| {
            genres
                .into_iter()
                .map(|genre| GenreInput {
                    id: genre.id,
                    name: genre.name,
                })
                .collect()
        }),
        mpa: payload.mpa,
    };
    (payload.id, fields)
}

pub fn user_fields(payload: UserPayload) -> (Option<u64>, UserFields) {
    let fields = UserFields {
        email: payload.email,
        login: payload.login,
        name: payload.name,
        birthday: payload.birthday,
    };
    (payload.id, fields)
}
