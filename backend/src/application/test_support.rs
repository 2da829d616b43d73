//! Fixtures shared by the command tests.

use chrono::NaiveDate;

use crate::application::films::commands::create_film;
use crate::application::films::FilmFields;
use crate::application::users::commands::create_user;
use crate::application::users::UserFields;
pub use crate::infrastructure::driven::persistence::{
    InMemoryFilmRepository, InMemoryUserRepository,
};

pub fn film_repo() -> InMemoryFilmRepository {
    InMemoryFilmRepository::new()
}

pub fn user_repo() -> InMemoryUserRepository {
    InMemoryUserRepository::new()
}

pub fn film_fields(name: &str) -> FilmFields {
    FilmFields {
        name: Some(name.to_string()),
        description: Some(format!("{name}, a film")),
        release_date: NaiveDate::from_ymd_opt(1979, 5, 25),
        duration: Some(117),
        genres: None,
        mpa: Some("R".to_string()),
    }
}

pub fn user_fields(login: &str) -> UserFields {
    UserFields {
        email: Some(format!("{login}@example.com")),
        login: Some(login.to_string()),
        name: None,
        birthday: NaiveDate::from_ymd_opt(1990, 1, 1),
    }
}

/// Stores holding `films` films with ids 1..=films and `users` users with
/// ids 1..=users.
pub fn seeded(films: usize, users: usize) -> (InMemoryFilmRepository, InMemoryUserRepository) {
    let mut film_store = film_repo();
    let mut user_store = user_repo();
    for n in 1..=films {
        create_film::execute(&mut film_store, film_fields(&format!("Film {n}"))).unwrap();
    }
    for n in 1..=users {
        create_user::execute(&mut user_store, user_fields(&format!("user{n}"))).unwrap();
    }
    (film_store, user_store)
}
