use crate::application::ports::{FilmRepository, UserRepository};
use crate::domain::*;

pub fn execute<F, U>(films: &mut F, users: &U, film_id: u64, user_id: u64) -> Result<(), DomainError>
where
    F: FilmRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    let film_id = FilmId::from_u64(film_id);
    let user_id = UserId::from_u64(user_id);
    if !films.contains(film_id) {
        tracing::warn!("Film with id = {} not found", film_id);
        return Err(DomainError::film_not_found(film_id));
    }
    if !users.contains(user_id) {
        tracing::warn!("User with id = {} not found", user_id);
        return Err(DomainError::user_not_found(user_id));
    }

    let film = films
        .get_mut(film_id)
        .ok_or_else(|| DomainError::film_not_found(film_id))?;
    if film.add_like(user_id) {
        tracing::info!("User {} liked film {}", user_id, film_id);
    }
    Ok(())
}
