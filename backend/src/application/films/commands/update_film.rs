use crate::application::films::{require_film, FilmFields};
use crate::application::ports::FilmRepository;
use crate::domain::*;

pub struct UpdateFilmCommand {
    pub id: Option<u64>,
    pub fields: FilmFields,
}

/// Overwrites the fields present in the command and keeps the rest. Likes are
/// never changed by an update.
pub fn execute<R: FilmRepository + ?Sized>(
    repo: &mut R,
    cmd: UpdateFilmCommand,
) -> Result<Film, DomainError> {
    let id = cmd.id.map(FilmId::from_u64).ok_or_else(|| {
        tracing::warn!("Film update without id");
        DomainError::validation("Id must be specified")
    })?;
    tracing::info!("Updating film with id {}", id);

    let mut film = require_film(&*repo, id)?.clone();
    let changes = cmd.fields.into_changes()?;
    film.apply(changes);
    let film = repo.update(film)?;
    tracing::info!("Film {} updated", film.id());
    Ok(film)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::films::commands::create_film;
    use crate::application::test_support::*;
    use chrono::NaiveDate;

    #[test]
    fn test_missing_film_is_not_created() {
        let mut films = film_repo();

        let err = execute(
            &mut films,
            UpdateFilmCommand { id: Some(42), fields: film_fields("Ghost") },
        )
        .unwrap_err();

        assert!(err.is_not_found());
        assert!(films.find_all().is_empty());
    }

    #[test]
    fn test_unknown_id_wins_over_invalid_fields() {
        let mut films = film_repo();

        let err = execute(
            &mut films,
            UpdateFilmCommand {
                id: Some(42),
                fields: FilmFields {
                    release_date: NaiveDate::from_ymd_opt(1800, 1, 1),
                    ..FilmFields::default()
                },
            },
        )
        .unwrap_err();

        assert!(err.is_not_found());
    }

    #[test]
    fn test_update_requires_id() {
        let mut films = film_repo();
        let err = execute(
            &mut films,
            UpdateFilmCommand { id: None, fields: film_fields("Alien") },
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_partial_update_keeps_absent_fields_and_likes() {
        let mut films = film_repo();
        let film = create_film::execute(&mut films, film_fields("Alien")).unwrap();
        films.get_mut(film.id()).unwrap().add_like(UserId::from_u64(9));

        let updated = execute(
            &mut films,
            UpdateFilmCommand {
                id: Some(film.id().as_u64()),
                fields: FilmFields {
                    name: Some("Alien: Director's Cut".into()),
                    ..FilmFields::default()
                },
            },
        )
        .unwrap();

        assert_eq!(updated.name().as_str(), "Alien: Director's Cut");
        assert_eq!(updated.duration(), film.duration());
        assert_eq!(updated.release_date(), film.release_date());
        assert_eq!(updated.like_count(), 1);
    }

    #[test]
    fn test_release_date_is_revalidated() {
        let mut films = film_repo();
        let film = create_film::execute(&mut films, film_fields("Alien")).unwrap();

        let err = execute(
            &mut films,
            UpdateFilmCommand {
                id: Some(film.id().as_u64()),
                fields: FilmFields {
                    release_date: NaiveDate::from_ymd_opt(1800, 1, 1),
                    ..FilmFields::default()
                },
            },
        )
        .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(
            films.get(film.id()).unwrap().release_date(),
            film.release_date()
        );
    }
}
