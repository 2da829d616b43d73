use crate::application::films::FilmFields;
use crate::application::id_generator::next_id;
use crate::application::ports::FilmRepository;
use crate::domain::*;

pub fn execute<R: FilmRepository + ?Sized>(
    repo: &mut R,
    fields: FilmFields,
) -> Result<Film, DomainError> {
    tracing::info!("Adding film {:?}", fields.name);
    let changes = fields.into_changes()?;
    let draft = FilmDraft {
        name: changes
            .name
            .ok_or_else(|| DomainError::validation("Film name must be specified"))?,
        description: changes.description.unwrap_or_default(),
        release_date: changes
            .release_date
            .ok_or_else(|| DomainError::validation("Release date must be specified"))?,
        duration: changes
            .duration
            .ok_or_else(|| DomainError::validation("Film duration must be specified"))?,
        genres: changes.genres.unwrap_or_default(),
        mpa: changes.mpa,
    };

    let id = FilmId::from_u64(next_id(repo.ids().iter().map(FilmId::as_u64)));
    let film = repo.create(Film::new(id, draft));
    tracing::info!("Film added with id {}", film.id());
    Ok(film)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::*;
    use chrono::NaiveDate;

    #[test]
    fn test_ids_are_distinct_and_increasing() {
        let mut films = film_repo();

        let first = execute(&mut films, film_fields("Alien")).unwrap();
        let second = execute(&mut films, film_fields("Aliens")).unwrap();

        assert_eq!(first.id().as_u64(), 1);
        assert_eq!(second.id().as_u64(), 2);
    }

    #[test]
    fn test_invalid_film_does_not_consume_an_id() {
        let mut films = film_repo();
        let early = FilmFields {
            release_date: NaiveDate::from_ymd_opt(1895, 12, 25),
            ..film_fields("Arrival of a Train")
        };

        let err = execute(&mut films, early).unwrap_err();
        assert!(err.is_validation());
        assert!(films.find_all().is_empty());

        let film = execute(&mut films, film_fields("Alien")).unwrap();
        assert_eq!(film.id().as_u64(), 1);
    }

    #[test]
    fn test_rejects_each_broken_field() {
        let mut films = film_repo();
        let cases = [
            FilmFields { name: Some("  ".into()), ..film_fields("x") },
            FilmFields { description: Some("d".repeat(201)), ..film_fields("x") },
            FilmFields { duration: Some(0), ..film_fields("x") },
            FilmFields { duration: Some(-5), ..film_fields("x") },
            FilmFields { name: None, ..film_fields("x") },
            FilmFields { release_date: None, ..film_fields("x") },
            FilmFields { mpa: Some("XXX".into()), ..film_fields("x") },
        ];

        for fields in cases {
            assert!(execute(&mut films, fields).unwrap_err().is_validation());
        }
        assert!(films.find_all().is_empty());
    }

    #[test]
    fn test_description_is_optional() {
        let mut films = film_repo();
        let film = execute(
            &mut films,
            FilmFields { description: None, ..film_fields("Alien") },
        )
        .unwrap();
        assert_eq!(film.description().as_str(), "");
    }
}
