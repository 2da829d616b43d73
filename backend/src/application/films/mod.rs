//! Film use cases: catalogue maintenance and the rating subsystem.

pub mod commands;

use chrono::NaiveDate;

use crate::application::ports::FilmRepository;
use crate::domain::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreInput {
    pub id: u64,
    pub name: String,
}

/// Raw film fields as received from a caller. Each present field is
/// validated on its own; which ones are required depends on the command.
#[derive(Debug, Clone, Default)]
pub struct FilmFields {
    pub name: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub duration: Option<i64>,
    pub genres: Option<Vec<GenreInput>>,
    pub mpa: Option<String>,
}

impl FilmFields {
    pub fn into_changes(self) -> Result<FilmChanges, DomainError> {
        let invalid = DomainError::Validation;
        Ok(FilmChanges {
            name: self.name.map(FilmName::new).transpose().map_err(invalid)?,
            description: self
                .description
                .map(Description::new)
                .transpose()
                .map_err(invalid)?,
            release_date: self
                .release_date
                .map(ReleaseDate::new)
                .transpose()
                .map_err(invalid)?,
            duration: self
                .duration
                .map(FilmDuration::new)
                .transpose()
                .map_err(invalid)?,
            genres: self
                .genres
                .map(|genres| {
                    genres
                        .into_iter()
                        .map(|g| Genre::new(g.id, g.name))
                        .collect::<Result<Vec<_>, _>>()
                })
                .transpose()
                .map_err(invalid)?,
            mpa: self
                .mpa
                .map(|mpa| mpa.parse::<MpaRating>())
                .transpose()
                .map_err(invalid)?,
        })
    }
}

pub(crate) fn require_film<F: FilmRepository + ?Sized>(
    films: &F,
    id: FilmId,
) -> Result<&Film, DomainError> {
    films.get(id).ok_or_else(|| {
        tracing::warn!("Film with id = {} not found", id);
        DomainError::film_not_found(id)
    })
}
