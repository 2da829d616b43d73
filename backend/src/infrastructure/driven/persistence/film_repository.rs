use std::collections::BTreeMap;

use crate::application::ports::FilmRepository;
use crate::domain::{DomainError, Film, FilmId};

/// In-memory implementation of FilmRepository.
/// Keyed by id, so iteration follows creation order.
#[derive(Debug, Default)]
pub struct InMemoryFilmRepository {
    films: BTreeMap<FilmId, Film>,
}

impl InMemoryFilmRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FilmRepository for InMemoryFilmRepository {
    fn find_all(&self) -> Vec<&Film> {
        self.films.values().collect()
    }

    fn ids(&self) -> Vec<FilmId> {
        self.films.keys().copied().collect()
    }

    fn create(&mut self, film: Film) -> Film {
        tracing::debug!("Storing film {}", film.id());
        self.films.insert(film.id(), film.clone());
        film
    }

    fn update(&mut self, film: Film) -> Result<Film, DomainError> {
        match self.films.get_mut(&film.id()) {
            Some(stored) => {
                *stored = film.clone();
                Ok(film)
            }
            None => {
                tracing::warn!("Film with id = {} not found", film.id());
                Err(DomainError::film_not_found(film.id()))
            }
        }
    }

    fn get(&self, id: FilmId) -> Option<&Film> {
        self.films.get(&id)
    }

    fn get_mut(&mut self, id: FilmId) -> Option<&mut Film> {
        self.films.get_mut(&id)
    }
}
