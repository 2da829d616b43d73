// Driven port - Film repository (output port)

use crate::domain::{DomainError, Film, FilmId};

/// Sole owner of the stored films. Stores do not validate; they only guard
/// existence on update.
pub trait FilmRepository: Send + Sync {
    /// All films in ascending id order.
    fn find_all(&self) -> Vec<&Film>;
    fn ids(&self) -> Vec<FilmId>;
    /// Inserts a film that already carries its id.
    fn create(&mut self, film: Film) -> Film;
    /// Replaces a stored film. Fails when the id is unknown.
    fn update(&mut self, film: Film) -> Result<Film, DomainError>;
    fn get(&self, id: FilmId) -> Option<&Film>;
    fn get_mut(&mut self, id: FilmId) -> Option<&mut Film>;

    fn contains(&self, id: FilmId) -> bool {
        self.get(id).is_some()
    }
}
