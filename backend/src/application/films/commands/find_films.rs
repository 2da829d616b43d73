use crate::application::ports::FilmRepository;
use crate::domain::{Film, FilmId};

pub fn all<R: FilmRepository + ?Sized>(repo: &R) -> Vec<&Film> {
    tracing::debug!("Listing all films");
    repo.find_all()
}

pub fn by_id<R: FilmRepository + ?Sized>(repo: &R, id: u64) -> Option<&Film> {
    tracing::debug!("Looking up film with id {}", id);
    repo.get(FilmId::from_u64(id))
}
