use crate::application::ports::FilmRepository;
use crate::domain::{DomainError, Film};

pub const DEFAULT_COUNT: i64 = 10;

/// Films ordered by number of likes, most liked first. Equal counts keep
/// store order, so ties resolve to the lower id.
pub fn execute<R: FilmRepository + ?Sized>(repo: &R, count: i64) -> Result<Vec<&Film>, DomainError> {
    if count < 1 {
        tracing::warn!("Rejected popular films request with count {}", count);
        return Err(DomainError::validation("Count must be at least 1"));
    }
    let limit = usize::try_from(count).unwrap_or(usize::MAX);

    let mut films = repo.find_all();
    films.sort_by(|a, b| b.like_count().cmp(&a.like_count()));
    films.truncate(limit);
    tracing::debug!("Returning {} popular films", films.len());
    Ok(films)
}
