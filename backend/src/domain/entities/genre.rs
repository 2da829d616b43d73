use crate::domain::value_objects::GenreId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    id: GenreId,
    name: String,
}

impl Genre {
    pub fn new(id: u64, name: String) -> Result<Self, String> {
        let id = GenreId::new(id)?;
        if name.trim().is_empty() {
            return Err("Genre name cannot be empty".to_string());
        }
        Ok(Self { id, name })
    }

    pub fn id(&self) -> GenreId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Orders genres by id and drops repeated ids, keeping the first occurrence.
pub fn normalize(mut genres: Vec<Genre>) -> Vec<Genre> {
    genres.sort_by_key(Genre::id);
    genres.dedup_by_key(|genre| genre.id());
    genres
}
