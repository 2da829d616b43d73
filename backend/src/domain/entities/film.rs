use std::collections::BTreeSet;

use super::genre::{self, Genre};
use crate::domain::value_objects::*;

#[derive(Debug, Clone)]
pub struct Film {
    id: FilmId,
    name: FilmName,
    description: Description,
    release_date: ReleaseDate,
    duration: FilmDuration,
    likes: BTreeSet<UserId>,
    genres: Vec<Genre>,
    mpa: Option<MpaRating>,
}

/// Validated fields of a film that has not been given an id yet.
#[derive(Debug, Clone)]
pub struct FilmDraft {
    pub name: FilmName,
    pub description: Description,
    pub release_date: ReleaseDate,
    pub duration: FilmDuration,
    pub genres: Vec<Genre>,
    pub mpa: Option<MpaRating>,
}

/// Fields to overwrite on a stored film. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct FilmChanges {
    pub name: Option<FilmName>,
    pub description: Option<Description>,
    pub release_date: Option<ReleaseDate>,
    pub duration: Option<FilmDuration>,
    pub genres: Option<Vec<Genre>>,
    pub mpa: Option<MpaRating>,
}

impl Film {
    pub fn new(id: FilmId, draft: FilmDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            release_date: draft.release_date,
            duration: draft.duration,
            likes: BTreeSet::new(),
            genres: genre::normalize(draft.genres),
            mpa: draft.mpa,
        }
    }

    pub fn id(&self) -> FilmId {
        self.id
    }

    pub fn name(&self) -> &FilmName {
        &self.name
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn release_date(&self) -> ReleaseDate {
        self.release_date
    }

    pub fn duration(&self) -> FilmDuration {
        self.duration
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn mpa(&self) -> Option<MpaRating> {
        self.mpa
    }

    pub fn likes(&self) -> &BTreeSet<UserId> {
        &self.likes
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    /// Returns `false` when the user had already liked the film.
    pub fn add_like(&mut self, user_id: UserId) -> bool {
        self.likes.insert(user_id)
    }

    /// Returns `false` when there was no like to remove.
    pub fn remove_like(&mut self, user_id: UserId) -> bool {
        self.likes.remove(&user_id)
    }

    pub fn apply(&mut self, changes: FilmChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(release_date) = changes.release_date {
            self.release_date = release_date;
        }
        if let Some(duration) = changes.duration {
            self.duration = duration;
        }
        if let Some(genres) = changes.genres {
            self.genres = genre::normalize(genres);
        }
        if let Some(mpa) = changes.mpa {
            self.mpa = Some(mpa);
        }
    }
}
