pub mod film;
pub mod genre;
pub mod user;

pub use film::{Film, FilmChanges, FilmDraft};
pub use genre::Genre;
pub use user::{User, UserChanges, UserDraft};
