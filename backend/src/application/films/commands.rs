// Film commands

pub mod add_like;
pub mod create_film;
pub mod find_films;
pub mod popular_films;
pub mod remove_like;
pub mod update_film;
