pub mod film_repository;
pub mod user_repository;

pub use film_repository::InMemoryFilmRepository;
pub use user_repository::InMemoryUserRepository;
