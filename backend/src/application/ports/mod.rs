// Application ports - Driven ports (output ports implemented by infrastructure)

pub mod film_repository;
pub mod user_repository;

pub use film_repository::FilmRepository;
pub use user_repository::UserRepository;
