// Infrastructure layer - external concerns (storage, HTTP)
// Implements interfaces defined in application layer

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::application::ports::{FilmRepository, UserRepository};
use crate::infrastructure::driven::{InMemoryFilmRepository, InMemoryUserRepository};

pub mod driven;    // Output adapters (repositories)
pub mod driving;   // Input adapters (HTTP)

/// Shared handle to the stores. Handlers that need both stores lock films
/// before users.
#[derive(Clone)]
pub struct AppState {
    pub films: Arc<RwLock<Box<dyn FilmRepository>>>,
    pub users: Arc<RwLock<Box<dyn UserRepository>>>,
    pub popular_default_count: i64,
}

impl AppState {
    pub fn in_memory(popular_default_count: i64) -> Self {
        let films: Box<dyn FilmRepository> = Box::new(InMemoryFilmRepository::new());
        let users: Box<dyn UserRepository> = Box::new(InMemoryUserRepository::new());
        Self {
            films: Arc::new(RwLock::new(films)),
            users: Arc::new(RwLock::new(users)),
            popular_default_count,
        }
    }
}
