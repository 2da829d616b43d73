use super::value_objects::{FilmId, UserId};

/// Failure of a domain operation. Both variants are raised before anything
/// is written, so a failed call leaves every store untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }

    pub fn film_not_found(id: FilmId) -> Self {
        DomainError::NotFound(format!("Film with id = {} not found", id))
    }

    pub fn user_not_found(id: UserId) -> Self {
        DomainError::NotFound(format!("User with id = {} not found", id))
    }

    #[cfg(test)]
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_))
    }

    #[cfg(test)]
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }
}
