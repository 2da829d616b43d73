use std::collections::BTreeMap;

use crate::application::ports::UserRepository;
use crate::domain::{DomainError, User, UserId};

/// In-memory implementation of UserRepository.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: BTreeMap<UserId, User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_all(&self) -> Vec<&User> {
        self.users.values().collect()
    }

    fn ids(&self) -> Vec<UserId> {
        self.users.keys().copied().collect()
    }

    fn create(&mut self, user: User) -> User {
        tracing::debug!("Storing user {}", user.id());
        self.users.insert(user.id(), user.clone());
        user
    }

    fn update(&mut self, user: User) -> Result<User, DomainError> {
        match self.users.get_mut(&user.id()) {
            Some(stored) => {
                *stored = user.clone();
                Ok(user)
            }
            None => {
                tracing::warn!("User with id = {} not found", user.id());
                Err(DomainError::user_not_found(user.id()))
            }
        }
    }

    fn get(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    fn get_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.get_mut(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::*;
    use chrono::NaiveDate;

    fn user(id: u64) -> User {
        let login = Login::new(format!("user{id}")).unwrap();
        User::new(
            UserId::from_u64(id),
            UserDraft {
                email: Email::new(format!("user{id}@example.com")).unwrap(),
                name: DisplayName::or_login(None, &login).unwrap(),
                login,
                birthday: Birthday::new(
                    NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
                    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                )
                .unwrap(),
            },
        )
    }

    #[test]
    fn test_find_all_is_ordered_by_id() {
        let mut repo = InMemoryUserRepository::new();
        repo.create(user(2));
        repo.create(user(3));
        repo.create(user(1));

        let ids: Vec<u64> = repo.find_all().iter().map(|u| u.id().as_u64()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_update_of_unknown_id_fails_and_inserts_nothing() {
        let mut repo = InMemoryUserRepository::new();
        let err = repo.update(user(4)).unwrap_err();

        assert!(err.is_not_found());
        assert!(!repo.contains(UserId::from_u64(4)));
    }

    #[test]
    fn test_get_absent_user_is_none() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.get(UserId::from_u64(1)).is_none());
    }
}
