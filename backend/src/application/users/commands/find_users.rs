use crate::application::ports::UserRepository;
use crate::domain::{User, UserId};

pub fn all<R: UserRepository + ?Sized>(repo: &R) -> Vec<&User> {
    tracing::debug!("Listing all users");
    repo.find_all()
}

pub fn by_id<R: UserRepository + ?Sized>(repo: &R, id: u64) -> Option<&User> {
    tracing::debug!("Looking up user with id {}", id);
    repo.get(UserId::from_u64(id))
}
