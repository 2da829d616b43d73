// Driven port - User repository (output port)

use crate::domain::{DomainError, User, UserId};

pub trait UserRepository: Send + Sync {
    /// All users in ascending id order.
    fn find_all(&self) -> Vec<&User>;
    fn ids(&self) -> Vec<UserId>;
    fn create(&mut self, user: User) -> User;
    fn update(&mut self, user: User) -> Result<User, DomainError>;
    fn get(&self, id: UserId) -> Option<&User>;
    fn get_mut(&mut self, id: UserId) -> Option<&mut User>;

    fn contains(&self, id: UserId) -> bool {
        self.get(id).is_some()
    }
}
