use crate::application::ports::UserRepository;
use crate::application::users::require_pair;
use crate::domain::*;

/// Drops the relation on both sides, whatever its state.
pub fn execute<R: UserRepository + ?Sized>(
    repo: &mut R,
    user_id: u64,
    friend_id: u64,
) -> Result<(), DomainError> {
    let (user_id, friend_id) = require_pair(&*repo, user_id, friend_id)?;
    if user_id == friend_id {
        tracing::warn!("User {} tried to unfriend themselves", user_id);
        return Err(DomainError::validation("A user cannot remove themselves from friends"));
    }

    for (a, b) in [(user_id, friend_id), (friend_id, user_id)] {
        repo.get_mut(a)
            .ok_or_else(|| DomainError::user_not_found(a))?
            .remove_friendship(b);
    }
    tracing::info!("Friendship between {} and {} removed", user_id, friend_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::*;
    use crate::application::users::commands::{add_friend, confirm_friendship};

    #[test]
    fn test_remove_clears_both_sides() {
        let (_, mut users) = seeded(0, 2);
        add_friend::execute(&mut users, 1, 2).unwrap();
        confirm_friendship::execute(&mut users, 1, 2).unwrap();

        execute(&mut users, 2, 1).unwrap();

        assert!(users.get(UserId::from_u64(1)).unwrap().friendships().is_empty());
        assert!(users.get(UserId::from_u64(2)).unwrap().friendships().is_empty());
    }

    #[test]
    fn test_removing_unrelated_user_is_noop() {
        let (_, mut users) = seeded(0, 2);
        execute(&mut users, 1, 2).unwrap();
        assert!(users.get(UserId::from_u64(1)).unwrap().friendships().is_empty());
    }

    #[test]
    fn test_self_removal_is_rejected() {
        let (_, mut users) = seeded(0, 1);
        assert!(execute(&mut users, 1, 1).unwrap_err().is_validation());
    }
}
