use crate::application::ports::UserRepository;
use crate::application::users::require_pair;
use crate::domain::*;

/// Opens a pending friendship on both sides. The pair stays unconfirmed
/// until `confirm_friendship` runs; a pair that is already related keeps
/// its state.
pub fn execute<R: UserRepository + ?Sized>(
    repo: &mut R,
    user_id: u64,
    friend_id: u64,
) -> Result<(), DomainError> {
    let (user_id, friend_id) = require_pair(&*repo, user_id, friend_id)?;
    if user_id == friend_id {
        tracing::warn!("User {} tried to befriend themselves", user_id);
        return Err(DomainError::validation("A user cannot add themselves as a friend"));
    }

    repo.get_mut(user_id)
        .ok_or_else(|| DomainError::user_not_found(user_id))?
        .request_friendship(friend_id);
    repo.get_mut(friend_id)
        .ok_or_else(|| DomainError::user_not_found(friend_id))?
        .request_friendship(user_id);
    tracing::info!("Friendship requested between {} and {}", user_id, friend_id);
    Ok(())
}
