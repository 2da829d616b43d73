use crate::application::ports::UserRepository;
use crate::application::users::require_pair;
use crate::domain::*;

/// Promotes a pending pair to confirmed on both sides. Returns `false`
/// without touching anything when the pair has no relation to confirm.
pub fn execute<R: UserRepository + ?Sized>(
    repo: &mut R,
    user_id: u64,
    friend_id: u64,
) -> Result<bool, DomainError> {
    let (user_id, friend_id) = require_pair(&*repo, user_id, friend_id)?;
    let related = |a: UserId, b: UserId| {
        repo.get(a)
            .map_or(false, |user| user.friendship_with(b).is_some())
    };
    if !(related(user_id, friend_id) && related(friend_id, user_id)) {
        tracing::debug!("No pending friendship between {} and {}", user_id, friend_id);
        return Ok(false);
    }

    for (a, b) in [(user_id, friend_id), (friend_id, user_id)] {
        repo.get_mut(a)
            .ok_or_else(|| DomainError::user_not_found(a))?
            .confirm_friendship(b);
    }
    tracing::info!("Friendship between {} and {} confirmed", user_id, friend_id);
    Ok(true)
}
