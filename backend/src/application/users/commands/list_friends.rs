use crate::application::ports::UserRepository;
use crate::application::users::require_user;
use crate::domain::*;

/// Confirmed friends of a user, ascending by id.
pub fn execute<R: UserRepository + ?Sized>(repo: &R, user_id: u64) -> Result<Vec<&User>, DomainError> {
    related(repo, user_id, FriendshipStatus::Confirmed)
}

/// Users with a friendship still waiting for confirmation.
pub fn pending<R: UserRepository + ?Sized>(repo: &R, user_id: u64) -> Result<Vec<&User>, DomainError> {
    related(repo, user_id, FriendshipStatus::Unconfirmed)
}

fn related<R: UserRepository + ?Sized>(
    repo: &R,
    user_id: u64,
    status: FriendshipStatus,
) -> Result<Vec<&User>, DomainError> {
    let user = require_user(repo, UserId::from_u64(user_id))?;
    tracing::debug!("Listing {:?} friends of user {}", status, user.id());
    Ok(user
        .related_ids(status)
        .filter_map(|id| repo.get(id))
        .collect())
}
