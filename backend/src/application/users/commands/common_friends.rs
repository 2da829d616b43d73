use std::collections::BTreeSet;

use crate::application::ports::UserRepository;
use crate::application::users::commands::list_friends;
use crate::application::users::require_pair;
use crate::domain::*;

/// Confirmed friends shared by both users, in the order of the first
/// user's friend list.
pub fn execute<R: UserRepository + ?Sized>(
    repo: &R,
    user_id: u64,
    other_id: u64,
) -> Result<Vec<&User>, DomainError> {
    let (user_id, other_id) = require_pair(repo, user_id, other_id)?;
    let others: BTreeSet<UserId> = list_friends::execute(repo, other_id.as_u64())?
        .iter()
        .map(|u| u.id())
        .collect();

    let common: Vec<&User> = list_friends::execute(repo, user_id.as_u64())?
        .into_iter()
        .filter(|u| others.contains(&u.id()))
        .collect();
    tracing::debug!(
        "Users {} and {} have {} friends in common",
        user_id,
        other_id,
        common.len()
    );
    Ok(common)
}
