//! User use cases: registration, profile updates and the friendship
//! subsystem.

pub mod commands;

use chrono::{NaiveDate, Utc};

use crate::application::ports::UserRepository;
use crate::domain::*;

/// Raw user fields as received from a caller.
#[derive(Debug, Clone, Default)]
pub struct UserFields {
    pub email: Option<String>,
    pub login: Option<String>,
    pub name: Option<String>,
    pub birthday: Option<NaiveDate>,
}

pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub(crate) fn require_user<U: UserRepository + ?Sized>(
    users: &U,
    id: UserId,
) -> Result<&User, DomainError> {
    users.get(id).ok_or_else(|| {
        tracing::warn!("User with id = {} not found", id);
        DomainError::user_not_found(id)
    })
}

/// Both ids must resolve to users; the first one is checked first.
pub(crate) fn require_pair<U: UserRepository + ?Sized>(
    users: &U,
    user_id: u64,
    other_id: u64,
) -> Result<(UserId, UserId), DomainError> {
    let user_id = require_user(users, UserId::from_u64(user_id))?.id();
    let other_id = require_user(users, UserId::from_u64(other_id))?.id();
    Ok((user_id, other_id))
}

/// Email and login must not belong to any user other than `own_id`.
pub(crate) fn ensure_unique<U: UserRepository + ?Sized>(
    users: &U,
    email: &Email,
    login: &Login,
    own_id: Option<UserId>,
) -> Result<(), DomainError> {
    tracing::trace!("Checking that email {} and login {} are free", email, login);
    for other in users.find_all().into_iter().filter(|u| Some(u.id()) != own_id) {
        if other.email() == email {
            tracing::warn!("Email {} is used by another user", email);
            return Err(DomainError::validation(format!(
                "Email {} is already in use",
                email
            )));
        }
        if other.login() == login {
            tracing::warn!("Login {} is used by another user", login);
            return Err(DomainError::validation(format!(
                "Login {} is already in use",
                login
            )));
        }
    }
    Ok(())
}
