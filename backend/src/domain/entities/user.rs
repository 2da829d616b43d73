use std::collections::BTreeMap;

use crate::domain::value_objects::*;

#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    email: Email,
    login: Login,
    name: DisplayName,
    birthday: Birthday,
    friendships: BTreeMap<UserId, FriendshipStatus>,
}

/// Validated fields of a user that has not been given an id yet.
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub email: Email,
    pub login: Login,
    pub name: DisplayName,
    pub birthday: Birthday,
}

/// Fields to overwrite on a stored user. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub email: Option<Email>,
    pub login: Option<Login>,
    pub name: Option<DisplayName>,
    pub birthday: Option<Birthday>,
}

impl User {
    pub fn new(id: UserId, draft: UserDraft) -> Self {
        Self {
            id,
            email: draft.email,
            login: draft.login,
            name: draft.name,
            birthday: draft.birthday,
            friendships: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn login(&self) -> &Login {
        &self.login
    }

    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    pub fn birthday(&self) -> Birthday {
        self.birthday
    }

    pub fn apply(&mut self, changes: UserChanges) {
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(login) = changes.login {
            self.login = login;
        }
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(birthday) = changes.birthday {
            self.birthday = birthday;
        }
    }

    pub fn friendships(&self) -> &BTreeMap<UserId, FriendshipStatus> {
        &self.friendships
    }

    pub fn friendship_with(&self, other: UserId) -> Option<FriendshipStatus> {
        self.friendships.get(&other).copied()
    }

    /// Ids of related users in the given state, ascending.
    pub fn related_ids(&self, status: FriendshipStatus) -> impl Iterator<Item = UserId> + '_ {
        self.friendships
            .iter()
            .filter(move |(_, s)| **s == status)
            .map(|(id, _)| *id)
    }

    /// Opens a pending relation. An existing relation keeps its state.
    pub fn request_friendship(&mut self, other: UserId) {
        self.friendships
            .entry(other)
            .or_insert(FriendshipStatus::Unconfirmed);
    }

    /// Returns `false` when there is no relation to confirm.
    pub fn confirm_friendship(&mut self, other: UserId) -> bool {
        match self.friendships.get_mut(&other) {
            Some(status) => {
                *status = FriendshipStatus::Confirmed;
                true
            }
            None => false,
        }
    }

    pub fn remove_friendship(&mut self, other: UserId) -> Option<FriendshipStatus> {
        self.friendships.remove(&other)
    }
}
