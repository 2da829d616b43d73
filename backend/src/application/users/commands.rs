// User commands

pub mod add_friend;
pub mod common_friends;
pub mod confirm_friendship;
pub mod create_user;
pub mod find_users;
pub mod list_friends;
pub mod remove_friend;
pub mod update_user;
