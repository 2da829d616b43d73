use crate::application::ports::UserRepository;
use crate::application::users::{ensure_unique, require_user, today, UserFields};
use crate::domain::*;

pub struct UpdateUserCommand {
    pub id: Option<u64>,
    pub fields: UserFields,
}

/// Overwrites the fields present in the command. Uniqueness is checked
/// against every user except the one being updated, and friendships are
/// left alone.
pub fn execute<R: UserRepository + ?Sized>(
    repo: &mut R,
    cmd: UpdateUserCommand,
) -> Result<User, DomainError> {
    let id = cmd.id.map(UserId::from_u64).ok_or_else(|| {
        tracing::warn!("User update without id");
        DomainError::validation("Id must be specified")
    })?;
    tracing::info!("Updating user with id {}", id);

    let current = require_user(&*repo, id)?;
    let invalid = DomainError::Validation;
    let fields = cmd.fields;
    let email = fields.email.map(Email::new).transpose().map_err(invalid)?;
    let login = fields.login.map(Login::new).transpose().map_err(invalid)?;
    let birthday = fields
        .birthday
        .map(|date| Birthday::new(date, today()))
        .transpose()
        .map_err(invalid)?;

    let effective_email = email.as_ref().unwrap_or_else(|| current.email());
    let effective_login = login.as_ref().unwrap_or_else(|| current.login());
    ensure_unique(&*repo, effective_email, effective_login, Some(id))?;
    let name = fields
        .name
        .map(|name| DisplayName::or_login(Some(name), effective_login))
        .transpose()
        .map_err(invalid)?;

    let mut user = current.clone();
    user.apply(UserChanges {
        email,
        login,
        name,
        birthday,
    });
    let user = repo.update(user)?;
    tracing::info!("User {} updated", user.id());
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::*;
    use crate::application::users::commands::{add_friend, create_user};

    fn update(fields: UserFields, id: u64) -> UpdateUserCommand {
        UpdateUserCommand { id: Some(id), fields }
    }

    #[test]
    fn test_user_may_keep_own_email_and_login() {
        let mut users = user_repo();
        let user = create_user::execute(&mut users, user_fields("neo")).unwrap();

        let updated = execute(
            &mut users,
            update(
                UserFields { name: Some("Thomas".into()), ..user_fields("neo") },
                user.id().as_u64(),
            ),
        )
        .unwrap();

        assert_eq!(updated.name().as_str(), "Thomas");
        assert_eq!(updated.email(), user.email());
    }

    #[test]
    fn test_taking_another_users_email_is_rejected() {
        let mut users = user_repo();
        create_user::execute(&mut users, user_fields("neo")).unwrap();
        let smith = create_user::execute(&mut users, user_fields("smith")).unwrap();

        let err = execute(
            &mut users,
            update(
                UserFields { email: Some("neo@example.com".into()), ..UserFields::default() },
                smith.id().as_u64(),
            ),
        )
        .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(users.get(smith.id()).unwrap().email().as_str(), "smith@example.com");
    }

    #[test]
    fn test_unknown_user_is_not_found() {
        let mut users = user_repo();
        let err = execute(&mut users, update(user_fields("ghost"), 3)).unwrap_err();
        assert!(err.is_not_found());
        assert!(users.find_all().is_empty());
    }

    #[test]
    fn test_unknown_user_wins_over_invalid_fields() {
        let mut users = user_repo();
        let err = execute(
            &mut users,
            update(UserFields { login: Some("two words".into()), ..UserFields::default() }, 3),
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let mut users = user_repo();
        let err = execute(
            &mut users,
            UpdateUserCommand { id: None, fields: user_fields("neo") },
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_blank_name_falls_back_to_new_login() {
        let mut users = user_repo();
        let user = create_user::execute(
            &mut users,
            UserFields { name: Some("Thomas".into()), ..user_fields("neo") },
        )
        .unwrap();

        let updated = execute(
            &mut users,
            update(
                UserFields {
                    login: Some("the_one".into()),
                    name: Some(" ".into()),
                    ..UserFields::default()
                },
                user.id().as_u64(),
            ),
        )
        .unwrap();

        assert_eq!(updated.login().as_str(), "the_one");
        assert_eq!(updated.name().as_str(), "the_one");
    }

    #[test]
    fn test_update_keeps_friendships() {
        let mut users = user_repo();
        let neo = create_user::execute(&mut users, user_fields("neo")).unwrap();
        let trinity = create_user::execute(&mut users, user_fields("trinity")).unwrap();
        add_friend::execute(&mut users, neo.id().as_u64(), trinity.id().as_u64()).unwrap();

        let updated = execute(
            &mut users,
            update(
                UserFields { name: Some("Thomas".into()), ..UserFields::default() },
                neo.id().as_u64(),
            ),
        )
        .unwrap();

        assert!(updated.friendship_with(trinity.id()).is_some());
    }
}
