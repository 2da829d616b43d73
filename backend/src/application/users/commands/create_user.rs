use crate::application::id_generator::next_id;
use crate::application::ports::UserRepository;
use crate::application::users::{ensure_unique, today, UserFields};
use crate::domain::*;

pub fn execute<R: UserRepository + ?Sized>(
    repo: &mut R,
    fields: UserFields,
) -> Result<User, DomainError> {
    tracing::info!("Adding user with login {:?}", fields.login);
    let invalid = DomainError::Validation;

    let email = fields
        .email
        .ok_or_else(|| DomainError::validation("Email must be specified"))
        .and_then(|email| Email::new(email).map_err(invalid))?;
    let login = fields
        .login
        .ok_or_else(|| DomainError::validation("Login must be specified"))
        .and_then(|login| Login::new(login).map_err(invalid))?;
    let birthday = fields
        .birthday
        .ok_or_else(|| DomainError::validation("Birthday must be specified"))
        .and_then(|date| Birthday::new(date, today()).map_err(invalid))?;
    let name = DisplayName::or_login(fields.name, &login).map_err(invalid)?;
    ensure_unique(&*repo, &email, &login, None)?;

    let id = UserId::from_u64(next_id(repo.ids().iter().map(UserId::as_u64)));
    let user = repo.create(User::new(
        id,
        UserDraft {
            email,
            login,
            name,
            birthday,
        },
    ));
    tracing::info!("User added with id {} and name {}", user.id(), user.name());
    Ok(user)
}
