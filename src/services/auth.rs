use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use validator::Validate;

use crate::auth::sign_token;
use crate::domain::salesperson::SalespersonStatus;
use crate::forms::auth::LoginForm;
use crate::repository::SalespersonReader;
use crate::services::{ServiceError, ServiceResult};

/// Result of a successful login.
pub struct LoginOutcome {
    pub token: String,
    pub salesperson_id: i32,
    pub name: String,
}

/// Verifies a salesperson's credentials and signs a session token.
///
/// Unknown identifier, wrong password and inactive account all produce the
/// same `Unauthorized` so the response does not leak which one it was.
pub fn login<R>(repo: &R, form: LoginForm, jwt_secret: &str) -> ServiceResult<LoginOutcome>
where
    R: SalespersonReader + ?Sized,
{
    form.validate()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let salesperson = repo
        .get_salesperson_by_identifier(&form.identifier)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::Unauthorized)?;

    if salesperson.status != SalespersonStatus::Active {
        return Err(ServiceError::Unauthorized);
    }

    let parsed_hash = PasswordHash::new(&salesperson.password_hash)
        .map_err(|_| ServiceError::Unauthorized)?;
    if Argon2::default()
        .verify_password(form.password.as_bytes(), &parsed_hash)
        .is_err()
    {
        return Err(ServiceError::Unauthorized);
    }

    let token = sign_token(salesperson.id, &salesperson.name, jwt_secret)
        .map_err(|err| ServiceError::Internal(err.to_string()))?;

    Ok(LoginOutcome {
        token,
        salesperson_id: salesperson.id,
        name: salesperson.name,
    })
}

/// Hashes a password for storage.
pub fn hash_password(password: &str) -> ServiceResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| ServiceError::Internal(err.to_string()))
}
