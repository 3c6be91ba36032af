use serde::Deserialize;
use validator::Validate;

/// Body of `POST /salesperson/login`. The identifier is an email address or
/// a phone number.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1))]
    pub identifier: String,
    #[validate(length(min = 1))]
    pub password: String,
}
