//! Salesperson authentication: JWT signing/verification and the actix
//! extractor used by salesperson-scoped routes.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{web, FromRequest, HttpRequest};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Name of the httpOnly cookie carrying the salesperson token.
pub const AUTH_COOKIE: &str = "sp_jwt";

/// Token lifetime in days.
const TOKEN_TTL_DAYS: i64 = 7;

/// Runtime configuration shared with request handlers.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HS256 secret used to sign and verify salesperson tokens.
    pub jwt_secret: String,
}

/// Claims carried by a salesperson token. Doubles as the extractor for
/// authenticated routes: handlers taking `AuthenticatedSalesperson` reject
/// requests without a valid token with `401 Unauthorized`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedSalesperson {
    /// Salesperson identifier.
    pub sid: i32,
    /// Display name, kept in the token to avoid a lookup per request.
    pub name: String,
    /// Expiry as a unix timestamp.
    pub exp: usize,
}

/// Sign a 7-day token for the given salesperson.
pub fn sign_token(
    salesperson_id: i32,
    name: &str,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = (chrono::Utc::now() + chrono::Duration::days(TOKEN_TTL_DAYS)).timestamp() as usize;
    let claims = AuthenticatedSalesperson {
        sid: salesperson_id,
        name: name.to_string(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verify a token and return its claims. Expired or tampered tokens fail.
pub fn verify_token(
    token: &str,
    secret: &str,
) -> Result<AuthenticatedSalesperson, jsonwebtoken::errors::Error> {
    decode::<AuthenticatedSalesperson>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

fn token_from_request(req: &HttpRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(AUTH_COOKIE) {
        return Some(cookie.value().to_string());
    }

    req.headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.to_string())
}

impl FromRequest for AuthenticatedSalesperson {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match req.app_data::<web::Data<ServerConfig>>() {
            Some(config) => match token_from_request(req) {
                Some(token) => verify_token(&token, &config.jwt_secret)
                    .map_err(|_| ErrorUnauthorized("invalid token")),
                None => Err(ErrorUnauthorized("missing token")),
            },
            None => Err(ErrorUnauthorized("authentication is not configured")),
        };

        ready(result)
    }
}
