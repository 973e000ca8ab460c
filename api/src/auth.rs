use crate::{error::ApiError, state::ApiState};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use josekit::{
    jws::{
        alg::hmac::{HmacJwsSigner, HmacJwsVerifier},
        JwsHeader, HS256,
    },
    jwt::{self, JwtPayload, JwtPayloadValidator},
    JoseError,
};
use models::data::users::User;
use sha2::{Digest, Sha256};
use std::time::{Duration, SystemTime};

/// Tokens are short-lived; a reload of the dashboard means a fresh login.
const TOKEN_TTL: Duration = Duration::from_secs(60 * 60);

/// HS256 signer/verifier pair derived from the configured secret.
pub struct TokenKeys {
    signer: HmacJwsSigner,
    verifier: HmacJwsVerifier,
}

impl TokenKeys {
    /// HS256 needs a 32-byte key; hashing the configured secret lets
    /// operators pick one of any length.
    pub fn new(secret: &str) -> Result<Self, JoseError> {
        let key = Sha256::digest(secret.as_bytes());

        Ok(Self {
            signer: HS256.signer_from_bytes(&key)?,
            verifier: HS256.verifier_from_bytes(&key)?,
        })
    }

    pub fn issue(&self, user: &User) -> Result<String, JoseError> {
        let mut header = JwsHeader::new();
        header.set_token_type("JWT");

        let now = SystemTime::now();
        let mut payload = JwtPayload::new();
        payload.set_subject(user.id.to_string());
        payload.set_claim("username", Some(user.username.clone().into()))?;
        payload.set_issued_at(&now);
        payload.set_expires_at(&(now + TOKEN_TTL));

        jwt::encode_with_signer(&payload, &header, &self.signer)
    }

    /// Signature and expiry both have to hold; any failure is a 403.
    pub fn verify(&self, token: &str) -> Result<AuthUser, ApiError> {
        let (payload, _header) =
            jwt::decode_with_verifier(token, &self.verifier).map_err(|_| ApiError::InvalidToken)?;

        let mut validator = JwtPayloadValidator::new();
        validator.set_base_time(SystemTime::now());
        validator
            .validate(&payload)
            .map_err(|_| ApiError::InvalidToken)?;

        let id = payload
            .subject()
            .and_then(|subject| subject.parse().ok())
            .ok_or(ApiError::InvalidToken)?;

        let username = payload
            .claim("username")
            .and_then(|value| value.as_str())
            .ok_or(ApiError::InvalidToken)?
            .to_string();

        Ok(AuthUser { id, username })
    }
}

/// Identity decoded from the bearer token; extracting it is the auth
/// gate on every protected route.
#[derive(Debug)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let keys = parts
            .extensions
            .get::<ApiState>()
            .map(|state| state.keys.clone())
            .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("ApiState extension missing")))?;

        let token = bearer_token(parts).ok_or(ApiError::AccessDenied)?;

        keys.verify(token)
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
