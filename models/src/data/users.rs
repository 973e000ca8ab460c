use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};
use sqlx::prelude::FromRow;

#[derive(Debug, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

impl User {
    pub fn verify_password(&self, password: &str) -> bool {
        verify(password, &self.password_hash).unwrap_or(false)
    }
}

pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

impl NewUser {
    /// Hashing can fail, and the API maps that to a server error rather
    /// than a panic, so this is not a `From` impl.
    pub fn from_credentials(
        credentials: crate::api::auth::Credentials,
    ) -> Result<Self, BcryptError> {
        let password_hash = hash(&credentials.password, DEFAULT_COST)?;

        Ok(Self {
            username: credentials.username,
            password_hash,
        })
    }
}
