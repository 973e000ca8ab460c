use crate::auth::TokenKeys;
use josekit::JoseError;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Everything a handler needs, constructed once in `main` and injected
/// through an `Extension` layer. No module-level globals.
#[derive(Clone)]
pub struct ApiState {
    pub pool: SqlitePool,
    pub keys: Arc<TokenKeys>,
}

impl ApiState {
    pub fn new(pool: SqlitePool, token_secret: &str) -> Result<Self, JoseError> {
        Ok(Self {
            pool,
            keys: Arc::new(TokenKeys::new(token_secret)?),
        })
    }
}
