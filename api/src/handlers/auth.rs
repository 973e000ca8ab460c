use crate::{error::ApiError, state::ApiState};
use axum::{http::StatusCode, Extension, Json};
use models::{
    api::{
        auth::{AuthResponse, Credentials},
        Acknowledgement,
    },
    data::users::{NewUser, User},
};
use sqlx::query_as;

#[axum::debug_handler]
pub async fn register(
    Extension(state): Extension<ApiState>,
    Json(credentials): Json<Credentials>,
) -> Result<(StatusCode, Json<Acknowledgement>), ApiError> {
    let new_user =
        NewUser::from_credentials(credentials).map_err(|err| ApiError::Internal(err.into()))?;

    sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
        .bind(&new_user.username)
        .bind(&new_user.password_hash)
        .execute(&state.pool)
        .await
        .map_err(|err| {
            if err
                .as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                ApiError::BadRequest("User already exists".to_string())
            } else {
                err.into()
            }
        })?;

    tracing::info!("registered user {}", new_user.username);

    Ok((StatusCode::CREATED, Json(Acknowledgement::new("User created"))))
}

#[axum::debug_handler]
pub async fn login(
    Extension(state): Extension<ApiState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<AuthResponse>, ApiError> {
    let user: User = query_as("SELECT * FROM users WHERE username = ?")
        .bind(&credentials.username)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !user.verify_password(&credentials.password) {
        return Err(ApiError::InvalidCredentials);
    }

    let token = state
        .keys
        .issue(&user)
        .map_err(|err| ApiError::Internal(err.into()))?;

    Ok(Json(AuthResponse { token }))
}
