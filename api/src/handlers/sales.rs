use crate::{auth::AuthUser, error::ApiError, state::ApiState};
use axum::{http::StatusCode, Extension, Json};
use models::api::{sales::NewSale, Created};

/// The legacy store never validated `client_id`; orphaned sales are
/// accepted here too.
#[axum::debug_handler]
pub async fn create_sale(
    _user: AuthUser,
    Extension(state): Extension<ApiState>,
    Json(new_sale): Json<NewSale>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let result = sqlx::query("INSERT INTO sales (client_id, sale_date, amount) VALUES (?, ?, ?)")
        .bind(new_sale.client_id)
        .bind(&new_sale.sale_date)
        .bind(new_sale.amount)
        .execute(&state.pool)
        .await
        .map_err(ApiError::constraint)?;

    Ok((
        StatusCode::CREATED,
        Json(Created {
            id: result.last_insert_rowid(),
        }),
    ))
}
