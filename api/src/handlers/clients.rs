use crate::{auth::AuthUser, error::ApiError, state::ApiState};
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Extension, Json,
};
use models::{
    api::{
        clients::{ClientFilter, ClientList, NewClient},
        Acknowledgement, Created,
    },
    data,
};
use sqlx::{QueryBuilder, Sqlite};

#[axum::debug_handler]
pub async fn create_client(
    _user: AuthUser,
    Extension(state): Extension<ApiState>,
    Json(new_client): Json<NewClient>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let result = sqlx::query("INSERT INTO clients (name, email, birthdate) VALUES (?, ?, ?)")
        .bind(&new_client.name)
        .bind(&new_client.email)
        .bind(&new_client.birthdate)
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

#[axum::debug_handler]
pub async fn list_clients(
    _user: AuthUser,
    Extension(state): Extension<ApiState>,
    Query(filter): Query<ClientFilter>,
) -> Result<Json<ClientList>, ApiError> {
    let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM clients");

    if !filter.is_empty() {
        query.push(" WHERE ");
        let mut conditions = query.separated(" AND ");
        if let Some(name) = &filter.name {
            conditions
                .push("name LIKE ")
                .push_bind_unseparated(format!("%{name}%"));
        }
        if let Some(email) = &filter.email {
            conditions
                .push("email LIKE ")
                .push_bind_unseparated(format!("%{email}%"));
        }
    }

    let clients: Vec<data::clients::Client> =
        query.build_query_as().fetch_all(&state.pool).await?;

    let entries = clients.into_iter().map(Into::into).collect();

    Ok(Json(ClientList::from_entries(entries)))
}

#[axum::debug_handler]
pub async fn update_client(
    _user: AuthUser,
    Path(id): Path<i64>,
    Extension(state): Extension<ApiState>,
    Json(client): Json<NewClient>,
) -> Result<Json<Acknowledgement>, ApiError> {
    let result = sqlx::query("UPDATE clients SET name = ?, email = ?, birthdate = ? WHERE id = ?")
        .bind(&client.name)
        .bind(&client.email)
        .bind(&client.birthdate)
        .bind(id)
        .execute(&state.pool)
        .await
        .map_err(ApiError::constraint)?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("Client"));
    }

    Ok(Json(Acknowledgement::new("Client updated")))
}

#[axum::debug_handler]
pub async fn delete_client(
    _user: AuthUser,
    Path(id): Path<i64>,
    Extension(state): Extension<ApiState>,
) -> Result<Json<Acknowledgement>, ApiError> {
    let result = sqlx::query("DELETE FROM clients WHERE id = ?")
        .bind(id)
        .execute(&state.pool)
        .await
        .map_err(ApiError::constraint)?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("Client"));
    }

    Ok(Json(Acknowledgement::new("Client deleted")))
}
