use crate::{auth::AuthUser, error::ApiError, state::ApiState};
use axum::{Extension, Json};
use models::{api::stats, data};
use sqlx::query_as;

const DAILY_SALES: &str = "SELECT sale_date, SUM(amount) AS total FROM sales GROUP BY sale_date";

const HIGHEST_VOLUME: &str = "SELECT c.id, c.name, SUM(s.amount) AS total \
    FROM clients c JOIN sales s ON c.id = s.client_id \
    GROUP BY c.id ORDER BY total DESC LIMIT 1";

const HIGHEST_AVERAGE: &str = "SELECT c.id, c.name, AVG(s.amount) AS avg \
    FROM clients c JOIN sales s ON c.id = s.client_id \
    GROUP BY c.id ORDER BY avg DESC LIMIT 1";

const MOST_FREQUENT: &str = "SELECT c.id, c.name, COUNT(DISTINCT s.sale_date) AS days \
    FROM clients c JOIN sales s ON c.id = s.client_id \
    GROUP BY c.id ORDER BY days DESC LIMIT 1";

#[axum::debug_handler]
pub async fn daily_sales(
    _user: AuthUser,
    Extension(state): Extension<ApiState>,
) -> Result<Json<Vec<stats::DailySale>>, ApiError> {
    let rows: Vec<data::stats::DailySale> =
        query_as(DAILY_SALES).fetch_all(&state.pool).await?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// The three aggregates are read-only and unrelated, so they run
/// concurrently. A client must have at least one sale to appear;
/// tie-break order is whatever the engine yields.
#[axum::debug_handler]
pub async fn top_clients(
    _user: AuthUser,
    Extension(state): Extension<ApiState>,
) -> Result<Json<stats::TopClients>, ApiError> {
    let (volume, average, frequency) = tokio::try_join!(
        query_as::<_, data::stats::ClientVolume>(HIGHEST_VOLUME).fetch_optional(&state.pool),
        query_as::<_, data::stats::ClientAverage>(HIGHEST_AVERAGE).fetch_optional(&state.pool),
        query_as::<_, data::stats::ClientFrequency>(MOST_FREQUENT).fetch_optional(&state.pool),
    )?;

    Ok(Json(stats::TopClients {
        highest_volume: volume.map(Into::into),
        highest_average: average.map(Into::into),
        most_frequent: frequency.map(Into::into),
    }))
}
