use axum::{
    routing::{get, post, put},
    Extension, Router,
};
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod db;
pub mod error;
pub mod handlers;
pub mod state;

pub use state::ApiState;

/// Builds the full `/api` route tree. Registration and login are open;
/// everything else goes through the bearer-token extractor.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/api/register", post(handlers::auth::register))
        .route("/api/login", post(handlers::auth::login))
        .route(
            "/api/clients",
            get(handlers::clients::list_clients).post(handlers::clients::create_client),
        )
        .route(
            "/api/clients/:id",
            put(handlers::clients::update_client).delete(handlers::clients::delete_client),
        )
        .route("/api/sales", post(handlers::sales::create_sale))
        .route("/api/stats/daily-sales", get(handlers::stats::daily_sales))
        .route("/api/stats/top-clients", get(handlers::stats::top_clients))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}
