use anyhow::Context;
use clap::Parser;
use std::env;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ApiArgs {
    /// The port to serve the API on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// The store to open; the default resets on restart
    #[arg(long, default_value = "sqlite::memory:")]
    database_url: String,

    /// Secret used to sign bearer tokens; falls back to TOKEN_SECRET
    #[arg(long)]
    token_secret: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let args = ApiArgs::parse();

    let token_secret = match args.token_secret {
        Some(secret) => secret,
        None => env::var("TOKEN_SECRET")
            .context("set --token-secret or the TOKEN_SECRET environment variable")?,
    };

    let pool = api::db::connect(&args.database_url)
        .await
        .context("failed to open the store")?;
    let state = api::ApiState::new(pool, &token_secret)?;

    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port)).await?;
    tracing::info!("API listening on port {}", args.port);

    axum::serve(listener, app).await?;

    Ok(())
}
