use anyhow::{bail, Result};
use models::api::{
    auth::{AuthResponse, Credentials},
    clients::{ClientFilter, ClientList, NewClient},
    sales::NewSale,
    stats::{DailySale, TopClients},
    Acknowledgement, Created,
};
use once_cell::sync::Lazy;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

static CLIENT: Lazy<Client> = Lazy::new(Client::new);

/// Same-origin API; the dev server proxies `/api` to the backend.
/// reqwest refuses relative URLs, so the page origin is prepended.
fn api_base_url() -> String {
    base_url_from_origin(
        web_sys::window().and_then(|window| window.location().origin().ok()),
    )
}

fn base_url_from_origin(origin: Option<String>) -> String {
    match origin {
        Some(origin) => format!("{origin}/api"),
        None => "/api".to_string(),
    }
}

fn authorized(method: Method, path: &str, token: &str) -> RequestBuilder {
    CLIENT
        .request(method, format!("{}{path}", api_base_url()))
        .header("Authorization", format!("Bearer {token}"))
}

/// Surfaces the `{"error": ...}` body of a failed request instead of a
/// bare status code.
async fn parse<T: DeserializeOwned>(response: Response) -> Result<T> {
    if !response.status().is_success() {
        let status = response.status();
        let error = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| body["error"].as_str().map(String::from))
            .unwrap_or_else(|| status.to_string());
        bail!(error);
    }

    Ok(response.json::<T>().await?)
}

pub async fn login(credentials: &Credentials) -> Result<AuthResponse> {
    let response = CLIENT
        .request(Method::POST, format!("{}/login", api_base_url()))
        .json(credentials)
        .send()
        .await?;

    parse(response).await
}

pub async fn list_clients(token: &str, filter: &ClientFilter) -> Result<ClientList> {
    let response = authorized(Method::GET, "/clients", token)
        .query(filter)
        .send()
        .await?;

    parse(response).await
}

pub async fn add_client(token: &str, new_client: &NewClient) -> Result<Created> {
    let response = authorized(Method::POST, "/clients", token)
        .json(new_client)
        .send()
        .await?;

    parse(response).await
}

pub async fn update_client(token: &str, id: i64, client: &NewClient) -> Result<Acknowledgement> {
    let response = authorized(Method::PUT, &format!("/clients/{id}"), token)
        .json(client)
        .send()
        .await?;

    parse(response).await
}

pub async fn delete_client(token: &str, id: i64) -> Result<Acknowledgement> {
    let response = authorized(Method::DELETE, &format!("/clients/{id}"), token)
        .send()
        .await?;

    parse(response).await
}

pub async fn add_sale(token: &str, new_sale: &NewSale) -> Result<Created> {
    let response = authorized(Method::POST, "/sales", token)
        .json(new_sale)
        .send()
        .await?;

    parse(response).await
}

pub async fn daily_sales(token: &str) -> Result<Vec<DailySale>> {
    let response = authorized(Method::GET, "/stats/daily-sales", token)
        .send()
        .await?;

    parse(response).await
}

pub async fn top_clients(token: &str) -> Result<TopClients> {
    let response = authorized(Method::GET, "/stats/top-clients", token)
        .send()
        .await?;

    parse(response).await
}
