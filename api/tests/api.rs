use api::{create_router, ApiState};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn test_router() -> Router {
    let pool = api::db::connect("sqlite::memory:").await.unwrap();
    let state = ApiState::new(pool, "test-secret").unwrap();

    create_router(state)
}

fn request(method: Method, path: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(path);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

async fn register_and_login(app: &Router) -> String {
    let credentials = json!({ "username": "alice", "password": "pw1" });

    let (status, _) = send(
        app,
        request(Method::POST, "/api/register", None, Some(credentials.clone())),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        app,
        request(Method::POST, "/api/login", None, Some(credentials)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    body["token"].as_str().unwrap().to_string()
}

async fn create_client(app: &Router, token: &str, name: &str, email: &str) -> i64 {
    let (status, body) = send(
        app,
        request(
            Method::POST,
            "/api/clients",
            Some(token),
            Some(json!({ "name": name, "email": email, "birthdate": "1990-01-01" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    body["id"].as_i64().unwrap()
}

async fn create_sale(app: &Router, token: &str, client_id: i64, sale_date: &str, amount: f64) {
    let (status, _) = send(
        app,
        request(
            Method::POST,
            "/api/sales",
            Some(token),
            Some(json!({ "client_id": client_id, "sale_date": sale_date, "amount": amount })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn registering_the_same_username_twice_is_rejected() {
    let app = test_router().await;
    let credentials = json!({ "username": "alice", "password": "pw1" });

    let (status, _) = send(
        &app,
        request(Method::POST, "/api/register", None, Some(credentials.clone())),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        request(Method::POST, "/api/register", None, Some(credentials)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "User already exists");
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let app = test_router().await;

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/register",
            None,
            Some(json!({ "username": "alice", "password": "pw1" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/login",
            None,
            Some(json!({ "username": "alice", "password": "wrong" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/login",
            None,
            Some(json!({ "username": "nobody", "password": "pw1" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_routes_refuse_missing_and_invalid_tokens() {
    let app = test_router().await;

    let (status, body) = send(&app, request(Method::GET, "/api/clients", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Access denied");

    let (status, body) = send(
        &app,
        request(Method::GET, "/api/clients", Some("not-a-token"), None),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Invalid token");
}

#[tokio::test]
async fn created_client_shows_up_in_the_listing_envelope() {
    let app = test_router().await;
    let token = register_and_login(&app).await;

    let id = create_client(&app, &token, "Ann", "ann@x.com").await;
    assert!(id >= 1);

    let (status, body) = send(&app, request(Method::GET, "/api/clients", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);

    let clientes = body["data"]["clientes"].as_array().unwrap();
    assert_eq!(clientes.len(), 1);
    assert_eq!(clientes[0]["id"], id);
    assert_eq!(clientes[0]["info"]["nomeCompleto"], "Ann");
    assert_eq!(clientes[0]["info"]["detalhes"]["email"], "ann@x.com");
    assert_eq!(clientes[0]["info"]["detalhes"]["nascimento"], "1990-01-01");
    assert_eq!(clientes[0]["estatisticas"]["vendas"], json!([]));
    assert_eq!(body["meta"]["registroTotal"], 1);
    assert_eq!(body["meta"]["pagina"], 1);
    assert_eq!(body["redundante"]["status"], "ok");
}

#[tokio::test]
async fn duplicate_client_email_is_rejected() {
    let app = test_router().await;
    let token = register_and_login(&app).await;

    create_client(&app, &token, "Ann", "ann@x.com").await;

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/clients",
            Some(&token),
            Some(json!({ "name": "Another", "email": "ann@x.com", "birthdate": "1991-02-02" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn listing_filters_by_name_and_email_substrings() {
    let app = test_router().await;
    let token = register_and_login(&app).await;

    create_client(&app, &token, "Ann", "ann@x.com").await;
    create_client(&app, &token, "Bob", "bob@y.com").await;

    let (status, body) = send(
        &app,
        request(Method::GET, "/api/clients?name=nn", Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let clientes = body["data"]["clientes"].as_array().unwrap();
    assert_eq!(clientes.len(), 1);
    assert_eq!(clientes[0]["info"]["nomeCompleto"], "Ann");

    let (_, body) = send(
        &app,
        request(
            Method::GET,
            "/api/clients?name=o&email=y.com",
            Some(&token),
            None,
        ),
    )
    .await;
    let clientes = body["data"]["clientes"].as_array().unwrap();
    assert_eq!(clientes.len(), 1);
    assert_eq!(clientes[0]["info"]["nomeCompleto"], "Bob");

    let (_, body) = send(
        &app,
        request(Method::GET, "/api/clients?name=zzz", Some(&token), None),
    )
    .await;
    assert_eq!(body["meta"]["registroTotal"], 0);
}

#[tokio::test]
async fn updating_a_client_overwrites_all_fields() {
    let app = test_router().await;
    let token = register_and_login(&app).await;

    let id = create_client(&app, &token, "Ann", "ann@x.com").await;

    let (status, body) = send(
        &app,
        request(
            Method::PUT,
            &format!("/api/clients/{id}"),
            Some(&token),
            Some(json!({ "name": "Anna", "email": "anna@x.com", "birthdate": "1990-12-31" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Client updated");

    let (_, body) = send(&app, request(Method::GET, "/api/clients", Some(&token), None)).await;
    let clientes = body["data"]["clientes"].as_array().unwrap();
    assert_eq!(clientes[0]["info"]["nomeCompleto"], "Anna");
    assert_eq!(clientes[0]["info"]["detalhes"]["email"], "anna@x.com");
    assert_eq!(clientes[0]["info"]["detalhes"]["nascimento"], "1990-12-31");
}

#[tokio::test]
async fn missing_client_ids_yield_not_found() {
    let app = test_router().await;
    let token = register_and_login(&app).await;

    let (status, body) = send(
        &app,
        request(
            Method::PUT,
            "/api/clients/999",
            Some(&token),
            Some(json!({ "name": "X", "email": "x@x.com", "birthdate": "2000-01-01" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Client not found");

    let (status, body) = send(
        &app,
        request(Method::DELETE, "/api/clients/999", Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Client not found");
}

#[tokio::test]
async fn deleted_client_disappears_from_the_listing() {
    let app = test_router().await;
    let token = register_and_login(&app).await;

    let id = create_client(&app, &token, "Ann", "ann@x.com").await;

    let (status, body) = send(
        &app,
        request(
            Method::DELETE,
            &format!("/api/clients/{id}"),
            Some(&token),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Client deleted");

    let (_, body) = send(&app, request(Method::GET, "/api/clients", Some(&token), None)).await;
    assert_eq!(body["meta"]["registroTotal"], 0);
}

#[tokio::test]
async fn daily_sales_sum_amounts_per_date() {
    let app = test_router().await;
    let token = register_and_login(&app).await;

    let id = create_client(&app, &token, "Ann", "ann@x.com").await;
    create_sale(&app, &token, id, "2024-05-01", 10.0).await;
    create_sale(&app, &token, id, "2024-05-01", 15.5).await;
    create_sale(&app, &token, id, "2024-05-02", 4.5).await;

    let (status, body) = send(
        &app,
        request(Method::GET, "/api/stats/daily-sales", Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);

    let total_for = |date: &str| {
        rows.iter()
            .find(|row| row["sale_date"] == date)
            .map(|row| row["total"].as_f64().unwrap())
            .unwrap()
    };
    assert_eq!(total_for("2024-05-01"), 25.5);
    assert_eq!(total_for("2024-05-02"), 4.5);
}

#[tokio::test]
async fn top_clients_reports_the_three_aggregates() {
    let app = test_router().await;
    let token = register_and_login(&app).await;

    // Ann: volume 30 over two days. Bob: one sale of 25, highest average.
    let ann = create_client(&app, &token, "Ann", "ann@x.com").await;
    let bob = create_client(&app, &token, "Bob", "bob@y.com").await;
    create_sale(&app, &token, ann, "2024-05-01", 10.0).await;
    create_sale(&app, &token, ann, "2024-05-02", 20.0).await;
    create_sale(&app, &token, bob, "2024-05-01", 25.0).await;

    let (status, body) = send(
        &app,
        request(Method::GET, "/api/stats/top-clients", Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["highestVolume"]["name"], "Ann");
    assert_eq!(body["highestVolume"]["total"], 30.0);
    assert!(body["highestVolume"]["total"].as_f64().unwrap() >= 25.0);

    assert_eq!(body["highestAverage"]["name"], "Bob");
    assert_eq!(body["highestAverage"]["avg"], 25.0);

    assert_eq!(body["mostFrequent"]["name"], "Ann");
    assert_eq!(body["mostFrequent"]["days"], 2);
}

#[tokio::test]
async fn top_clients_is_empty_without_sales() {
    let app = test_router().await;
    let token = register_and_login(&app).await;

    create_client(&app, &token, "Ann", "ann@x.com").await;

    let (status, body) = send(
        &app,
        request(Method::GET, "/api/stats/top-clients", Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));
}
