use std::net::SocketAddr;

use axum::Router;
use serde_json::{json, Value};
use service::JsonDb;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::routes;
use server::state::ServerState;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    // isolated database file per test run
    let db_path = std::env::temp_dir().join(format!("chirpy_e2e_{}.json", Uuid::new_v4()));
    let db = JsonDb::open(&db_path).await?;
    let state = ServerState::new(db);

    let app: Router = routes::build_router(state, CorsLayer::very_permissive(), "frontend");
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn health_endpoint_responds_ok() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/api/healthz", app.base_url)).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn chirp_lifecycle_over_http() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = client();

    // over-long body is rejected with the canonical message
    let res = client
        .post(format!("{}/api/chirps", app.base_url))
        .json(&json!({ "body": "x".repeat(141) }))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Chirp is too long");

    // nothing was stored by the rejected request
    let res = client.get(format!("{}/api/chirps", app.base_url)).send().await?;
    let chirps: Vec<Value> = res.json().await?;
    assert!(chirps.is_empty());

    // disallowed words come back substituted
    let res = client
        .post(format!("{}/api/chirps", app.base_url))
        .json(&json!({ "body": "this is kerfuffle" }))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::CREATED);
    let chirp: Value = res.json().await?;
    assert_eq!(chirp["id"], 1);
    assert_eq!(chirp["body"], "this is ****");

    let res = client
        .post(format!("{}/api/chirps", app.base_url))
        .json(&json!({ "body": "a second chirp" }))
        .send()
        .await?;
    let chirp: Value = res.json().await?;
    assert_eq!(chirp["id"], 2);

    // listing is ascending by id
    let res = client.get(format!("{}/api/chirps", app.base_url)).send().await?;
    let chirps: Vec<Value> = res.json().await?;
    assert_eq!(chirps.len(), 2);
    assert_eq!(chirps[0]["id"], 1);
    assert_eq!(chirps[1]["body"], "a second chirp");

    // single lookup and not-found
    let res = client.get(format!("{}/api/chirps/1", app.base_url)).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let res = client.get(format!("{}/api/chirps/999", app.base_url)).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn users_metrics_and_reset() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = client();

    let res = client
        .post(format!("{}/api/users", app.base_url))
        .json(&json!({ "email": "alice@example.com" }))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::CREATED);
    let user: Value = res.json().await?;
    assert_eq!(user["id"], 1);
    assert_eq!(user["email"], "alice@example.com");

    // a front-end request bumps the hit counter, API requests do not
    let _ = client.get(format!("{}/app", app.base_url)).send().await?;
    let res = client.get(format!("{}/admin/metrics", app.base_url)).send().await?;
    let page = res.text().await?;
    assert!(page.contains("visited 1 times"), "unexpected metrics page: {page}");

    client.post(format!("{}/api/chirps", app.base_url))
        .json(&json!({ "body": "soon to be wiped" }))
        .send()
        .await?;

    let res = client.post(format!("{}/admin/reset", app.base_url)).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    assert_eq!(res.text().await?, "Hits reset to 0");

    // both the counter and the store are back to empty
    let res = client.get(format!("{}/admin/metrics", app.base_url)).send().await?;
    assert!(res.text().await?.contains("visited 0 times"));
    let res = client.get(format!("{}/api/chirps", app.base_url)).send().await?;
    let chirps: Vec<Value> = res.json().await?;
    assert!(chirps.is_empty());

    // ids restart at 1 after the wipe
    let res = client
        .post(format!("{}/api/chirps", app.base_url))
        .json(&json!({ "body": "fresh start" }))
        .send()
        .await?;
    let chirp: Value = res.json().await?;
    assert_eq!(chirp["id"], 1);

    Ok(())
}
