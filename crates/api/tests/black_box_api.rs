use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod) over a fresh in-memory store,
        // bound to an ephemeral port.
        let store = samplereg_store::Store::connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory store");
        let app = samplereg_api::app::build_app(store);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn create_account(client: &reqwest::Client, base_url: &str, name: &str) -> reqwest::Response {
    client
        .post(format!("{}/users/", base_url))
        .json(&json!({ "name": name }))
        .send()
        .await
        .unwrap()
}

async fn create_sample(
    client: &reqwest::Client,
    base_url: &str,
    owner_id: i64,
    label: &str,
    inner: f64,
    outer: f64,
) -> reqwest::Response {
    client
        .post(format!("{}/users/{}/samples/", base_url, owner_id))
        .json(&json!({
            "sample_label": label,
            "proposal_number": "P-001",
            "inner_diameter": inner,
            "outer_diameter": outer,
        }))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn health_endpoint_is_open() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_account_round_trips() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = create_account(&client, &srv.base_url, "alice").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "alice");
    assert_eq!(body["samples"], json!([]));

    let res = client
        .get(format!("{}/users/1", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let fetched: serde_json::Value = res.json().await.unwrap();
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn duplicate_account_name_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    assert_eq!(
        create_account(&client, &srv.base_url, "alice").await.status(),
        StatusCode::OK
    );

    let res = create_account(&client, &srv.base_url, "alice").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "conflict");
    assert_eq!(
        body["message"],
        "An account belonging to this user is already registered"
    );

    // No second row was created.
    let res = client
        .get(format!("{}/users/", srv.base_url))
        .send()
        .await
        .unwrap();
    let accounts: Vec<serde_json::Value> = res.json().await.unwrap();
    assert_eq!(accounts.len(), 1);
}

#[tokio::test]
async fn missing_account_is_not_found() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/users/42", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn non_numeric_account_id_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/users/abc", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_id");
}

#[tokio::test]
async fn sample_for_missing_owner_is_not_found() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = create_sample(&client, &srv.base_url, 1, "S1", 3.0, 5.0).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn inverted_diameters_are_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    create_account(&client, &srv.base_url, "alice").await;

    let res = create_sample(&client, &srv.base_url, 1, "S1", 5.0, 3.0).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["message"],
        "Inner diameter must be lesser than outer diameter"
    );

    // Nothing was persisted.
    let res = client
        .get(format!("{}/samples/", srv.base_url))
        .send()
        .await
        .unwrap();
    let samples: Vec<serde_json::Value> = res.json().await.unwrap();
    assert!(samples.is_empty());
}

#[tokio::test]
async fn duplicate_label_is_rejected_before_diameter_check() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    create_account(&client, &srv.base_url, "alice").await;
    assert_eq!(
        create_sample(&client, &srv.base_url, 1, "S1", 3.0, 5.0)
            .await
            .status(),
        StatusCode::OK
    );

    // Duplicate label and inverted diameters: label uniqueness is checked
    // first, so the conflict message surfaces.
    let res = create_sample(&client, &srv.base_url, 1, "S1", 5.0, 3.0).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["message"],
        "A sample with this label is already registered"
    );
}

#[tokio::test]
async fn created_sample_round_trips_through_owner_and_listing() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    create_account(&client, &srv.base_url, "alice").await;

    let res = create_sample(&client, &srv.base_url, 1, "S1", 3.0, 5.0).await;
    assert_eq!(res.status(), StatusCode::OK);
    let sample: serde_json::Value = res.json().await.unwrap();
    assert_eq!(sample["id"], 1);
    assert_eq!(sample["owner_id"], 1);
    assert_eq!(sample["sample_label"], "S1");
    assert_eq!(sample["proposal_number"], "P-001");
    assert_eq!(sample["inner_diameter"], 3.0);
    assert_eq!(sample["outer_diameter"], 5.0);

    let res = client
        .get(format!("{}/users/1", srv.base_url))
        .send()
        .await
        .unwrap();
    let account: serde_json::Value = res.json().await.unwrap();
    assert_eq!(account["samples"], json!([sample]));

    let res = client
        .get(format!("{}/samples/", srv.base_url))
        .send()
        .await
        .unwrap();
    let samples: Vec<serde_json::Value> = res.json().await.unwrap();
    assert_eq!(samples, vec![sample]);
}

#[tokio::test]
async fn list_endpoints_respect_skip_and_limit() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for name in ["alice", "bob", "carol"] {
        create_account(&client, &srv.base_url, name).await;
    }
    for (label, owner) in [("S1", 1), ("S2", 2), ("S3", 3)] {
        create_sample(&client, &srv.base_url, owner, label, 3.0, 5.0).await;
    }

    let res = client
        .get(format!("{}/users/?skip=1&limit=1", srv.base_url))
        .send()
        .await
        .unwrap();
    let accounts: Vec<serde_json::Value> = res.json().await.unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0]["name"], "bob");

    let res = client
        .get(format!("{}/samples/?skip=1&limit=1", srv.base_url))
        .send()
        .await
        .unwrap();
    let samples: Vec<serde_json::Value> = res.json().await.unwrap();
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0]["sample_label"], "S2");
}
