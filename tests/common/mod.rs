//! Shared harness: serves the real router over an in-memory store
#![allow(dead_code)]

use gestor::{build_router, config::DatabaseConfig, AppState, Database};
use reqwest::{Response, StatusCode};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub struct TestServer {
    base: String,
    client: reqwest::Client,
    pub db: Database,
}

pub async fn spawn() -> TestServer {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        users_container: "users".to_string(),
        projects_container: "projects".to_string(),
    };
    let db = Database::connect(&config).await.expect("in-memory store");
    let app = build_router(AppState::from(&db));

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    TestServer {
        base: format!("http://{}", addr),
        client: reqwest::Client::new(),
        db,
    }
}

impl TestServer {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client.get(self.url(path)).send().await.expect("GET")
    }

    pub async fn post(&self, path: &str, body: &Value) -> Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("POST")
    }

    pub async fn post_raw(&self, path: &str, body: &str) -> Response {
        self.client
            .post(self.url(path))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("POST")
    }

    pub async fn put(&self, path: &str, body: &Value) -> Response {
        self.client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("PUT")
    }

    pub async fn delete(&self, path: &str) -> Response {
        self.client.delete(self.url(path)).send().await.expect("DELETE")
    }

    /// Create a user and assert it was accepted
    pub async fn seed_user(&self, user: &Value) {
        let res = self.post("/users/", user).await;
        assert_eq!(res.status(), StatusCode::CREATED, "seeding user {}", user);
    }

    /// Create a project and assert it was accepted
    pub async fn seed_project(&self, project: &Value) {
        let res = self.post("/projects/", project).await;
        assert_eq!(res.status(), StatusCode::CREATED, "seeding project {}", project);
    }
}

pub fn user(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Juan",
        "email": format!("{}@example.com", id),
        "age": 25
    })
}

pub fn project(id: &str, owner_id: &str) -> Value {
    json!({
        "id": id,
        "name": "API",
        "description": "Document store evaluation",
        "owner_id": owner_id,
        "created_at": "2024-10-31T19:00:00Z"
    })
}

/// Status plus the JSON body
pub async fn read(res: Response) -> (StatusCode, Value) {
    let status = res.status();
    let body = res.json::<Value>().await.expect("json body");
    (status, body)
}

pub fn detail(body: &Value) -> &str {
    body["detail"].as_str().unwrap_or_default()
}
