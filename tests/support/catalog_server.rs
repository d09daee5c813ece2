use axum::http::{header, StatusCode, Uri};
use axum::routing::get;
use axum::Router;
use bookfinder::config::Config;
use std::sync::{Arc, Mutex};

/// Local stand-in for the catalog's `search.json` endpoint
///
/// Answers every request with the same status and body, and records the
/// path and query string of each request it receives.
pub struct CatalogServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl CatalogServer {
    pub async fn start(status: StatusCode, body: &str) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();
        let body = body.to_string();

        let app = Router::new().route(
            "/search.json",
            get(move |uri: Uri| {
                let recorded = recorded.clone();
                let body = body.clone();
                async move {
                    recorded.lock().unwrap().push(uri.to_string());
                    (status, [(header::CONTENT_TYPE, "application/json")], body)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind catalog server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    pub async fn ok(body: &str) -> Self {
        Self::start(StatusCode::OK, body).await
    }

    /// Config pointing the client at this server
    pub fn config(&self) -> Config {
        Config {
            catalog_url: self.base_url.clone(),
            ..Config::default()
        }
    }

    /// Path and query of every request received, oldest first
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Base URL with nothing listening behind it
pub async fn unreachable_catalog_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
