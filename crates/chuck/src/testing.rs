//! Stub joke API for unit tests

use crate::api::ApiClient;
use crate::config::Config;
use axum::{
    http::{header, StatusCode},
    routing::get,
    Router,
};

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub server");
    let addr = listener.local_addr().expect("stub server address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server");
    });

    format!("http://{addr}")
}

/// A router answering GET `path` with a fixed status and body
pub fn json_route(path: &str, status: StatusCode, body: &'static str) -> Router {
    Router::new().route(
        path,
        get(move || async move { (status, [(header::CONTENT_TYPE, "application/json")], body) }),
    )
}

pub fn client_for(base_url: String) -> ApiClient {
    ApiClient::new(Config::default().with_overrides(Some(base_url), None)).expect("client")
}
