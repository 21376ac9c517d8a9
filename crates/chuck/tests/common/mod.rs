//! Shared test helpers for integration tests

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use axum::{
    http::{header, StatusCode},
    routing::get,
    Router,
};

/// Helper to get a chuck command
pub fn chuck() -> Command {
    Command::new(cargo::cargo_bin!("chuck"))
}

/// Helper to get a chuck command pointed at a stub API
pub fn chuck_against(base_url: &str) -> Command {
    let mut cmd = chuck();
    cmd.args(["--api-base", base_url]);
    cmd
}

/// Serve `router` on an ephemeral local port from a background thread.
///
/// Returns the base URL. The server lives until the test process exits.
pub fn serve(router: Router) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            axum::serve(listener, router).await.unwrap();
        });
    });

    format!("http://{addr}")
}

/// Helper to build a route answering GET `path` with a fixed status and body
pub fn route(router: Router, path: &str, status: StatusCode, body: &'static str) -> Router {
    router.route(
        path,
        get(move || async move { (status, [(header::CONTENT_TYPE, "application/json")], body) }),
    )
}

/// Helper to serve a single fixed response
pub fn serve_one(path: &str, status: StatusCode, body: &'static str) -> String {
    serve(route(Router::new(), path, status, body))
}
