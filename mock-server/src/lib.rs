//! Deterministic HTTP fixture for exercising the GET client end to end.
//!
//! # Design
//! Stateless plain-text routes with known bodies: `/greeting` for the
//! smallest possible assertion, `/pages/{name}` to check that the request
//! path reaches the server intact, and `/large` for a body several receive
//! buffers long so reassembly is covered. Runs on whatever listener the
//! test hands over, which lets tests bind port 0 and avoid collisions.

use axum::{extract::Path, routing::get, Router};
use tokio::net::TcpListener;

pub fn app() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/greeting", get(greeting))
        .route("/pages/{name}", get(page))
        .route("/large", get(large))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn root() -> &'static str {
    "mock server up"
}

async fn greeting() -> &'static str {
    "HELLO"
}

async fn page(Path(name): Path<String>) -> String {
    format!("page: {name}")
}

/// 150 kB, comfortably past one 65000-byte receive buffer.
async fn large() -> String {
    "0123456789".repeat(15_000)
}
