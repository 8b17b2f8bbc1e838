use tracing::info;

use fixture_core::config::bind_addr;
use fixture_core::tracing::init_tracing;
use hello_router::config::RouterConfig;
use hello_router::router::build_router;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = RouterConfig::from_env();

    let router = build_router();
    let addr = bind_addr(&config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("hello-router listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
