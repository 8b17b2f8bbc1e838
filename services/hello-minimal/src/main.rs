use tracing::info;

use fixture_core::config::bind_addr;
use fixture_core::tracing::init_tracing;
use hello_minimal::config::MinimalConfig;
use hello_minimal::server::serve;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = MinimalConfig::from_env();

    let addr = bind_addr(&config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("hello-minimal listening on {addr}");
    serve(listener).await.expect("server error");
}
