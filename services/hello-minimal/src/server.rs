//! Connection-level HTTP serving, no router in front.
//!
//! One service function answers every request with the fixed greeting,
//! whatever the path or method.

use std::convert::Infallible;
use std::io;

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

const GREETING: &str = "Hello world!\n";

/// The single service function. No status is set explicitly; the default
/// success status applies.
pub async fn greet(_req: Request<Incoming>) -> Result<Response<Full<Bytes>>, Infallible> {
    Ok(greeting_response())
}

pub fn greeting_response() -> Response<Full<Bytes>> {
    Response::new(Full::new(Bytes::from_static(GREETING.as_bytes())))
}

/// Accept loop. Serves connections until the process is terminated;
/// an accept error is fatal.
pub async fn serve(listener: TcpListener) -> io::Result<()> {
    loop {
        let (stream, _) = listener.accept().await?;
        let io = TokioIo::new(stream);
        tokio::spawn(async move {
            if let Err(e) = http1::Builder::new()
                .serve_connection(io, service_fn(greet))
                .await
            {
                tracing::debug!("connection error: {e}");
            }
        });
    }
}
