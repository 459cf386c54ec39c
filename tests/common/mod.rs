//! Common test utilities for integration tests

use axum::{
    body::Body,
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE},
        HeaderValue, Response, StatusCode,
    },
    routing::get,
    serve, Router,
};
use std::io::{Cursor, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

const BUNDLE_PATH: &str = "/api/urls/test-bundle";

/// Helper function to build an in-memory ZIP archive with specified files
#[allow(dead_code)]
pub fn create_test_zip(files: &[(&str, &str)]) -> Vec<u8> {
    use zip::write::FileOptions;
    use zip::ZipWriter;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for (name, content) in files {
        zip.start_file(*name, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }

    zip.finish().unwrap().into_inner()
}

/// Serves a single `200 OK` response on a local port and returns its URL.
#[allow(dead_code)]
pub async fn serve_once(content_type: Option<&str>, body: Vec<u8>) -> String {
    serve_response(StatusCode::OK, content_type, body, 1).await
}

/// Serves `requests` identical responses on a local port and returns the bundle URL.
///
/// The content type is sent as raw bytes, so values outside visible ASCII reach the
/// client untouched. The server shuts down after answering the last request.
#[allow(dead_code)]
pub async fn serve_response(
    status: StatusCode,
    content_type: Option<&str>,
    body: Vec<u8>,
    requests: usize,
) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let content_type =
        content_type.map(|value| HeaderValue::from_bytes(value.as_bytes()).unwrap());
    let served = Arc::new(AtomicUsize::new(0));
    let done = Arc::new(Notify::new());

    let router = Router::new().route(
        BUNDLE_PATH,
        get({
            let done = done.clone();
            move || {
                let body = body.clone();
                let content_type = content_type.clone();
                let served = served.clone();
                let done = done.clone();
                async move {
                    if served.fetch_add(1, Ordering::SeqCst) + 1 >= requests {
                        done.notify_one();
                    }
                    let mut builder = Response::builder()
                        .status(status)
                        .header(CONTENT_LENGTH, body.len());
                    if let Some(content_type) = content_type {
                        builder = builder.header(CONTENT_TYPE, content_type);
                    }
                    builder.body(Body::from(body)).unwrap()
                }
            }
        }),
    );

    let server = serve(listener, router).with_graceful_shutdown(async move {
        done.notified().await;
    });

    tokio::spawn(async move {
        let _ = server.await;
    });

    format!("http://{addr}{BUNDLE_PATH}?download=true")
}

/// Returns a URL on a local port nothing is listening on.
#[allow(dead_code)]
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api/urls/gone")
}

/// HTTP client that ignores proxy environment variables, so local servers are reached directly.
#[allow(dead_code)]
pub fn direct_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Expiration notice as sent by the documentation endpoint
#[allow(dead_code)]
pub const EXPIRED_NOTICE: &str = r#"{"message": "URL EXPIRED - please regenerate"}"#;

/// JSON body that does not mention expiration
#[allow(dead_code)]
pub const OK_NOTICE: &str = r#"{"message": "ok"}"#;

/// Sample marker file content
#[allow(dead_code)]
pub const SAMPLE_PLAN: &str = "# Implementation plan\n\n1. Set up the project\n";
