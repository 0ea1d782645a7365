//! Serve command - expose the extractor over HTTP.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use clap::Args;
use console::style;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, warn};

use formscan_core::{FixedFormParser, ProcessRequest};

/// Arguments for the serve command.
#[derive(Args)]
pub struct ServeArgs {
    /// Bind address (default from config)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (default from config)
    #[arg(short, long)]
    port: Option<u16>,
}

pub async fn run(args: ServeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let parser = Arc::new(FixedFormParser::from_config(&config)?);

    let host = args.host.unwrap_or(config.server.host);
    let port = args.port.unwrap_or(config.server.port);
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", addr, e))?;

    println!(
        "{} Listening on http://{}/process-text",
        style("ℹ").blue(),
        addr
    );

    axum::serve(listener, router(parser))
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}

fn router(parser: Arc<FixedFormParser>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/process-text", post(process_text))
        .layer(cors)
        .with_state(parser)
}

async fn process_text(State(parser): State<Arc<FixedFormParser>>, body: Bytes) -> Response {
    info!("Received process-text request");

    let request = match ProcessRequest::from_json(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejected request: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response();
        }
    };

    let response = parser.respond(&request);
    debug!("Extracted fields: {:?}", response.results);

    Json(response).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn call(body: &'static [u8]) -> (StatusCode, Value) {
        let parser = Arc::new(FixedFormParser::new());
        let response = process_text(State(parser), Bytes::from_static(body)).await;

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_process_text() {
        let (status, json) =
            call(br#"{"text": "Full Name\nJane Roe\nAccount Type\nCheckingv"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["input"], "Full Name\nJane Roe\nAccount Type\nCheckingv");
        assert_eq!(json["cleaned"], "Full Name\nJane Roe\nAccount Type\nChecking");
        assert_eq!(json["results"]["name"], "Jane Roe");
        assert_eq!(json["results"]["accountType"], "Checking");
        assert_eq!(json["results"]["address"], "");
    }

    #[tokio::test]
    async fn test_missing_text() {
        let (status, json) = call(br#"{"content": "x"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "No text provided");
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let (status, json) = call(b"not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().starts_with("malformed request body"));
    }
}
