use super::handlers::{handle_artifacts, handle_generate, handle_health};
use super::{AppState, MAX_BODY_SIZE};

use crate::config::Config;
use crate::core::generation::Generator;
use crate::core::providers::{OpenAiResponsesProvider, StructuredProvider};
use anyhow::{Context, Result};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::{any, get, post},
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;

/// Returns true when the bind address is not a loopback address.
fn is_public_bind(host: &str) -> bool {
    !matches!(
        host,
        "127.0.0.1" | "localhost" | "::1" | "[::1]" | "0:0:0:0:0:0:0:1"
    )
}

/// Run the HTTP gateway using axum with proper HTTP/1.1 compliance.
pub async fn run_gateway(host: &str, port: u16, config: Arc<Config>) -> Result<()> {
    if is_public_bind(host) && !config.gateway.allow_public_bind {
        anyhow::bail!(
            "Refusing to bind to {host}: the generation endpoint spends API credit.\n\
             Fix: use --host 127.0.0.1 (default), or set\n\
             [gateway] allow_public_bind = true in config.toml."
        );
    }

    let listener = bind_listener(host, port).await?;
    run_gateway_with_listener(host, listener, config).await
}

/// Bind `host:port`, resolving names like `localhost` and bare or bracketed IPv6 literals.
async fn bind_listener(host: &str, port: u16) -> Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind((host.trim_matches(['[', ']']), port))
        .await
        .with_context(|| format!("bind gateway socket {host}:{port}"))
}

fn build_gateway_state(config: &Config) -> AppState {
    let provider: Arc<dyn StructuredProvider> = Arc::new(OpenAiResponsesProvider::with_base_url(
        config.provider.api_key.as_deref(),
        &config.provider.base_url,
        config.provider.timeout_secs,
    ));
    if config.provider.api_key.is_none() {
        tracing::warn!("no OpenAI API key configured; /generate will answer with 500");
    }
    AppState {
        generator: Generator::new(provider),
    }
}

/// Run the HTTP gateway from a pre-bound listener.
pub async fn run_gateway_with_listener(
    host: &str,
    listener: tokio::net::TcpListener,
    config: Arc<Config>,
) -> Result<()> {
    let actual_port = listener
        .local_addr()
        .context("get gateway listener local address")?
        .port();
    let display_addr = format!("{host}:{actual_port}");

    let state = build_gateway_state(&config);
    print_gateway_banner(&display_addr, state.generator.model());

    let app = build_app(
        state,
        &config.gateway.cors_origins,
        config.gateway.request_timeout_secs,
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("gateway shutting down");
        })
        .await
        .context("serve HTTP gateway")?;

    Ok(())
}

fn print_gateway_banner(display_addr: &str, model: &str) {
    println!("Gateway listening on {display_addr}");
    println!("  POST /generate  -> {model}");
    println!("  POST /artifacts");
    println!("  GET  /health");
}

pub fn build_app(state: AppState, cors_origins: &[String], request_timeout_secs: u64) -> Router {
    let mut app = Router::new()
        .route("/health", get(handle_health))
        .route("/generate", any(handle_generate))
        .route("/artifacts", post(handle_artifacts))
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(request_timeout_secs),
        ));

    if !cors_origins.is_empty() {
        let origins: Vec<_> = cors_origins.iter().filter_map(|o| o.parse().ok()).collect();
        app = app.layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        );
    }

    app
}
