//! Axum-based HTTP gateway exposing the structured generation endpoint.
//!
//! - `/generate` accepts POST only; every other method gets a fixed 405 body
//! - Request body size limits (64KB max)
//! - Whole-request timeout so a stuck provider call cannot hold a connection forever

mod handlers;
mod server;

pub use server::{build_app, run_gateway, run_gateway_with_listener};

use crate::core::generation::Generator;

/// Maximum request body size (64KB) -- prevents memory exhaustion
pub const MAX_BODY_SIZE: usize = 65_536;

/// Shared state for all axum handlers
#[derive(Clone)]
pub struct AppState {
    pub generator: Generator,
}
