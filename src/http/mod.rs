//! HTTP server module
//!
//! This module handles HTTP request routing and handling:
//! - Axum router with the status and transcript endpoints
//! - Query parameter validation
//! - Upstream fault to HTTP status mapping with JSON error bodies
//! - Download headers (Content-Type, Content-Disposition)
//! - CORS middleware

pub mod handlers;
pub mod routes;

pub use routes::create_router;
