//! Server layer - HTTP boundary
//!
//! Thin axum front over the translate-lyrics pipeline: request parsing,
//! validation, and error-to-status mapping live here.

pub mod http;
pub mod state;

pub use http::{create_router, MAX_BODY_BYTES};
pub use state::AppState;
