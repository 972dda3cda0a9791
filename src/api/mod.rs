//! HTTP boundary layer
//!
//! Routes, handlers and DTOs for serving the engine over axum. The core
//! makes no transport assumptions; everything HTTP-shaped lives here.

pub mod handlers;
pub mod router;
pub mod types;

pub use router::{create_router, AppState};
