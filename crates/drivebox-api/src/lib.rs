//! # drivebox-api
//!
//! HTTP API layer for DriveBox built on Axum.
//!
//! Provides the REST endpoints, middleware, extractors, DTOs, and error
//! mapping for the drive backend.

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
