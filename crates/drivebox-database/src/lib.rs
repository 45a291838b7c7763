//! # drivebox-database
//!
//! Metadata persistence for DriveBox. Defines the store traits consumed by
//! the service layer and provides two implementations: PostgreSQL (sqlx)
//! for production and an in-memory variant for tests and the demo profile.

pub mod connection;
pub mod memory;
pub mod repositories;
