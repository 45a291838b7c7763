//! Request handlers, organized by domain.

pub mod auth;
pub mod file;
pub mod folder;
pub mod health;
