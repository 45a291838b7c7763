//! User registration and login.

pub mod service;

pub use service::{AuthOutcome, AuthService};
