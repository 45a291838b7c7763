//! Trait definitions implemented by infrastructure crates.

pub mod blob;

pub use blob::{BlobStore, StoredObject};
