//! In-memory store implementations.
//!
//! Behaviorally equivalent to the PostgreSQL repositories, including the
//! sibling-name uniqueness check (performed under the write lock so
//! concurrent creates observe the same conflict the unique index would
//! raise). Used by the test suites and the demo profile.

pub mod file;
pub mod folder;
pub mod user;

pub use file::MemoryFileRepository;
pub use folder::MemoryFolderRepository;
pub use user::MemoryUserRepository;
