//! Core traits defined in `taskgate-core` and implemented by other crates.

pub mod cache;
pub mod password;

pub use cache::CacheProvider;
pub use password::PasswordVerifier;
