//! # taskgate-core
//!
//! Core crate for TaskGate. Contains the unified error system, configuration
//! schemas, typed identifiers, and the traits through which the auth core
//! talks to its key-value backend and password verifier.
//!
//! This crate has **no** internal dependencies on other TaskGate crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
