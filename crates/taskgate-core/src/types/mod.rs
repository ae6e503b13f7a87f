//! Core type definitions used across the TaskGate workspace.

pub mod id;

pub use id::*;
