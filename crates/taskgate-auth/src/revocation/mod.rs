//! Revocation and refresh-rotation bookkeeping.

pub mod store;

pub use store::RevocationStore;
