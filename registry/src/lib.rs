//! Asset registry — the system of record for tokens.
//!
//! Owns token existence, ownership, and metadata URIs, plus the per-token
//! metadata lock flag. The registry enforces no policy of its own beyond
//! basic consistency (no duplicate ids, no mutation of missing tokens, no
//! URI writes on locked tokens); the quorum engine layers capability checks
//! and multi-party approval on top.

pub mod error;
pub mod registry;

pub use error::RegistryError;
pub use registry::{AssetRegistry, TokenRecord};
