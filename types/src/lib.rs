//! Fundamental types for the CUSTODIAN engine.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: actor identities, token ids, proposal fingerprints, asset
//! serials, timestamps, and the capability enum.

pub mod actor;
pub mod capability;
pub mod fingerprint;
pub mod serial;
pub mod time;
pub mod token;

pub use actor::ActorId;
pub use capability::Capability;
pub use fingerprint::Fingerprint;
pub use serial::{Serial, SerialError, SERIAL_LEN};
pub use time::Timestamp;
pub use token::TokenId;
