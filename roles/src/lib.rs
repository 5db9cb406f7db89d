//! Identity & role authority.
//!
//! Answers "does actor X hold capability Y?" for the quorum engine. The
//! engine consults this registry before every privileged operation; it never
//! caches the answer, so revocations take effect on the next call.

pub mod registry;

pub use registry::RoleRegistry;
