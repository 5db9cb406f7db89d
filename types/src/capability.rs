//! Capabilities an actor may hold.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named permission checked before every privileged operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Mint new tokens with fresh serials.
    Mint,
    /// Create and reactivate proposals.
    Propose,
    /// Approve, revoke, archive, and clean up proposals.
    Approve,
    /// Lock token metadata.
    ManageMetadata,
    /// Configuration changes and metadata unlock.
    Admin,
}

impl Capability {
    /// Human-readable name of this capability.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mint => "mint",
            Self::Propose => "propose",
            Self::Approve => "approve",
            Self::ManageMetadata => "manage_metadata",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
