//! Internal token id type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A sequential internal token id.
///
/// Ids are allocated 1-based and monotonically by the minting path; an id is
/// never reused, even after its token is burned. `TokenId::ZERO` is the
/// sentinel for "no target" in proposals whose action has no token subject.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenId(u64);

impl TokenId {
    /// Sentinel id for actions without a token target.
    pub const ZERO: Self = Self(0);

    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
